//! # sde-paths: Monte Carlo Sample Paths for Scalar SDEs
//!
//! A Rust library for Monte Carlo simulation of scalar Stochastic Differential
//! Equations (SDEs) with the Euler-Maruyama scheme, producing full sample
//! paths rather than terminal-value summaries.
//!
//! ## Key Features
//!
//! - **Closure-Driven Dynamics**: Drift and diffusion are plain `(x, t)` closures
//! - **Reproducible**: Explicitly seeded RNG streams, no global state
//! - **Parallel Batches**: Independent per-path streams over Rayon
//! - **Ready-Made Models**: Ornstein-Uhlenbeck and geometric Brownian motion with exact moments
//! - **Robust Validation**: Configuration errors surfaced before any path is simulated
//!
//! ## Quick Start
//!
//! ```rust
//! use sde_paths::rng::seed_rng_from_u64;
//! use sde_paths::simulator::solve;
//!
//! // Mean reversion toward 1.0 with state-proportional noise
//! let mut rng = seed_rng_from_u64(42);
//! let paths = solve(
//!     |x, _t| 1.0 - x,  // drift a(x, t)
//!     |x, _t| 0.5 * x,  // diffusion b(x, t)
//!     1.0,              // initial value
//!     0.01,             // time step
//!     1.0,              // horizon
//!     100,              // number of simulations
//!     &mut rng,
//! );
//!
//! assert_eq!(paths.len(), 100);
//! assert_eq!(paths[0].len(), 101);
//! assert_eq!(paths[0][0], 1.0);
//! ```
//!
//! ## Mathematical Foundation
//!
//! The library discretizes scalar SDEs of the form
//! `dX_t = a(X_t, t) dt + b(X_t, t) dW_t` on a uniform time grid and
//! advances each path with independent Gaussian increments. Batches are
//! collections of such paths sharing a grid and initial state; statistics
//! over a batch converge to the distributional properties of the process.

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod models;
pub mod solvers;
pub mod simulator;

// Re-export commonly used types for convenience
pub use error::{SdeError, SdeResult};
