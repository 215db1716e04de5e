// src/models/ou_process.rs
use super::model::SDEModel;
use std::f64;

/// Ornstein-Uhlenbeck mean-reverting process
///
/// ```text
/// dX_t = θ(μ - X_t) dt + σ dW_t
/// ```
pub struct OuProcess {
    pub theta: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl OuProcess {
    pub fn new(theta: f64, mu: f64, sigma: f64) -> Self {
        OuProcess { theta, mu, sigma }
    }

    /// E[X_t | X_0 = x0] = μ + (x0 - μ)e^{-θt}
    pub fn exact_mean(&self, x0: f64, t: f64) -> f64 {
        self.mu + (x0 - self.mu) * (-self.theta * t).exp()
    }

    /// Var[X_t] = σ²/(2θ) (1 - e^{-2θt})
    pub fn exact_variance(&self, t: f64) -> f64 {
        self.sigma * self.sigma / (2.0 * self.theta) * (1.0 - (-2.0 * self.theta * t).exp())
    }

    /// Long-run variance σ²/(2θ)
    pub fn stationary_variance(&self) -> f64 {
        self.sigma * self.sigma / (2.0 * self.theta)
    }
}

impl SDEModel for OuProcess {
    fn drift(&self, x: f64, _t: f64) -> f64 {
        self.theta * (self.mu - x)
    }

    fn diffusion(&self, _x: f64, _t: f64) -> f64 {
        self.sigma
    }
}
