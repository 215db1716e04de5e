// src/models/gbm.rs
use super::model::SDEModel;
use std::f64;

/// Geometric Brownian motion
///
/// ```text
/// dX_t = μ X_t dt + σ X_t dW_t
/// ```
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Gbm { mu, sigma }
    }

    /// E[X_t | X_0 = x0] = x0 e^{μt}
    pub fn exact_mean(&self, x0: f64, t: f64) -> f64 {
        x0 * (self.mu * t).exp()
    }

    /// Var[X_t | X_0 = x0] = x0² e^{2μt} (e^{σ²t} - 1)
    pub fn exact_variance(&self, x0: f64, t: f64) -> f64 {
        x0 * x0 * (2.0 * self.mu * t).exp() * ((self.sigma * self.sigma * t).exp() - 1.0)
    }
}

impl SDEModel for Gbm {
    fn drift(&self, x: f64, _t: f64) -> f64 {
        self.mu * x
    }

    fn diffusion(&self, x: f64, _t: f64) -> f64 {
        self.sigma * x
    }
}
