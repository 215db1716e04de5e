// src/models/model.rs
pub trait SDEModel {
    fn drift(&self, x: f64, t: f64) -> f64;
    fn diffusion(&self, x: f64, t: f64) -> f64;
}

/// Wraps a pair of closures `(x, t) -> f64` as an [`SDEModel`].
pub struct SdeFunctions<F, G>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> f64,
{
    drift_fn: F,
    diffusion_fn: G,
}

impl<F, G> SdeFunctions<F, G>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> f64,
{
    pub fn new(drift_fn: F, diffusion_fn: G) -> Self {
        SdeFunctions { drift_fn, diffusion_fn }
    }
}

impl<F, G> SDEModel for SdeFunctions<F, G>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> f64,
{
    fn drift(&self, x: f64, t: f64) -> f64 {
        (self.drift_fn)(x, t)
    }

    fn diffusion(&self, x: f64, t: f64) -> f64 {
        (self.diffusion_fn)(x, t)
    }
}
