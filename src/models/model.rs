// src/models/model.rs
pub trait SDEModel {
    fn drift(&self, x: f64, t: f64) -> f64;
    fn diffusion(&self, x: f64, t: f64) -> f64;

    /// Euler step driven by a caller-supplied Brownian increment `dw`
    /// (already scaled by `sqrt(dt)`).
    fn step_with_dw(&self, x_current: &mut f64, t_current: f64, dt: f64, dw: f64) {
        *x_current += self.drift(*x_current, t_current) * dt + self.diffusion(*x_current, t_current) * dw;
    }
}
