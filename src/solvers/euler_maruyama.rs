// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) √Δt Z_n
//! ```
//!
//! # Use Cases
//!
//! Reference integrator for models that also have an exact sampler: feeding
//! both the same standard-normal draws makes the discretisation error
//! directly visible, without Monte Carlo noise.

use crate::models::model::SDEModel;

/// Euler-Maruyama numerical scheme for SDE integration
pub struct EulerMaruyama;

impl EulerMaruyama {
    /// Integrate `model` from `x0` over the given standard-normal draws.
    ///
    /// Uses the same pre-increment convention as the exact samplers: the
    /// output has `normal_draws.len()` points, `out[0] == x0`, and draw `n`
    /// moves the state from `out[n]` to `out[n + 1]`.
    pub fn integrate<M: SDEModel>(model: &M, x0: f64, dt: f64, normal_draws: &[f64]) -> Vec<f64> {
        let sqrt_dt = dt.sqrt();
        let mut path = Vec::with_capacity(normal_draws.len());
        let mut x = x0;
        let mut t = 0.0;

        for &z in normal_draws {
            path.push(x);
            model.step_with_dw(&mut x, t, dt, sqrt_dt * z);
            t += dt;
        }
        path
    }
}
