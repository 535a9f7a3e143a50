// src/models/ou_process.rs
//! Ornstein-Uhlenbeck (Vasicek) process sampled exactly at unit time steps.
//!
//! # Mathematical Framework
//!
//! ```text
//! dX_t = α(γ - X_t) dt + β dW_t
//! ```
//!
//! With solution at integer times:
//! ```text
//! X_t = X_0 e^(-αt) + γ(1 - e^(-αt)) + β e^(-αt) I_t
//! I_t = Σ_{s<t} e^(αs) dW_s,   I_0 = 0
//! ```
//!
//! # Numerics
//!
//! `e^(αt)` overflows long before the product `e^(-αt) I_t` does, so the
//! weighted integral is carried already scaled:
//! ```text
//! J_t = e^(-αt) I_t = Σ_{s<t} e^(-α(t-s)) dW_s
//! J_0 = 0,   J_{t+1} = e^(-α) (J_t + dW_t)
//! ```
//! For α ≥ 0 every factor is ≤ 1 and nothing can overflow. For α < 0 the
//! process is explosive; horizons with `-α(T-1)` beyond `MAX_EXP_ARG` are
//! rejected with `NumericOverflow`, as is any non-finite output.

use super::model::SDEModel;
use crate::error::{validation::*, SdeError, SdeResult};
use crate::math_utils::MAX_EXP_ARG;
use crate::rng::NormalGenerator;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OuParams {
    pub alpha: f64, // Mean reversion speed
    pub gamma: f64, // Long-run mean
    pub beta: f64,  // Volatility scale
}

impl OuParams {
    pub fn new(alpha: f64, gamma: f64, beta: f64) -> Self {
        OuParams { alpha, gamma, beta }
    }
}

/// Per-call simulation options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OuSimulation {
    /// Starting value; `None` starts at the long-run mean `gamma`.
    pub x0: Option<f64>,
    /// Reseed the generator before drawing increments.
    pub seed: Option<u64>,
}

pub struct OuProcess {
    pub params: OuParams,
}

impl OuProcess {
    pub fn new(params: OuParams) -> Self {
        OuProcess { params }
    }

    fn validate_params(params: &OuParams) -> SdeResult<()> {
        validate_finite("alpha", params.alpha)?;
        validate_finite("gamma", params.gamma)?;
        validate_finite("beta", params.beta)?;
        Ok(())
    }

    /// Exact OU path of length `t`, drawing the increments from `rng`.
    pub fn simulate(
        &self,
        t: usize,
        options: &OuSimulation,
        rng: &mut NormalGenerator,
    ) -> SdeResult<Vec<f64>> {
        // Fail on parameters before touching the generator state.
        Self::validate_params(&self.params)?;
        self.check_horizon(t)?;
        let dw = rng.sample_increments(t, options.seed);
        self.simulate_with_increments(&dw, options.x0)
    }

    /// Exact OU path driven by a caller-supplied increment sequence.
    ///
    /// The output has `dw.len()` elements; `dw[t]` first affects `X_{t+1}`.
    pub fn simulate_with_increments(&self, dw: &[f64], x0: Option<f64>) -> SdeResult<Vec<f64>> {
        Self::validate_params(&self.params)?;
        self.check_horizon(dw.len())?;

        let OuParams { alpha, gamma, beta } = self.params;
        let x0 = x0.unwrap_or(gamma);
        validate_finite("x0", x0)?;

        let decay = (-alpha).exp();
        let mut scaled_integral = 0.0;
        let mut path = Vec::with_capacity(dw.len());

        for (step, &dw_t) in dw.iter().enumerate() {
            // Float time keeps α·t out of integer arithmetic.
            let t = step as f64;
            let exp_alpha_t = (-alpha * t).exp();
            let x_t = gamma + (x0 - gamma) * exp_alpha_t + beta * scaled_integral;

            if !x_t.is_finite() {
                return Err(SdeError::NumericOverflow {
                    method: "OU exact sampler".to_string(),
                    reason: format!("path value at t = {} is not finite: {}", step, x_t),
                });
            }
            path.push(x_t);
            scaled_integral = decay * (scaled_integral + dw_t);
        }

        Ok(path)
    }

    /// Reject horizons whose growth factor `e^(-α(T-1))` is not representable.
    fn check_horizon(&self, t: usize) -> SdeResult<()> {
        let horizon = t.saturating_sub(1) as f64;
        let growth_exponent = -self.params.alpha * horizon;

        if growth_exponent > MAX_EXP_ARG {
            return Err(SdeError::NumericOverflow {
                method: "OU exact sampler".to_string(),
                reason: format!(
                    "-alpha * (T - 1) = {:.3} exceeds the supported bound {} (alpha = {}, T = {})",
                    growth_exponent, MAX_EXP_ARG, self.params.alpha, t
                ),
            });
        }
        if growth_exponent > 0.9 * MAX_EXP_ARG {
            warn!(
                alpha = self.params.alpha,
                horizon = t,
                "explosive OU horizon close to the f64 exponent limit"
            );
        }
        Ok(())
    }
}

impl SDEModel for OuProcess {
    fn drift(&self, x: f64, _t: f64) -> f64 {
        self.params.alpha * (self.params.gamma - x)
    }

    fn diffusion(&self, _x: f64, _t: f64) -> f64 {
        self.params.beta
    }
}
