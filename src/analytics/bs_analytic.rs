// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x).

use crate::error::validation::{validate_finite, validate_positive};
use crate::error::SdeResult;
use crate::math_utils::{norm_cdf, norm_pdf};

/// European option contract parameters.
///
/// `t` is time to expiry in years; `r` may take any finite value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptionContract {
    pub s: f64,     // Spot price
    pub k: f64,     // Strike
    pub t: f64,     // Time to expiry (years)
    pub r: f64,     // Risk-free rate
    pub sigma: f64, // Volatility
}

impl OptionContract {
    /// Validated contract: `s`, `k`, `t`, `sigma` > 0 and `r` finite.
    pub fn new(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> SdeResult<Self> {
        let contract = OptionContract { s, k, t, r, sigma };
        contract.validate()?;
        Ok(contract)
    }

    pub fn validate(&self) -> SdeResult<()> {
        validate_positive("s", self.s)?;
        validate_positive("k", self.k)?;
        validate_positive("t", self.t)?;
        validate_finite("r", self.r)?;
        validate_positive("sigma", self.sigma)?;
        Ok(())
    }

    /// `e^(-rT)`
    pub fn discount(&self) -> f64 {
        (-self.r * self.t).exp()
    }

    /// ```text
    /// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
    /// ```
    pub fn d1(&self) -> f64 {
        ((self.s / self.k).ln() + (self.r + 0.5 * self.sigma * self.sigma) * self.t)
            / (self.sigma * self.t.sqrt())
    }

    /// `d₂ = d₁ - σ√T`
    pub fn d2(&self) -> f64 {
        self.d1() - self.sigma * self.t.sqrt()
    }
}

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C(S,K,r,σ,T) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
///
/// # Returns
/// Present value of the call option, or `InvalidParameters` when the
/// contract violates `S, K, T, σ > 0`.
pub fn call_value(contract: &OptionContract) -> SdeResult<f64> {
    contract.validate()?;
    let (d1, d2) = (contract.d1(), contract.d2());
    Ok(contract.s * norm_cdf(d1) - contract.k * contract.discount() * norm_cdf(d2))
}

/// Black-Scholes European put option price
///
/// # Formula
/// ```text
/// P(S,K,r,σ,T) = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
pub fn put_value(contract: &OptionContract) -> SdeResult<f64> {
    contract.validate()?;
    let (d1, d2) = (contract.d1(), contract.d2());
    Ok(contract.k * contract.discount() * norm_cdf(-d2) - contract.s * norm_cdf(-d1))
}

/// Black-Scholes Delta (∂V/∂S) for European call
///
/// # Formula
/// ```text
/// Δ = ∂C/∂S = Φ(d₁)
/// ```
///
/// # Interpretation
/// - Hedge ratio: number of shares to buy per option sold
/// - Range: [0, 1] for calls
pub fn bs_call_delta(contract: &OptionContract) -> SdeResult<f64> {
    contract.validate()?;
    Ok(norm_cdf(contract.d1()))
}

/// Black-Scholes Delta for European put: `Φ(d₁) - 1`, in [-1, 0].
pub fn bs_put_delta(contract: &OptionContract) -> SdeResult<f64> {
    Ok(bs_call_delta(contract)? - 1.0)
}

/// Black-Scholes Vega (∂V/∂σ), identical for calls and puts
///
/// # Formula
/// ```text
/// ν = S * φ(d₁) * √T
/// ```
///
/// # Interpretation
/// - Always positive for long options
/// - Maximum near the money
pub fn bs_vega(contract: &OptionContract) -> SdeResult<f64> {
    contract.validate()?;
    Ok(contract.s * norm_pdf(contract.d1()) * contract.t.sqrt())
}
