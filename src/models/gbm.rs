// src/models/gbm.rs
use crate::analytics::bs_analytic::OptionContract;

/// Geometric Brownian motion `dS = μ S dt + σ S dW`.
pub struct Gbm {
    pub s0: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(s0: f64, mu: f64, sigma: f64) -> Self {
        Gbm { s0, mu, sigma }
    }

    /// Risk-neutral dynamics of a contract's underlying (drift = r).
    pub fn risk_neutral(contract: &OptionContract) -> Self {
        Gbm::new(contract.s, contract.r, contract.sigma)
    }

    pub fn exact_step(&self, s_t: f64, dt: f64, normal_draw: f64) -> f64 {
        s_t * ((self.mu - 0.5 * self.sigma * self.sigma) * dt + self.sigma * dt.sqrt() * normal_draw).exp()
    }

    /// `S_T = S_0 exp((μ - σ²/2)T + σ√T Z)`
    pub fn terminal_price(&self, t: f64, normal_draw: f64) -> f64 {
        self.exact_step(self.s0, t, normal_draw)
    }
}
