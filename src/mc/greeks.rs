// src/mc/greeks.rs
//! Delta/vega estimators built on a simulated terminal GBM price.
//!
//! # Single-path statistics
//!
//! One draw `Z ~ N(0,1)` gives
//! ```text
//! S_T = S exp((r - σ²/2)T + σ√T Z)
//! ```
//! and from it the payoff-scaled statistics
//! ```text
//! call delta ≈ max(S_T - K, 0) e^(-rT) S_T / S
//! put delta  ≈ max(K - S_T, 0) e^(-rT) S_T / S
//! call vega  ≈ max(S_T - K, 0) e^(-rT) S_T (ln(S_T/S) - (r + σ²/2)T) / σ
//! put vega   ≈ max(K - S_T, 0) e^(-rT) S_T (ln(S_T/S) - (r + σ²/2)T) / σ
//! ```
//! A single draw has no convergence guarantee and very high variance.
//! These statistics are NOT the Black-Scholes delta/vega; they are kept
//! as-is, and the textbook values are available as [`GreekVariant::ClosedForm`].
//!
//! # Variants
//!
//! - `SinglePathMc` (default): one shared draw for all requested greeks
//! - `ClosedForm`: `Φ(d₁)`, `Φ(d₁) - 1`, `S φ(d₁) √T`
//! - `PathAveragedMc`: mean of the single-path statistics over `paths`
//!   independent draws, computed in parallel with one stream per path

use crate::analytics::bs_analytic::{self, OptionContract};
use crate::error::{validation::*, SdeResult};
use crate::mc::payoffs::Payoff;
use crate::models::gbm::Gbm;
use crate::rng::{self, NormalGenerator, RngFactory};
use bitflags::bitflags;
use rand::{Rng, RngCore};
use rayon::prelude::*;
use tracing::debug;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GreeksConfig: u32 {
        const DELTA = 1 << 0;
        const VEGA  = 1 << 1;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GreekVariant {
    #[default]
    SinglePathMc,
    ClosedForm,
    PathAveragedMc,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GreekConfig {
    pub variant: GreekVariant,
    pub greeks: GreeksConfig,
    pub paths: usize, // Only read by PathAveragedMc
    pub seed: Option<u64>,
}

impl GreekConfig {
    pub fn validate(&self) -> SdeResult<()> {
        if self.variant == GreekVariant::PathAveragedMc {
            validate_paths(self.paths)?;
        }
        Ok(())
    }
}

impl Default for GreekConfig {
    fn default() -> Self {
        GreekConfig {
            variant: GreekVariant::SinglePathMc,
            greeks: GreeksConfig::DELTA | GreeksConfig::VEGA,
            paths: 1,
            seed: None,
        }
    }
}

/// Requested greeks; fields not selected in `GreeksConfig` stay `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GreekReport {
    pub call_delta: Option<f64>,
    pub put_delta: Option<f64>,
    pub call_vega: Option<f64>,
    pub put_vega: Option<f64>,
}

/// All four single-path statistics from one terminal price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinglePathGreeks {
    pub terminal_price: f64,
    pub call_delta: f64,
    pub put_delta: f64,
    pub call_vega: f64,
    pub put_vega: f64,
}

/// Draw one risk-neutral terminal price for the contract.
pub fn simulate_terminal_price<R: Rng + ?Sized>(contract: &OptionContract, rng: &mut R) -> f64 {
    let z = rng::get_normal_draw(rng);
    Gbm::risk_neutral(contract).terminal_price(contract.t, z)
}

/// Single-path statistics for a given terminal price `s_t`.
///
/// A terminal price that underflowed to zero carries no weight: both vega
/// statistics are 0 there instead of `0 * ln(0)`.
pub fn single_path_greeks(contract: &OptionContract, s_t: f64) -> SinglePathGreeks {
    let call_payoff = Payoff::EuropeanCall { k: contract.k }.calculate(s_t);
    let put_payoff = Payoff::EuropeanPut { k: contract.k }.calculate(s_t);
    let discount = contract.discount();

    let delta_weight = discount * s_t / contract.s;
    let vega_weight = if s_t > 0.0 {
        discount
            * s_t
            * ((s_t / contract.s).ln() - (contract.r + 0.5 * contract.sigma * contract.sigma) * contract.t)
            / contract.sigma
    } else {
        0.0
    };

    SinglePathGreeks {
        terminal_price: s_t,
        call_delta: call_payoff * delta_weight,
        put_delta: put_payoff * delta_weight,
        call_vega: call_payoff * vega_weight,
        put_vega: put_payoff * vega_weight,
    }
}

/// Single-path call delta statistic from a fresh draw.
pub fn call_delta<R: Rng + ?Sized>(contract: &OptionContract, rng: &mut R) -> SdeResult<f64> {
    contract.validate()?;
    Ok(single_path_greeks(contract, simulate_terminal_price(contract, rng)).call_delta)
}

/// Single-path put delta statistic from a fresh draw.
pub fn put_delta<R: Rng + ?Sized>(contract: &OptionContract, rng: &mut R) -> SdeResult<f64> {
    contract.validate()?;
    Ok(single_path_greeks(contract, simulate_terminal_price(contract, rng)).put_delta)
}

/// Single-path call vega statistic from a fresh draw.
pub fn call_vega<R: Rng + ?Sized>(contract: &OptionContract, rng: &mut R) -> SdeResult<f64> {
    contract.validate()?;
    Ok(single_path_greeks(contract, simulate_terminal_price(contract, rng)).call_vega)
}

/// Single-path put vega statistic from a fresh draw.
pub fn put_vega<R: Rng + ?Sized>(contract: &OptionContract, rng: &mut R) -> SdeResult<f64> {
    contract.validate()?;
    Ok(single_path_greeks(contract, simulate_terminal_price(contract, rng)).put_vega)
}

/// Mean of the single-path statistics over `paths` independent draws.
///
/// Path `i` uses the stream `RngFactory::new(base_seed).create_std_rng(i)`,
/// so the result does not depend on how rayon splits the work (up to
/// floating-point summation order).
pub fn path_averaged_greeks(contract: &OptionContract, paths: usize, base_seed: u64) -> SdeResult<SinglePathGreeks> {
    contract.validate()?;
    validate_paths(paths)?;
    let factory = RngFactory::new(base_seed);

    let sums = (0..paths)
        .into_par_iter()
        .map(|i| {
            let mut path_rng = factory.create_std_rng(i as u64);
            let g = single_path_greeks(contract, simulate_terminal_price(contract, &mut path_rng));
            [g.terminal_price, g.call_delta, g.put_delta, g.call_vega, g.put_vega]
        })
        .reduce(
            || [0.0; 5],
            |a, b| [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3], a[4] + b[4]],
        );

    let n = paths as f64;
    Ok(SinglePathGreeks {
        terminal_price: sums[0] / n,
        call_delta: sums[1] / n,
        put_delta: sums[2] / n,
        call_vega: sums[3] / n,
        put_vega: sums[4] / n,
    })
}

/// Estimate the greeks selected in `config` with the chosen variant.
///
/// `config.seed` reseeds `rng` for `SinglePathMc`, and is the base seed of
/// the per-path streams for `PathAveragedMc` (drawn from `rng` when absent).
pub fn estimate_greeks(
    contract: &OptionContract,
    config: &GreekConfig,
    rng: &mut NormalGenerator,
) -> SdeResult<GreekReport> {
    contract.validate()?;
    config.validate()?;

    let (call_delta, put_delta, call_vega, put_vega) = match config.variant {
        GreekVariant::ClosedForm => {
            let vega = bs_analytic::bs_vega(contract)?;
            (
                bs_analytic::bs_call_delta(contract)?,
                bs_analytic::bs_put_delta(contract)?,
                vega,
                vega,
            )
        }
        GreekVariant::SinglePathMc => {
            if let Some(seed) = config.seed {
                rng.reseed(seed);
            }
            let g = single_path_greeks(contract, simulate_terminal_price(contract, rng));
            debug!(terminal_price = g.terminal_price, "single-path greek estimate");
            (g.call_delta, g.put_delta, g.call_vega, g.put_vega)
        }
        GreekVariant::PathAveragedMc => {
            let base_seed = config.seed.unwrap_or_else(|| rng.next_u64());
            let g = path_averaged_greeks(contract, config.paths, base_seed)?;
            debug!(paths = config.paths, base_seed, "path-averaged greek estimate");
            (g.call_delta, g.put_delta, g.call_vega, g.put_vega)
        }
    };

    let delta = config.greeks.contains(GreeksConfig::DELTA);
    let vega = config.greeks.contains(GreeksConfig::VEGA);
    Ok(GreekReport {
        call_delta: delta.then_some(call_delta),
        put_delta: delta.then_some(put_delta),
        call_vega: vega.then_some(call_vega),
        put_vega: vega.then_some(put_vega),
    })
}
