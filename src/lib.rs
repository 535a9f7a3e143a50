//! # fast-ou: Ornstein-Uhlenbeck Simulation, Calibration and GBM Greeks
//!
//! A Rust library for discretely sampled stochastic processes used in
//! derivatives pricing.
//!
//! ## Key Features
//!
//! - **Brownian paths**: seeded standard-normal increments and their running sums
//! - **Exact OU sampler**: overflow-safe exact discretisation of the Vasicek SDE
//! - **Calibration**: OLS recovery of `(α, γ, β)` from an observed path
//! - **Black-Scholes**: closed-form European call/put values, delta and vega
//! - **GBM Greeks**: single-path Monte Carlo statistics, closed-form and path-averaged variants
//!
//! Randomness always flows through an explicit [`rng::NormalGenerator`]
//! handle; there is no global generator state.
//!
//! ## Quick Start
//!
//! ```rust
//! use fast_ou::calibration::ou_estimator::estimate_ou_params;
//! use fast_ou::models::ou_process::{OuParams, OuProcess, OuSimulation};
//! use fast_ou::rng::NormalGenerator;
//!
//! let ou = OuProcess::new(OuParams::new(0.07, 0.0, 0.001));
//! let mut rng = NormalGenerator::default();
//! let options = OuSimulation { x0: None, seed: Some(7) };
//!
//! let path = ou.simulate(10_000, &options, &mut rng).expect("valid parameters");
//! let fitted = estimate_ou_params(&path).expect("non-degenerate path");
//! println!("alpha = {:.4}, gamma = {:.6}, beta = {:.6}", fitted.alpha, fitted.gamma, fitted.beta);
//! ```

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod models;
pub mod solvers;
pub mod calibration;
pub mod analytics;
pub mod mc;

// Re-export commonly used types for convenience
pub use analytics::bs_analytic::OptionContract;
pub use error::{SdeError, SdeResult};
pub use models::ou_process::OuParams;
pub use rng::NormalGenerator;
