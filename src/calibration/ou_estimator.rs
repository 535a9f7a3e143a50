// src/calibration/ou_estimator.rs
//! OU parameter recovery from an observed path.
//!
//! At unit steps the increments regress linearly on the level:
//! ```text
//! X_{i+1} - X_i ≈ a X_i + b
//! α = -a,   γ = b / α,   β = std(residuals)   (population std)
//! ```
//! `a = 0` (or a non-finite `a`) leaves `γ` undefined and is reported as
//! `SdeError::DegenerateMeanReversion`. No NaN or infinite estimate is ever
//! returned as `Ok`.

use super::regression::{LinearRegression, SimpleOls};
use crate::error::{SdeError, SdeResult};
use crate::math_utils::population_std;
use crate::models::ou_process::OuParams;
use tracing::debug;

/// Estimate OU parameters with the built-in closed-form OLS.
pub fn estimate_ou_params(path: &[f64]) -> SdeResult<OuParams> {
    estimate_ou_params_with(path, &mut SimpleOls::default())
}

/// Estimate OU parameters using any regression implementation.
pub fn estimate_ou_params_with<L: LinearRegression + ?Sized>(
    path: &[f64],
    regression: &mut L,
) -> SdeResult<OuParams> {
    if path.len() < 2 {
        return Err(SdeError::InsufficientData {
            required: 2,
            actual: path.len(),
        });
    }

    let levels = &path[..path.len() - 1];
    let increments: Vec<f64> = path.windows(2).map(|w| w[1] - w[0]).collect();

    regression.fit(levels, &increments)?;
    let slope = regression.coefficient();
    if !slope.is_finite() || slope == 0.0 {
        return Err(SdeError::DegenerateMeanReversion { slope });
    }

    let alpha = -slope;
    let gamma = regression.intercept() / alpha;
    if !gamma.is_finite() {
        return Err(SdeError::NumericOverflow {
            method: "OU estimator".to_string(),
            reason: format!("long-run mean {} from slope {}", gamma, slope),
        });
    }

    let residuals: Vec<f64> = regression
        .predict(levels)
        .iter()
        .zip(&increments)
        .map(|(fitted, y)| y - fitted)
        .collect();
    let beta = population_std(&residuals);
    if !beta.is_finite() {
        return Err(SdeError::NumericOverflow {
            method: "OU estimator".to_string(),
            reason: format!("residual standard deviation {}", beta),
        });
    }

    debug!(alpha, gamma, beta, observations = path.len(), "calibrated OU parameters");
    Ok(OuParams { alpha, gamma, beta })
}
