// src/calibration/regression.rs
//! Univariate ordinary least squares with intercept.
//!
//! ```text
//! y ≈ a x + b
//! a = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
//! b = ȳ - a x̄
//! ```
//!
//! A constant feature has no least-squares slope. Both implementations then
//! return the minimum-norm solution: `a = 0`, `b = ȳ`. Levels whose spread
//! `Σ(x - x̄)²` is zero or subnormal in f64 are treated the same way.

use crate::error::{validation::validate_finite, SdeError, SdeResult};
use crate::math_utils::mean;
use nalgebra::{DMatrix, DVector};

/// Narrow fit/predict seam used by the OU estimator.
pub trait LinearRegression {
    fn fit(&mut self, features: &[f64], targets: &[f64]) -> SdeResult<()>;

    fn coefficient(&self) -> f64;

    fn intercept(&self) -> f64;

    fn predict(&self, features: &[f64]) -> Vec<f64> {
        let (a, b) = (self.coefficient(), self.intercept());
        features.iter().map(|&x| a * x + b).collect()
    }
}

fn check_inputs(features: &[f64], targets: &[f64]) -> SdeResult<()> {
    if features.len() != targets.len() {
        return Err(SdeError::InvalidConfiguration {
            field: "targets".to_string(),
            reason: format!(
                "length {} does not match {} features",
                targets.len(),
                features.len()
            ),
        });
    }
    if features.is_empty() {
        return Err(SdeError::InsufficientData { required: 1, actual: 0 });
    }
    for (&x, &y) in features.iter().zip(targets) {
        validate_finite("feature", x)?;
        validate_finite("target", y)?;
    }
    Ok(())
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Centred sum of squares `Σ(x - x̄)²`, or `None` when it is too small to divide by.
fn feature_spread(features: &[f64], x_bar: f64) -> Option<f64> {
    if is_constant(features) {
        return None;
    }
    let sxx: f64 = features.iter().map(|&x| (x - x_bar) * (x - x_bar)).sum();
    sxx.is_normal().then_some(sxx)
}

/// Closed-form OLS from centred sums.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimpleOls {
    coefficient: f64,
    intercept: f64,
}

impl LinearRegression for SimpleOls {
    fn fit(&mut self, features: &[f64], targets: &[f64]) -> SdeResult<()> {
        check_inputs(features, targets)?;
        let x_bar = mean(features);
        let y_bar = mean(targets);

        let Some(sxx) = feature_spread(features, x_bar) else {
            self.coefficient = 0.0;
            self.intercept = y_bar;
            return Ok(());
        };

        let sxy: f64 = features
            .iter()
            .zip(targets)
            .map(|(&x, &y)| (x - x_bar) * (y - y_bar))
            .sum();

        self.coefficient = sxy / sxx;
        self.intercept = y_bar - self.coefficient * x_bar;
        Ok(())
    }

    fn coefficient(&self) -> f64 {
        self.coefficient
    }

    fn intercept(&self) -> f64 {
        self.intercept
    }
}

/// OLS through the normal equations `(XᵀX) β = Xᵀy`, solved by Cholesky.
///
/// The feature column is centred before building `X = [x - x̄, 1]`, which
/// keeps `XᵀX` well conditioned for levels far from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NalgebraOls {
    coefficient: f64,
    intercept: f64,
}

impl LinearRegression for NalgebraOls {
    fn fit(&mut self, features: &[f64], targets: &[f64]) -> SdeResult<()> {
        check_inputs(features, targets)?;
        let x_bar = mean(features);

        if feature_spread(features, x_bar).is_none() {
            self.coefficient = 0.0;
            self.intercept = mean(targets);
            return Ok(());
        }

        let n = features.len();
        let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { features[i] - x_bar } else { 1.0 });
        let target = DVector::from_column_slice(targets);

        let xtx = design.transpose() * &design;
        let xty = design.transpose() * &target;

        let cholesky = xtx.cholesky().ok_or_else(|| SdeError::NumericOverflow {
            method: "OLS normal equations".to_string(),
            reason: "XᵀX is not positive definite".to_string(),
        })?;
        let solution = cholesky.solve(&xty);

        self.coefficient = solution[0];
        self.intercept = solution[1] - solution[0] * x_bar;
        Ok(())
    }

    fn coefficient(&self) -> f64 {
        self.coefficient
    }

    fn intercept(&self) -> f64 {
        self.intercept
    }
}
