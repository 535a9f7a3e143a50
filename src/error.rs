// src/error.rs
use thiserror::Error;

/// Custom error types for the fast-ou library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SdeError {
    /// Invalid parameter values (non-positive spot, strike, expiry, volatility...)
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// OLS slope of the increments on the level is zero (or not finite), so the
    /// long-run mean `gamma = b / alpha` is undefined.
    #[error("Degenerate mean reversion: fitted slope {slope} leaves the long-run mean undefined")]
    DegenerateMeanReversion { slope: f64 },

    /// Exponential terms left the representable range of f64
    #[error("Numeric overflow in {method}: {reason}")]
    NumericOverflow { method: String, reason: String },

    /// Observed path too short for estimation
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },
}

/// Result type alias for fast-ou operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a parameter is positive (NaN is rejected too)
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        if value > 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive and finite (> 0)".to_string(),
            })
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(paths: usize) -> SdeResult<()> {
        if paths == 0 {
            Err(SdeError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if paths > 1_000_000_000 {
            Err(SdeError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
