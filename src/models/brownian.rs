// src/models/brownian.rs
//! Discretely sampled standard Brownian motion at unit time steps.
//!
//! ```text
//! dW_i ~ N(0, 1)  i.i.d.
//! W_i  = dW_0 + ... + dW_{i-1},   W_0 = 0
//! ```
//!
//! `W_i` excludes increment `i`: the path is the running sum shifted right
//! by one, so a horizon of `T` gives `T` values and the last increment is
//! never used.

use crate::math_utils::prefix_sum_shifted;
use crate::rng::NormalGenerator;

/// Draw `t` Brownian increments; reseeds `rng` first when `seed` is given.
pub fn sample_increments(rng: &mut NormalGenerator, t: usize, seed: Option<u64>) -> Vec<f64> {
    rng.sample_increments(t, seed)
}

/// Brownian path of length `t` built from freshly drawn increments.
pub fn build_path(rng: &mut NormalGenerator, t: usize, seed: Option<u64>) -> Vec<f64> {
    let dw = sample_increments(rng, t, seed);
    path_from_increments(&dw)
}

/// Brownian path for a given increment sequence (`path[0] == 0`).
pub fn path_from_increments(dw: &[f64]) -> Vec<f64> {
    prefix_sum_shifted(dw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single_step() {
        let mut rng = NormalGenerator::seeded(11);
        assert!(build_path(&mut rng, 0, None).is_empty());
        assert_eq!(build_path(&mut rng, 1, None), vec![0.0]);
    }

    #[test]
    fn test_path_starts_at_zero() {
        let mut rng = NormalGenerator::default();
        for t in [1usize, 2, 10, 500] {
            let path = build_path(&mut rng, t, None);
            assert_eq!(path.len(), t);
            assert_eq!(path[0], 0.0);
        }
    }

    #[test]
    fn test_path_excludes_current_increment() {
        let mut rng = NormalGenerator::default();
        let dw = sample_increments(&mut rng, 50, Some(99));
        let path = build_path(&mut rng, 50, Some(99));

        for i in 1..path.len() {
            let expected: f64 = dw[..i].iter().sum();
            assert!((path[i] - expected).abs() < 1e-12);
            assert!((path[i] - path[i - 1] - dw[i - 1]).abs() < 1e-12);
        }
    }
}
