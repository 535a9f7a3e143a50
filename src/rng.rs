// src/rng.rs
//! Random Number Generation for Path Simulation
//!
//! # Design
//!
//! There is no process-wide generator. Every sampling operation takes an
//! explicit generator handle, so two callers seeding "their" generator can
//! never disturb each other:
//! 1. **Reproducibility**: same seed → bit-identical draws
//! 2. **Isolation**: state lives in the handle, not in a global
//! 3. **Parallel safety**: `RngFactory` hands each path its own stream
//!
//! Standard-normal draws come from `rand_distr::StandardNormal` (ziggurat).

use rand::rngs::StdRng;
use rand::{Error, Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Explicit, reseedable source of i.i.d. standard-normal draws.
///
/// Implements [`RngCore`], so a `&mut NormalGenerator` can be handed to any
/// function generic over `R: Rng + ?Sized`.
#[derive(Debug, Clone)]
pub struct NormalGenerator {
    rng: StdRng,
}

impl NormalGenerator {
    /// Seeded generator when `seed` is given, entropy-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Reset the internal state to the deterministic state for `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn next_normal(&mut self) -> f64 {
        get_normal_draw(&mut self.rng)
    }

    /// Draw `t` i.i.d. N(0,1) values (Brownian increments at unit steps).
    ///
    /// With `Some(seed)` the generator is reseeded immediately before
    /// sampling, so the call is reproducible.
    pub fn sample_increments(&mut self, t: usize, seed: Option<u64>) -> Vec<f64> {
        if let Some(s) = seed {
            self.reseed(s);
        }
        (0..t).map(|_| self.next_normal()).collect()
    }
}

impl Default for NormalGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RngCore for NormalGenerator {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// RNG factory for reproducible parallel simulations
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Create an independent generator for a specific path/thread
    pub fn create_std_rng(&self, path_id: u64) -> StdRng {
        StdRng::seed_from_u64(self.base_seed.wrapping_add(path_id))
    }
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_increments_length() {
        let mut source = NormalGenerator::seeded(1);
        for t in [0usize, 1, 2, 17, 1000] {
            assert_eq!(source.sample_increments(t, None).len(), t);
        }
    }

    #[test]
    fn test_seeded_sampling_reproducible() {
        let mut source = NormalGenerator::default();
        let a = source.sample_increments(256, Some(7));
        let b = source.sample_increments(256, Some(7));
        assert_eq!(a, b);

        // A separate handle with the same seed sees the same stream.
        let mut other = NormalGenerator::seeded(7);
        assert_eq!(a, other.sample_increments(256, None));
    }

    #[test]
    fn test_unseeded_call_continues_stream() {
        let mut source = NormalGenerator::seeded(3);
        let first = source.sample_increments(10, None);
        let second = source.sample_increments(10, None);
        assert_ne!(first, second);
    }

    #[test]
    fn test_factory_streams_differ() {
        let factory = RngFactory::new(42);

        let mut rng1 = factory.create_std_rng(0);
        let mut rng2 = factory.create_std_rng(1);

        let vals1: Vec<f64> = (0..10).map(|_| get_normal_draw(&mut rng1)).collect();
        let vals2: Vec<f64> = (0..10).map(|_| get_normal_draw(&mut rng2)).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_normal_distribution() {
        let mut source = NormalGenerator::seeded(42);

        let samples = source.sample_increments(10_000, None);

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;

        assert!(mean.abs() < 0.05, "Mean should be close to 0, got {}", mean);
        assert!(
            (variance - 1.0).abs() < 0.05,
            "Variance should be close to 1, got {}",
            variance
        );
    }
}
