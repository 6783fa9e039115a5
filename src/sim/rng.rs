//! Bounded uniform draws for wind, restitution and placement jitter
//!
//! The simulation only ever needs a unit sample, so the source is a tiny
//! trait. Every `rand` generator implements it; tests plug in fixed
//! sequences to reproduce exact trajectories.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Range;

/// A source of uniform samples
pub trait Variate {
    /// Uniform sample in [0, 1)
    fn unit(&mut self) -> f32;

    /// Uniform sample in `[range.min, range.max)`
    fn uniform(&mut self, range: Range) -> f32 {
        range.lerp(self.unit())
    }

    /// Uniform sample in `[-half, half)`
    fn symmetric(&mut self, half: f32) -> f32 {
        (self.unit() - 0.5) * 2.0 * half
    }
}

impl<R: RngCore> Variate for R {
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Default simulation RNG seeded from a run seed
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of unit samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedVariates {
    values: Vec<f32>,
    cursor: usize,
}

impl FixedVariates {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "FixedVariates needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Always returns the same sample
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl Variate for FixedVariates {
    fn unit(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
