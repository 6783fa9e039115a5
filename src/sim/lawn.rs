//! The lawn: a horizontal band along the bottom of the play field
//!
//! Its top edge is the collision plane for the ball. With a non-zero
//! roughness the plane gets a small per-x height offset, fixed for the
//! whole throw and re-rolled on reset.

use serde::{Deserialize, Serialize};

use super::rng::Variate;
use crate::LogicalSize;
use crate::config::GameConfig;

/// Spatial frequencies of the two noise octaves (radians per unit)
const NOISE_FREQS: [f32; 2] = [0.021, 0.057];
/// Relative weight of each octave
const NOISE_WEIGHTS: [f32; 2] = [0.65, 0.35];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lawn {
    /// Height of the band
    pub height: f32,
    /// Top edge of the band
    pub y: f32,
    /// Peak surface offset (0 = flat)
    pub roughness: f32,
    phases: [f32; 2],
}

impl Lawn {
    pub fn new(config: &GameConfig, size: LogicalSize) -> Self {
        let mut lawn = Self {
            height: 0.0,
            y: 0.0,
            roughness: config.lawn_roughness,
            phases: [0.0; 2],
        };
        lawn.resize(config, size);
        lawn
    }

    /// Re-derive the band from new logical bounds
    pub fn resize(&mut self, config: &GameConfig, size: LogicalSize) {
        self.height = size.height * config.lawn_height_fraction;
        self.y = size.height - self.height;
    }

    /// Re-roll the surface noise for a new throw
    pub fn reset(&mut self, rng: &mut impl Variate) {
        if self.roughness > 0.0 {
            for phase in &mut self.phases {
                *phase = rng.unit() * std::f32::consts::TAU;
            }
        }
    }

    /// Collision plane height at `x`
    pub fn surface_y(&self, x: f32) -> f32 {
        if self.roughness <= 0.0 {
            return self.y;
        }
        let noise: f32 = NOISE_FREQS
            .iter()
            .zip(NOISE_WEIGHTS)
            .zip(self.phases)
            .map(|((freq, weight), phase)| (x * freq + phase).sin() * weight)
            .sum();
        self.y + noise * self.roughness
    }

    /// Whether a logical point lies on the lawn band
    #[inline]
    pub fn contains_y(&self, y: f32) -> bool {
        y > self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::seeded;

    #[test]
    fn test_band_occupies_bottom_quarter() {
        let config = GameConfig::default();
        let lawn = Lawn::new(&config, LogicalSize::new(1080.0, 1920.0));
        assert_eq!(lawn.height, 480.0);
        assert_eq!(lawn.y, 1440.0);
        assert_eq!(lawn.surface_y(123.0), 1440.0);
    }

    #[test]
    fn test_resize_rederives_band() {
        let config = GameConfig::default();
        let mut lawn = Lawn::new(&config, LogicalSize::new(1080.0, 1920.0));
        lawn.resize(&config, LogicalSize::new(1080.0, 2400.0));
        assert_eq!(lawn.height, 600.0);
        assert_eq!(lawn.y, 1800.0);
    }

    #[test]
    fn test_rough_surface_is_deterministic_per_throw() {
        let config = GameConfig {
            lawn_roughness: 6.0,
            ..Default::default()
        };
        let mut lawn = Lawn::new(&config, LogicalSize::new(1080.0, 1920.0));
        let mut rng = seeded(3);
        lawn.reset(&mut rng);

        let first: Vec<f32> = (0..20).map(|i| lawn.surface_y(i as f32 * 50.0)).collect();
        let again: Vec<f32> = (0..20).map(|i| lawn.surface_y(i as f32 * 50.0)).collect();
        assert_eq!(first, again);
        for y in &first {
            assert!((y - lawn.y).abs() <= 6.0 + 1e-3);
        }

        lawn.reset(&mut rng);
        let rerolled: Vec<f32> = (0..20).map(|i| lawn.surface_y(i as f32 * 50.0)).collect();
        assert_ne!(first, rerolled);
    }
}
