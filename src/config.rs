//! Game tuning configuration
//!
//! One immutable [`GameConfig`] is built at startup (defaults, optionally
//! overridden by a JSON file) and then only borrowed by the simulation.
//! Missing keys fall back to the defaults, so a file can override just the
//! values being tuned.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read
    Io(std::io::Error),
    /// The config file is not valid JSON for this schema
    Parse(serde_json::Error),
    /// A value is outside its legal range
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config value `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// How a drag maps to a throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThrowStyle {
    /// Flick upward; the ball follows the flick
    #[default]
    Flick,
    /// Pull back downward; the ball flies opposite to the pull
    Slingshot,
}

/// An inclusive `[min, max]` range sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Map a unit sample in [0, 1) onto the range
    #[inline]
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + t * (self.max - self.min)
    }
}

/// Runtime-tunable physics, input and layout configuration
///
/// Lengths are logical units, velocities logical units per second and
/// durations milliseconds unless the field name says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Session ===
    pub logical_width: f32,
    pub logical_height: f32,
    pub throw_count: u32,

    // === Physics ===
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Wind sampled once per throw (m/s)
    pub wind_range: Range,
    /// Converts wind m/s into horizontal acceleration (units/s²)
    pub wind_factor: f32,
    /// Restitution drawn per collision
    pub ball_restitution: Range,
    /// Extra vertical damping for lawn bounces
    pub lawn_restitution: f32,
    /// Horizontal damping on a lawn bounce
    pub lawn_friction: f32,
    /// Horizontal damping on a side-wall bounce
    pub wall_damping: f32,
    /// Vertical and horizontal damping on a bucket floor hit
    pub bucket_floor_damping: f32,
    /// Horizontal damping on a rim hit
    pub rim_damping: f32,
    /// Degrees/s of tilt velocity per unit of horizontal ball speed on a rim hit
    pub rim_tilt_factor: f32,
    /// Per-tick multiplier applied to bucket tilt velocity
    pub bucket_tilt_damping: f32,
    /// Tilt (degrees) past which the bucket topples
    pub bucket_topple_angle: f32,

    // === Entities ===
    pub ball_radius: f32,
    /// Baseline height as a fraction of logical height
    pub ball_baseline_fraction: f32,
    /// Shrink the ball with height to fake perspective
    pub depth_scaling: bool,
    /// Smallest fraction of the base radius when depth scaling
    pub ball_min_scale: f32,
    pub bucket_width: f32,
    pub bucket_height: f32,
    /// Rim opening as a fraction of bucket width
    pub rim_width_fraction: f32,
    /// Bucket bottom as a fraction of logical height
    pub bucket_y_range: Range,
    /// Horizontal jitter as a fraction of logical width (±)
    pub bucket_x_jitter: f32,
    /// Lawn band as a fraction of logical height
    pub lawn_height_fraction: f32,
    /// Peak surface noise of the lawn (0 = flat)
    pub lawn_roughness: f32,

    // === Input ===
    /// Max travel for a press to count as a tap
    pub tap_threshold: f32,
    pub swipe_threshold: f32,
    pub arming_hold_ms: f64,
    pub auto_disarm_ms: f64,
    pub dismiss_to_throw_ms: f64,
    pub throw_style: ThrowStyle,
    /// Drag vector to launch velocity
    pub launch_multiplier: f32,
    pub haptic_ms: u32,

    // === Settling and scoring ===
    pub settle_velocity: f32,
    pub settle_ms: f64,
    /// Force-resolve a throw that is still moving after this long
    pub throw_timeout_ms: f64,
    /// How far above the bucket floor a resting ball still counts as in
    pub inside_floor_tolerance: f32,
    pub resolve_delay_ms: f64,
    pub restart_delay_ms: f64,
    pub message_ms: u32,
    pub final_message_ms: u32,

    // === Presentation ===
    /// Tilt (degrees) before the tilted sprite is used
    pub tilt_sprite_threshold: f32,
    /// Allowed logical height / width ratios for the viewport
    pub aspect_range: Range,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            logical_width: 1080.0,
            logical_height: 1920.0,
            throw_count: 5,

            gravity: 2000.0,
            wind_range: Range::new(-2.0, 2.0),
            wind_factor: 40.0,
            ball_restitution: Range::new(0.55, 0.65),
            lawn_restitution: 0.35,
            lawn_friction: 0.9,
            wall_damping: 0.8,
            bucket_floor_damping: 0.8,
            rim_damping: 0.9,
            rim_tilt_factor: 0.05,
            bucket_tilt_damping: 0.95,
            bucket_topple_angle: 18.0,

            ball_radius: 15.0,
            ball_baseline_fraction: 0.875,
            depth_scaling: false,
            ball_min_scale: 0.6,
            bucket_width: 170.0,
            bucket_height: 160.0,
            rim_width_fraction: 0.9,
            bucket_y_range: Range::new(0.1, 0.2),
            bucket_x_jitter: 0.1,
            lawn_height_fraction: 0.25,
            lawn_roughness: 0.0,

            tap_threshold: 20.0,
            swipe_threshold: 60.0,
            arming_hold_ms: 100.0,
            auto_disarm_ms: 4000.0,
            dismiss_to_throw_ms: 150.0,
            throw_style: ThrowStyle::Flick,
            launch_multiplier: 4.5,
            haptic_ms: 50,

            settle_velocity: 10.0,
            settle_ms: 400.0,
            throw_timeout_ms: 12_000.0,
            inside_floor_tolerance: 20.0,
            resolve_delay_ms: 1500.0,
            restart_delay_ms: 5000.0,
            message_ms: 3000,
            final_message_ms: 5000,

            tilt_sprite_threshold: 1.0,
            aspect_range: Range::new(1.3, 2.4),
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded game config from {}", path.display());
        Ok(config)
    }

    /// Parse a config from JSON text and validate it
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Highest possible score for one game (every throw a trick shot)
    pub fn max_score(&self) -> u32 {
        self.throw_count * 2
    }

    /// Check that every value is inside its legal range
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        let positive = [
            ("logical_width", self.logical_width),
            ("logical_height", self.logical_height),
            ("ball_radius", self.ball_radius),
            ("bucket_width", self.bucket_width),
            ("bucket_height", self.bucket_height),
            ("swipe_threshold", self.swipe_threshold),
            ("settle_velocity", self.settle_velocity),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }

        if self.throw_count == 0 {
            return Err(invalid("throw_count", "must be at least 1"));
        }

        let ranges = [
            ("wind_range", self.wind_range),
            ("ball_restitution", self.ball_restitution),
            ("bucket_y_range", self.bucket_y_range),
            ("aspect_range", self.aspect_range),
        ];
        for (field, range) in ranges {
            if !(range.min.is_finite() && range.max.is_finite()) || range.min > range.max {
                return Err(invalid(
                    field,
                    format!("min {} must not exceed max {}", range.min, range.max),
                ));
            }
        }

        let dampings = [
            ("bucket_tilt_damping", self.bucket_tilt_damping),
            ("lawn_restitution", self.lawn_restitution),
            ("lawn_friction", self.lawn_friction),
            ("wall_damping", self.wall_damping),
            ("bucket_floor_damping", self.bucket_floor_damping),
            ("rim_damping", self.rim_damping),
        ];
        for (field, value) in dampings {
            if !(value > 0.0 && value < 1.0) {
                return Err(invalid(field, format!("must be in (0, 1), got {value}")));
            }
        }

        let fractions = [
            ("ball_baseline_fraction", self.ball_baseline_fraction),
            ("ball_min_scale", self.ball_min_scale),
            ("rim_width_fraction", self.rim_width_fraction),
            ("lawn_height_fraction", self.lawn_height_fraction),
        ];
        for (field, value) in fractions {
            if !(value > 0.0 && value <= 1.0) {
                return Err(invalid(field, format!("must be in (0, 1], got {value}")));
            }
        }

        if !(0.0..0.5).contains(&self.bucket_x_jitter) {
            return Err(invalid("bucket_x_jitter", "must be in [0, 0.5)"));
        }
        if self.bucket_y_range.min < 0.0 || self.bucket_y_range.max > 1.0 {
            return Err(invalid("bucket_y_range", "must lie within [0, 1]"));
        }
        if self.bucket_topple_angle <= 0.0 {
            return Err(invalid("bucket_topple_angle", "must be positive"));
        }
        if self.lawn_roughness < 0.0 {
            return Err(invalid("lawn_roughness", "must not be negative"));
        }
        if self.throw_timeout_ms <= self.settle_ms {
            return Err(invalid("throw_timeout_ms", "must be longer than settle_ms"));
        }

        Ok(())
    }
}
