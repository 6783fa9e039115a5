//! The thrown ball

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::LogicalSize;
use crate::config::GameConfig;

/// What the ball touched first during the current throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FirstCollision {
    #[default]
    None,
    Lawn,
    Bucket,
}

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Current collision/render radius
    pub radius: f32,
    /// Radius at the baseline, before any depth scaling
    pub base_radius: f32,
    /// Frozen once the throw has settled
    pub landed: bool,
    first_collision: FirstCollision,
}

impl Ball {
    pub fn new(config: &GameConfig, size: LogicalSize) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: config.ball_radius,
            base_radius: config.ball_radius,
            landed: false,
            first_collision: FirstCollision::None,
        };
        ball.reset(config, size);
        ball
    }

    /// Re-center at the baseline, at rest, with no recorded collision
    pub fn reset(&mut self, config: &GameConfig, size: LogicalSize) {
        self.base_radius = config.ball_radius * size.width / config.logical_width;
        self.pos = baseline(config, size);
        self.vel = Vec2::ZERO;
        self.landed = false;
        self.first_collision = FirstCollision::None;
        self.radius = radius_at(self.pos.y, self.base_radius, config, size);
    }

    /// Semi-implicit Euler step under gravity and wind
    pub fn update(&mut self, dt: f32, wind: f32, config: &GameConfig, size: LogicalSize) {
        if self.landed {
            return;
        }

        self.vel.y += config.gravity * dt;
        self.vel.x += wind * config.wind_factor * dt;
        self.pos += self.vel * dt;
        self.radius = radius_at(self.pos.y, self.base_radius, config, size);

        debug_assert!(
            self.pos.is_finite() && self.vel.is_finite(),
            "ball state became non-finite: pos={:?} vel={:?}",
            self.pos,
            self.vel
        );
    }

    pub fn first_collision(&self) -> FirstCollision {
        self.first_collision
    }

    /// Record the first surface hit this throw. Later calls are ignored.
    ///
    /// Returns true if this call set the value.
    pub fn record_first_collision(&mut self, kind: FirstCollision) -> bool {
        if self.first_collision == FirstCollision::None && kind != FirstCollision::None {
            log::debug!("First collision: {:?}", kind);
            self.first_collision = kind;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Lowest point of the ball (y grows downward)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Resting position at the start of a throw
pub fn baseline(config: &GameConfig, size: LogicalSize) -> Vec2 {
    Vec2::new(size.width / 2.0, size.height * config.ball_baseline_fraction)
}

/// Radius for a ball at height `y`
///
/// With depth scaling the ball shrinks linearly from the baseline up to the
/// far edge of the bucket row, never below `ball_min_scale` of its base size.
pub fn radius_at(y: f32, base_radius: f32, config: &GameConfig, size: LogicalSize) -> f32 {
    if !config.depth_scaling {
        return base_radius;
    }

    let near = size.height * config.ball_baseline_fraction;
    let far = size.height * config.bucket_y_range.max;
    let span = (near - far).max(f32::EPSILON);
    let t = ((near - y) / span).clamp(0.0, 1.0);
    base_radius * (1.0 - t * (1.0 - config.ball_min_scale))
}
