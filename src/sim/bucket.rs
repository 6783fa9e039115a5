//! The target bucket: placement, geometry, collision response and tilt
//!
//! The bucket is anchored at its bottom-center. Rim hits are the only
//! source of tilt; once the tilt passes the topple angle the bucket is
//! frozen for the rest of the throw.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, FirstCollision};
use super::rng::Variate;
use crate::LogicalSize;
use crate::config::GameConfig;

/// Axis-aligned geometry of the bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketBounds {
    pub left: f32,
    pub right: f32,
    /// Rim top edge
    pub top: f32,
    pub bottom: f32,
    pub rim_left_x: f32,
    pub rim_right_x: f32,
}

impl BucketBounds {
    /// Strictly between the rim walls
    #[inline]
    pub fn inside_rim_band(&self, x: f32) -> bool {
        x > self.rim_left_x && x < self.rim_right_x
    }

    pub fn rim_corners(&self) -> [Vec2; 2] {
        [
            Vec2::new(self.rim_left_x, self.top),
            Vec2::new(self.rim_right_x, self.top),
        ]
    }
}

/// Which collision region responded to the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketHit {
    Floor,
    InnerWall,
    Rim,
}

/// Details of a bucket collision, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketContact {
    pub region: BucketHit,
    /// Restitution drawn for this collision
    pub restitution: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bucket {
    /// Bottom-center x
    pub x: f32,
    /// Bottom y
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees, positive leans right
    pub tilt: f32,
    /// Degrees per second
    pub tilt_velocity: f32,
    pub toppled: bool,
    rim_fraction: f32,
}

impl Bucket {
    pub fn new(config: &GameConfig, size: LogicalSize, rng: &mut impl Variate) -> Self {
        let mut bucket = Self {
            x: size.width / 2.0,
            y: 0.0,
            width: config.bucket_width,
            height: config.bucket_height,
            tilt: 0.0,
            tilt_velocity: 0.0,
            toppled: false,
            rim_fraction: config.rim_width_fraction,
        };
        bucket.reset(config, size, rng);
        bucket
    }

    /// Re-randomize placement and stand the bucket upright
    pub fn reset(&mut self, config: &GameConfig, size: LogicalSize, rng: &mut impl Variate) {
        // Vertical draw first, then horizontal jitter
        self.y = size.height * rng.uniform(config.bucket_y_range);
        self.x = size.width / 2.0 + rng.symmetric(config.bucket_x_jitter * size.width);
        self.tilt = 0.0;
        self.tilt_velocity = 0.0;
        self.toppled = false;
    }

    pub fn bounds(&self) -> BucketBounds {
        let rim_width = self.width * self.rim_fraction;
        BucketBounds {
            left: self.x - self.width / 2.0,
            right: self.x + self.width / 2.0,
            top: self.y - self.height,
            bottom: self.y,
            rim_left_x: self.x - rim_width / 2.0,
            rim_right_x: self.x + rim_width / 2.0,
        }
    }

    /// Resolve a ball against the floor, inner walls or rim corners
    ///
    /// At most one region responds per call, checked in that order.
    pub fn check_collision(
        &mut self,
        ball: &mut Ball,
        config: &GameConfig,
        rng: &mut impl Variate,
    ) -> Option<BucketContact> {
        if self.toppled {
            return None;
        }

        let b = self.bounds();
        let r = ball.radius;
        if ball.pos.y + r < b.top
            || ball.pos.y - r > b.bottom
            || ball.pos.x + r < b.left
            || ball.pos.x - r > b.right
        {
            return None;
        }

        let restitution = rng.uniform(config.ball_restitution);
        let inside = b.inside_rim_band(ball.pos.x);

        let region = if inside && ball.pos.y + r >= b.bottom && ball.vel.y > 0.0 {
            ball.pos.y = b.bottom - r;
            ball.vel.y *= -restitution * config.bucket_floor_damping;
            ball.vel.x *= config.bucket_floor_damping;
            Some(BucketHit::Floor)
        } else if inside && ball.pos.y > b.top {
            let mut hit = None;
            if ball.pos.x - r <= b.rim_left_x && ball.vel.x < 0.0 {
                ball.vel.x *= -restitution;
                ball.pos.x = b.rim_left_x + r;
                hit = Some(BucketHit::InnerWall);
            }
            if ball.pos.x + r >= b.rim_right_x && ball.vel.x > 0.0 {
                ball.vel.x *= -restitution;
                ball.pos.x = b.rim_right_x - r;
                hit = Some(BucketHit::InnerWall);
            }
            hit
        } else if b
            .rim_corners()
            .iter()
            .any(|corner| ball.pos.distance(*corner) < r)
        {
            ball.vel.y *= -restitution;
            ball.vel.x *= config.rim_damping;
            self.tilt_velocity += ball.vel.x * config.rim_tilt_factor;
            Some(BucketHit::Rim)
        } else {
            None
        };

        region.map(|region| {
            ball.record_first_collision(FirstCollision::Bucket);
            log::debug!(
                "Bucket {:?} hit, restitution {:.3}, tilt velocity {:.2}",
                region,
                restitution,
                self.tilt_velocity
            );
            BucketContact {
                region,
                restitution,
            }
        })
    }

    /// Integrate and damp tilt; topple past the threshold
    pub fn update(&mut self, dt: f32, config: &GameConfig) {
        if self.toppled {
            return;
        }

        self.tilt += self.tilt_velocity * dt;
        self.tilt_velocity *= config.bucket_tilt_damping;

        let limit = config.bucket_topple_angle;
        if self.tilt.abs() > limit {
            self.toppled = true;
            self.tilt = limit.copysign(self.tilt);
            log::info!("Bucket toppled at {:.1}°", self.tilt);
        }
    }
}
