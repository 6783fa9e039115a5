//! Per-tick collision resolution
//!
//! Order is fixed: lawn plane, then side walls, then the bucket. The bucket
//! sees the ball's post-lawn/post-wall position, and a lawn bounce claims
//! the first-collision slot before the bucket can.

use super::ball::{Ball, FirstCollision};
use super::bucket::{Bucket, BucketContact};
use super::lawn::Lawn;
use super::rng::Variate;
use crate::LogicalSize;
use crate::config::GameConfig;

/// What responded to the ball during one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionReport {
    /// Restitution drawn for a lawn bounce
    pub lawn: Option<f32>,
    pub wall: bool,
    pub bucket: Option<BucketContact>,
}

impl CollisionReport {
    pub fn any(&self) -> bool {
        self.lawn.is_some() || self.wall || self.bucket.is_some()
    }
}

/// Bounce the ball off the lawn if its bottom edge reached the surface
///
/// The ball is left resting exactly on the surface, never below it.
pub fn resolve_lawn(
    ball: &mut Ball,
    lawn: &Lawn,
    config: &GameConfig,
    rng: &mut impl Variate,
) -> Option<f32> {
    let surface = lawn.surface_y(ball.pos.x);
    if ball.bottom() < surface || ball.vel.y <= 0.0 {
        return None;
    }

    ball.record_first_collision(FirstCollision::Lawn);
    ball.pos.y = surface - ball.radius;
    let restitution = rng.uniform(config.ball_restitution);
    ball.vel.y *= -restitution * config.lawn_restitution;
    ball.vel.x *= config.lawn_friction;
    Some(restitution)
}

/// Reflect off the left/right edges of the play field
pub fn resolve_walls(ball: &mut Ball, size: LogicalSize, config: &GameConfig) -> bool {
    let r = ball.radius;
    let hit_left = ball.pos.x - r <= 0.0 && ball.vel.x < 0.0;
    let hit_right = ball.pos.x + r >= size.width && ball.vel.x > 0.0;
    if !(hit_left || hit_right) {
        return false;
    }

    ball.vel.x *= -config.wall_damping;
    ball.pos.x = ball.pos.x.clamp(r, (size.width - r).max(r));
    true
}

/// Run one full resolution pass in the fixed order
pub fn resolve_collisions(
    ball: &mut Ball,
    lawn: &Lawn,
    bucket: &mut Bucket,
    size: LogicalSize,
    config: &GameConfig,
    rng: &mut impl Variate,
) -> CollisionReport {
    let lawn_hit = resolve_lawn(ball, lawn, config, rng);
    let wall = resolve_walls(ball, size, config);
    let bucket_hit = bucket.check_collision(ball, config, rng);

    let report = CollisionReport {
        lawn: lawn_hit,
        wall,
        bucket: bucket_hit,
    };
    if report.any() {
        log::debug!("Collisions: {:?}", report);
    }
    report
}
