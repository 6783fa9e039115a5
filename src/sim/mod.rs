//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected random source only
//! - Fixed collision order (lawn, walls, bucket)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bucket;
pub mod collision;
pub mod input;
pub mod lawn;
pub mod rng;
pub mod state;
pub mod tick;
pub mod timer;

pub use ball::{Ball, FirstCollision};
pub use bucket::{Bucket, BucketBounds, BucketContact, BucketHit};
pub use collision::{CollisionReport, resolve_collisions};
pub use input::{PointerEvent, Press};
pub use lawn::Lawn;
pub use rng::{FixedVariates, Variate, seeded};
pub use state::{GameEvent, GameState, ThrowOutcome, ThrowPhase};
pub use tick::{advance, dismiss_banner, handle_pointer, judge_throw, launch, show_banner, tick};
pub use timer::{TimerPurpose, Timers};
