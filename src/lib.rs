//! Bucketball - throw a ball into a bucket under gravity and wind
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, throw lifecycle)
//! - `render`: Backend-agnostic scene drawing
//! - `viewport`: Device to logical coordinate mapping
//! - `config`: Data-driven game tuning
//! - `preferences`: Small persisted player flags

pub mod config;
pub mod preferences;
pub mod render;
pub mod sim;
pub mod viewport;

pub use config::{ConfigError, GameConfig, ThrowStyle};
pub use preferences::Preferences;

use serde::{Deserialize, Serialize};

/// Simulation loop constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame gap fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Undrained events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 256;
}

/// Size of the logical play field
///
/// The width is fixed by the config; the height may stretch with the
/// display aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogicalSize {
    pub width: f32,
    pub height: f32,
}

impl LogicalSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
