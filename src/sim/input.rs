//! Pointer gesture interpretation
//!
//! Positions arrive already in logical coordinates. Short presses arm the
//! throw; a long enough, held drag while armed launches it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, ThrowStyle};

/// A pointer/touch event in logical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
}

/// The press currently being tracked
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Press {
    pub start: Vec2,
    pub current: Vec2,
    /// Session clock at press time
    pub start_ms: f64,
}

impl Press {
    pub fn new(pos: Vec2, now_ms: f64) -> Self {
        Self {
            start: pos,
            current: pos,
            start_ms: now_ms,
        }
    }

    /// Drag vector from press to `end`
    #[inline]
    pub fn drag(&self, end: Vec2) -> Vec2 {
        end - self.start
    }
}

/// A press that barely moved
pub fn is_tap(drag: Vec2, config: &GameConfig) -> bool {
    drag.length() < config.tap_threshold
}

/// Launch velocity for a release, or `None` if the drag is too short, too
/// quick, or points the wrong way for the configured [`ThrowStyle`]
pub fn launch_velocity(drag: Vec2, hold_ms: f64, config: &GameConfig) -> Option<Vec2> {
    let long_enough = drag.length() >= config.swipe_threshold;
    let held = hold_ms >= config.arming_hold_ms;
    let (aimed, direction) = match config.throw_style {
        ThrowStyle::Flick => (drag.y < 0.0, drag),
        ThrowStyle::Slingshot => (drag.y > 0.0, -drag),
    };
    (long_enough && held && aimed).then(|| direction * config.launch_multiplier)
}
