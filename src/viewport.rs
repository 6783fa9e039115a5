//! Device to logical coordinate mapping
//!
//! The logical width is fixed; the logical height follows the display's
//! aspect ratio within the configured range. The logical field is then
//! scaled uniformly to fit the display and centered.

use glam::Vec2;

use crate::LogicalSize;
use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Display size in CSS/client pixels
    pub display: Vec2,
    /// Device pixel ratio
    pub dpr: f32,
    /// Client pixels per logical unit
    pub scale: f32,
    /// Top-left of the logical field in client pixels
    pub offset: Vec2,
    pub logical: LogicalSize,
}

impl Viewport {
    /// Fit the logical field into a `width` x `height` display
    pub fn fit(width: f32, height: f32, dpr: f32, config: &GameConfig) -> Self {
        let display = Vec2::new(width, height).max(Vec2::ONE);
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };

        let aspect = (display.y / display.x)
            .clamp(config.aspect_range.min, config.aspect_range.max);
        let logical = LogicalSize::new(config.logical_width, config.logical_width * aspect);

        let scale = (display.x / logical.width).min(display.y / logical.height);
        let rendered = Vec2::new(logical.width, logical.height) * scale;
        let offset = (display - rendered) / 2.0;

        log::debug!(
            "Viewport {}x{} @{}x: logical {}x{}, scale {:.3}",
            width,
            height,
            dpr,
            logical.width,
            logical.height,
            scale
        );

        Self {
            display,
            dpr,
            scale,
            offset,
            logical,
        }
    }

    /// Convert a client-space point to logical coordinates
    #[inline]
    pub fn to_logical(&self, client: Vec2) -> Vec2 {
        (client - self.offset) / self.scale
    }

    /// Convert a logical point to client space
    #[inline]
    pub fn to_client(&self, logical: Vec2) -> Vec2 {
        logical * self.scale + self.offset
    }

    /// Backing store size in device pixels
    pub fn backing_size(&self) -> (u32, u32) {
        let px = (self.display * self.dpr).round();
        (px.x as u32, px.y as u32)
    }

    /// Device pixels per logical unit
    #[inline]
    pub fn surface_scale(&self) -> f32 {
        self.dpr * self.scale
    }
}
