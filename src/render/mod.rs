//! Backend-agnostic rendering
//!
//! The scene is drawn onto an abstract [`Surface`] in logical units with y
//! growing downward. Images come from an [`AssetProvider`]; anything
//! missing falls back to procedural shapes, so art never affects the
//! simulation.

pub mod scene;
pub mod sprite;

pub use scene::draw_scene;
pub use sprite::{BucketSprite, ResolutionTier, missing_sprites};

use std::collections::HashMap;

use glam::Vec2;

/// Linear RGBA
pub type Color = [f32; 4];

pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BUCKET_MATTE_BLACK: Color = [0.067, 0.067, 0.067, 1.0];
    pub const BALL_GOLD: Color = [1.0, 0.843, 0.0, 1.0];
    pub const BALL_OUTLINE: Color = [0.549, 0.435, 0.0, 1.0];
    pub const GRASS_BASE: Color = [0.18, 0.8, 0.443, 1.0];
    pub const ARMED_LAWN_OVERLAY: Color = [0.18, 0.435, 0.639, 0.6];
    pub const HUD_TEXT: Color = [0.067, 0.067, 0.067, 1.0];
    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const AIM_LINE: Color = [1.0, 1.0, 1.0, 0.7];
    pub const BASELINE_IDLE: Color = [0.784, 0.784, 0.784, 0.5];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A 2D drawing target in logical coordinates
pub trait Surface {
    type Image;

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    /// Blit `image` stretched to the rectangle at `min`
    fn draw_image(&mut self, image: &Self::Image, min: Vec2, size: Vec2);
    /// `pos` is the baseline anchor; `size` the font size
    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign, color: Color);
}

/// Keyed image lookup that tolerates missing or unloaded images
pub trait AssetProvider {
    type Image;

    fn get(&self, key: &str) -> Option<&Self::Image>;
}

impl<I> AssetProvider for HashMap<String, I> {
    type Image = I;

    fn get(&self, key: &str) -> Option<&I> {
        HashMap::get(self, key)
    }
}
