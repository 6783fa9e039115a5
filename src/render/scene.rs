//! Scene drawing
//!
//! Reads a [`GameState`] and issues draw calls; never mutates it.

use glam::Vec2;

use super::colors;
use super::sprite::BucketSprite;
use super::{AssetProvider, Surface, TextAlign};
use crate::sim::{Ball, Bucket, GameState, Lawn, ThrowPhase, Variate};

const HUD_FONT: f32 = 48.0;
const HUD_Y: f32 = 80.0;
const HUD_MARGIN: f32 = 40.0;
const ARMED_FONT: f32 = 60.0;
/// Samples across the width when drawing an uneven lawn
const LAWN_SAMPLES: usize = 64;

/// Draw one frame
pub fn draw_scene<S, A, R>(surface: &mut S, assets: &A, state: &GameState<R>, dpr: f32)
where
    S: Surface,
    A: AssetProvider<Image = S::Image>,
    R: Variate,
{
    let size = Vec2::new(state.size.width, state.size.height);
    surface.fill_rect(Vec2::ZERO, size, colors::BACKGROUND);

    let armed = state.phase == ThrowPhase::Armed;
    draw_lawn(surface, &state.lawn, size.x, armed);
    draw_bucket(surface, assets, &state.bucket, dpr, state.config().tilt_sprite_threshold);

    // The ball is hidden while the result is shown
    if state.phase != ThrowPhase::Resolving {
        draw_ball(surface, &state.ball);
    }

    draw_hud(surface, state);
    draw_baseline(surface, state.lawn.y, size.x, armed, state.clock_ms);

    if armed {
        let y = size.y - state.lawn.height / 2.0 + 20.0;
        surface.fill_text(
            "ARMED – Flick to throw",
            Vec2::new(size.x / 2.0, y),
            ARMED_FONT,
            TextAlign::Center,
            colors::WHITE,
        );
        if let Some(press) = state.press {
            surface.line(press.start, press.current, 10.0, colors::AIM_LINE);
        }
    }
}

fn draw_lawn<S: Surface>(surface: &mut S, lawn: &Lawn, width: f32, armed: bool) {
    let bottom = lawn.y + lawn.height;
    if lawn.roughness > 0.0 {
        let mut points: Vec<Vec2> = (0..=LAWN_SAMPLES)
            .map(|i| {
                let x = width * i as f32 / LAWN_SAMPLES as f32;
                Vec2::new(x, lawn.surface_y(x))
            })
            .collect();
        points.push(Vec2::new(width, bottom));
        points.push(Vec2::new(0.0, bottom));
        surface.fill_polygon(&points, colors::GRASS_BASE);
    } else {
        let min = Vec2::new(0.0, lawn.y);
        surface.fill_rect(min, Vec2::new(width, lawn.height), colors::GRASS_BASE);
    }

    if armed {
        surface.fill_rect(
            Vec2::new(0.0, lawn.y),
            Vec2::new(width, lawn.height),
            colors::ARMED_LAWN_OVERLAY,
        );
    }
}

fn draw_bucket<S, A>(surface: &mut S, assets: &A, bucket: &Bucket, dpr: f32, threshold: f32)
where
    S: Surface,
    A: AssetProvider<Image = S::Image>,
{
    let sprite = BucketSprite::select(bucket.tilt, bucket.toppled, dpr, threshold);
    if let Some(image) = assets.get(sprite.asset_key()) {
        let min = Vec2::new(bucket.x - bucket.width / 2.0, bucket.y - bucket.height);
        surface.draw_image(image, min, Vec2::new(bucket.width, bucket.height));
        return;
    }
    surface.fill_polygon(&fallback_outline(bucket), colors::BUCKET_MATTE_BLACK);
}

/// Trapezoid outline rotated by the tilt about the bottom-center anchor
pub fn fallback_outline(bucket: &Bucket) -> [Vec2; 4] {
    let b = bucket.bounds();
    let anchor = Vec2::new(bucket.x, bucket.y);
    let rotation = Vec2::from_angle(bucket.tilt.to_radians());
    [
        Vec2::new(b.left, b.bottom),
        Vec2::new(b.right, b.bottom),
        Vec2::new(b.rim_right_x, b.top),
        Vec2::new(b.rim_left_x, b.top),
    ]
    .map(|p| anchor + rotation.rotate(p - anchor))
}

fn draw_ball<S: Surface>(surface: &mut S, ball: &Ball) {
    surface.fill_circle(ball.pos, ball.radius, colors::BALL_GOLD);
    surface.stroke_circle(ball.pos, ball.radius, 2.0, colors::BALL_OUTLINE);
}

fn draw_hud<S: Surface, R: Variate>(surface: &mut S, state: &GameState<R>) {
    let width = state.size.width;
    let config = state.config();

    surface.fill_text(
        &format!("Score: {} / {}", state.score, config.max_score()),
        Vec2::new(HUD_MARGIN, HUD_Y),
        HUD_FONT,
        TextAlign::Left,
        colors::HUD_TEXT,
    );
    surface.fill_text(
        &format!("Throw {} of {}", state.throw_number, config.throw_count),
        Vec2::new(width / 2.0, HUD_Y),
        HUD_FONT,
        TextAlign::Center,
        colors::HUD_TEXT,
    );
    surface.fill_text(
        &wind_label(state.wind),
        Vec2::new(width - HUD_MARGIN, HUD_Y),
        HUD_FONT,
        TextAlign::Right,
        colors::HUD_TEXT,
    );
}

/// Arrow and magnitude, e.g. "→ 1.3m/s"
pub fn wind_label(wind: f32) -> String {
    let arrow = if wind > 0.0 {
        '→'
    } else if wind < 0.0 {
        '←'
    } else {
        '·'
    };
    format!("{} {:.1}m/s", arrow, wind.abs())
}

/// Line along the top of the lawn; pulses while armed
fn draw_baseline<S: Surface>(surface: &mut S, y: f32, width: f32, armed: bool, clock_ms: f64) {
    let (color, line_width) = if armed {
        let pulse = (((clock_ms / 200.0).sin() + 1.0) / 2.0) as f32;
        let mut color = colors::WHITE;
        color[3] = 0.7 + pulse * 0.3;
        (color, 5.0 + pulse * 5.0)
    } else {
        (colors::BASELINE_IDLE, 5.0)
    };
    surface.line(Vec2::new(0.0, y), Vec2::new(width, y), line_width, color);
}
