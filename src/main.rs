//! Bucketball headless runner
//!
//! Plays scripted games against the simulation: a bot arms each throw,
//! flicks toward the bucket through the same pointer path a player uses,
//! and the runner forwards game events to the log.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use bucketball::config::{GameConfig, ThrowStyle};
use bucketball::preferences::Preferences;
use bucketball::sim::{
    GameEvent, GameState, PointerEvent, ThrowPhase, advance, dismiss_banner, handle_pointer,
};
use bucketball::viewport::Viewport;

/// Host frame rate the runner simulates
const FRAME_DT: f32 = 1.0 / 60.0;
/// Planned flight time for the bot's aim
const AIM_FLIGHT_S: f32 = 1.4;
/// Give up if a game takes longer than this many frames
const MAX_FRAMES_PER_GAME: u32 = 60 * 60 * 5;

#[derive(Parser)]
#[command(name = "bucketball")]
#[command(about = "Play scripted Bucketball games headlessly")]
struct Args {
    /// Seed for the game's random source
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,

    /// JSON file overriding the default tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Preferences file
    #[arg(long, default_value = Preferences::FILE_NAME)]
    prefs: PathBuf,

    /// Simulated display width in client pixels
    #[arg(long, default_value_t = 390.0)]
    width: f32,

    /// Simulated display height in client pixels
    #[arg(long, default_value_t = 844.0)]
    height: f32,

    /// Simulated device pixel ratio
    #[arg(long, default_value_t = 3.0)]
    dpr: f32,

    /// Bot aim error (logical units, ±)
    #[arg(long, default_value_t = 40.0)]
    aim_error: f32,
}

/// Scripted player driving pointer events through the viewport
struct Bot {
    rng: Pcg32,
    aim_error: f32,
}

impl Bot {
    /// Tap to arm, then hold and flick toward the bucket
    fn throw(&mut self, state: &mut GameState, viewport: &Viewport) {
        let press = Vec2::new(state.ball.pos.x, state.lawn.y + state.lawn.height * 0.6);
        let client = viewport.to_client(press);

        handle_pointer(state, PointerEvent::Down(viewport.to_logical(client)));
        handle_pointer(state, PointerEvent::Up(viewport.to_logical(client)));
        if state.phase != ThrowPhase::Armed {
            return;
        }

        let drag = self.aim(state);
        handle_pointer(state, PointerEvent::Down(viewport.to_logical(client)));
        let hold_ms = state.config().arming_hold_ms + 50.0;
        run_frames(state, (hold_ms / 1000.0 / f64::from(FRAME_DT)).ceil() as u32);
        let release = viewport.to_client(press + drag);
        handle_pointer(state, PointerEvent::Move(viewport.to_logical(release)));
        handle_pointer(state, PointerEvent::Up(viewport.to_logical(release)));
    }

    /// Drag that launches a ballistic arc ending on the bucket floor
    fn aim(&mut self, state: &GameState) -> Vec2 {
        let config = state.config();
        let t = AIM_FLIGHT_S;
        let start = state.ball.pos;
        let error = self.rng.random_range(-self.aim_error..=self.aim_error);
        let target = Vec2::new(state.bucket.x + error, state.bucket.y - state.ball.radius);
        let accel = Vec2::new(state.wind * config.wind_factor, config.gravity);

        let velocity = (target - start - 0.5 * accel * t * t) / t;
        log::debug!("Bot aims at ({:.0}, {:.0}) with {:?}", target.x, target.y, velocity);

        let drag = velocity / config.launch_multiplier;
        match config.throw_style {
            ThrowStyle::Flick => drag,
            ThrowStyle::Slingshot => -drag,
        }
    }
}

fn run_frames(state: &mut GameState, frames: u32) {
    for _ in 0..frames {
        advance(state, FRAME_DT);
    }
}

/// Message sink: forwards events to the log and persists banner choices
fn forward_events(
    state: &mut GameState,
    prefs: &mut Preferences,
    prefs_path: &Path,
) -> Option<u32> {
    let mut final_score = None;
    for event in state.drain_events() {
        match event {
            GameEvent::Message { text, duration_ms } => {
                log::info!("[toast {} ms] {}", duration_ms, text)
            }
            GameEvent::Haptic { duration_ms } => log::debug!("[haptic {} ms]", duration_ms),
            GameEvent::BannerDismissed { permanent: true } => {
                prefs.banner_dismissed = true;
                if let Err(e) = prefs.save(prefs_path) {
                    log::warn!("Could not save preferences: {}", e);
                }
            }
            GameEvent::GameOver { score } => final_score = Some(score),
            other => log::trace!("{:?}", other),
        }
    }
    final_score
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let mut prefs = Preferences::load(&args.prefs);

    let viewport = Viewport::fit(args.width, args.height, args.dpr, &config);
    let max_score = config.max_score();
    let mut state = GameState::new(config, args.seed);
    state.show_banner = prefs.show_banner();
    state.resize(viewport.logical);
    state.reset_throw();

    let mut bot = Bot {
        rng: Pcg32::seed_from_u64(args.seed.wrapping_add(1)),
        aim_error: args.aim_error.abs(),
    };

    log::info!(
        "Bucketball (headless) seed {:#x}, {} game(s), logical {}x{} at {:.3} px/unit",
        args.seed,
        args.games,
        viewport.logical.width,
        viewport.logical.height,
        viewport.surface_scale()
    );

    let mut scores = Vec::with_capacity(args.games as usize);
    let mut frames = 0;
    while scores.len() < args.games as usize {
        if state.banner_visible {
            // "Got it" on the help banner
            dismiss_banner(&mut state, true);
        } else if state.phase == ThrowPhase::Ready && state.can_arm {
            bot.throw(&mut state, &viewport);
        }

        run_frames(&mut state, 1);
        frames += 1;

        if let Some(score) = forward_events(&mut state, &mut prefs, &args.prefs) {
            println!("Game {}: {} / {}", scores.len() + 1, score, max_score);
            scores.push(score);
            frames = 0;
        }
        if frames > MAX_FRAMES_PER_GAME {
            bail!("game {} did not finish after {} frames", scores.len() + 1, frames);
        }
    }

    let total: u32 = scores.iter().sum();
    println!(
        "Played {} game(s), average {:.1} / {}",
        scores.len(),
        f64::from(total) / scores.len().max(1) as f64,
        max_score
    );
    Ok(())
}
