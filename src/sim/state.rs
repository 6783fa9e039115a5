//! Session state and core simulation types
//!
//! One [`GameState`] owns the ball, bucket and lawn for the whole session
//! and recreates their internal state every throw.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bucket::Bucket;
use super::input::Press;
use super::lawn::Lawn;
use super::rng::{Variate, seeded};
use super::timer::{TimerPurpose, Timers};
use crate::LogicalSize;
use crate::config::GameConfig;
use crate::consts::MAX_PENDING_EVENTS;

/// Phase of the throw lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrowPhase {
    /// Waiting for a tap on the lawn
    Ready,
    /// Lawn is active, waiting for a flick
    Armed,
    /// Ball in flight
    Launched,
    /// Ball settled and scored, waiting to advance
    Resolving,
    /// Transient: the next throw is being set up
    NextThrow,
    /// Final score shown, waiting to restart
    EndGame,
}

/// How a throw ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrowOutcome {
    /// The bucket toppled during the throw
    Overturned,
    /// Landed in the bucket without touching the lawn first
    Direct,
    /// Bounced off the lawn, then landed in the bucket
    TrickShot,
    /// Touched the bucket first but finished outside
    BouncedOut,
    Missed,
}

impl ThrowOutcome {
    pub fn points(&self) -> u32 {
        match self {
            ThrowOutcome::TrickShot => 2,
            ThrowOutcome::Direct => 1,
            _ => 0,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ThrowOutcome::Overturned => "Bucket overturned!",
            ThrowOutcome::Direct => "In the bucket! +1",
            ThrowOutcome::TrickShot => "TRICK SHOT! +2",
            ThrowOutcome::BouncedOut => "Bounced out!",
            ThrowOutcome::Missed => "Missed!",
        }
    }
}

/// Notifications for the host (toasts, haptics, persistence)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged {
        from: ThrowPhase,
        to: ThrowPhase,
    },
    /// Show a transient message
    Message { text: String, duration_ms: u32 },
    /// Short vibration on arming
    Haptic { duration_ms: u32 },
    ThrowResolved {
        throw_number: u32,
        outcome: ThrowOutcome,
        score: u32,
        /// Resolved by the timeout rather than by settling
        forced: bool,
    },
    GameOver { score: u32 },
    /// A press on the lawn collapsed the help banner
    BannerMinimized,
    /// The help banner was closed; `permanent` should be persisted
    BannerDismissed { permanent: bool },
}

/// Complete session state
///
/// Generic over the random source so tests can replay fixed samples.
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    pub(crate) config: GameConfig,
    pub(crate) rng: R,
    /// Current logical bounds
    pub size: LogicalSize,
    pub ball: Ball,
    pub bucket: Bucket,
    pub lawn: Lawn,
    /// Wind for the current throw (m/s, positive blows right)
    pub wind: f32,
    pub score: u32,
    /// 1-based index of the current throw
    pub throw_number: u32,
    pub phase: ThrowPhase,
    /// Session clock
    pub clock_ms: f64,
    /// Unsimulated frame time carried to the next frame
    pub accumulator: f32,
    /// How long the ball has been below the settle speed
    pub settle_ms: f64,
    /// How long the current throw has been in flight
    pub flight_ms: f64,
    pub press: Option<Press>,
    /// False briefly after the help banner is dismissed
    pub can_arm: bool,
    pub banner_visible: bool,
    /// Whether the help banner comes back at the start of each throw
    pub show_banner: bool,
    pub last_outcome: Option<ThrowOutcome>,
    pub(crate) timers: Timers,
    /// Outgoing events; the host drains them once per frame
    pub(crate) events: Vec<GameEvent>,
}

impl GameState<Pcg32> {
    /// Create a session with a seeded PCG source
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, seeded(seed))
    }
}

impl<R: Variate> GameState<R> {
    /// Create a session drawing randomness from `rng`
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let size = LogicalSize::new(config.logical_width, config.logical_height);
        let ball = Ball::new(&config, size);
        let bucket = Bucket::new(&config, size, &mut rng);
        let lawn = Lawn::new(&config, size);

        let mut state = Self {
            config,
            rng,
            size,
            ball,
            bucket,
            lawn,
            wind: 0.0,
            score: 0,
            throw_number: 1,
            phase: ThrowPhase::Ready,
            clock_ms: 0.0,
            accumulator: 0.0,
            settle_ms: 0.0,
            flight_ms: 0.0,
            press: None,
            can_arm: true,
            banner_visible: false,
            show_banner: false,
            last_outcome: None,
            timers: Timers::new(),
            events: Vec::new(),
        };
        state.reset_game();
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Score, throw counter and a fresh throw
    pub fn reset_game(&mut self) {
        self.score = 0;
        self.throw_number = 1;
        self.last_outcome = None;
        self.timers.clear();
        log::info!("New game ({} throws)", self.config.throw_count);
        self.reset_throw();
    }

    /// Re-place bucket, re-center ball, draw new wind; back to READY
    pub fn reset_throw(&mut self) {
        let size = self.size;
        self.ball.reset(&self.config, size);
        self.bucket.reset(&self.config, size, &mut self.rng);
        self.wind = self.rng.uniform(self.config.wind_range);
        self.lawn.reset(&mut self.rng);

        self.settle_ms = 0.0;
        self.flight_ms = 0.0;
        self.press = None;
        self.can_arm = true;
        self.banner_visible = self.show_banner;
        self.timers.cancel(TimerPurpose::AutoDisarm);
        self.timers.cancel(TimerPurpose::ReenableArming);
        self.set_phase(ThrowPhase::Ready);

        log::info!(
            "Throw {}/{}. Wind: {:.2} m/s",
            self.throw_number,
            self.config.throw_count,
            self.wind
        );
    }

    /// Apply new logical bounds from the viewport layer
    pub fn resize(&mut self, size: LogicalSize) {
        if size == self.size {
            return;
        }
        log::debug!(
            "Logical bounds {}x{} -> {}x{}",
            self.size.width,
            self.size.height,
            size.width,
            size.height
        );
        self.size = size;
        self.lawn.resize(&self.config, size);
        // A ball waiting on the baseline follows it; one in flight keeps going
        if matches!(self.phase, ThrowPhase::Ready | ThrowPhase::Armed) {
            self.ball.reset(&self.config, size);
        }
    }

    /// Take all events emitted since the last call
    ///
    /// Call once per frame. At most [`MAX_PENDING_EVENTS`] are held; past
    /// that the oldest are dropped.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let dropped = self.events.remove(0);
            log::warn!("Event queue full, dropping {:?}", dropped);
        }
        self.events.push(event);
    }

    pub(crate) fn set_phase(&mut self, to: ThrowPhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::debug!("Phase {:?} -> {:?}", from, to);
        self.phase = to;
        self.emit(GameEvent::PhaseChanged { from, to });
    }

    pub(crate) fn show_message(&mut self, text: impl Into<String>, duration_ms: u32) {
        self.emit(GameEvent::Message {
            text: text.into(),
            duration_ms,
        });
    }
}
