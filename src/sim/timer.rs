//! Deferred, single-shot session events
//!
//! At most one event per purpose is pending: scheduling a purpose replaces
//! any stale event for it, so a transition can never fire twice.

use serde::{Deserialize, Serialize};

/// Why an event was scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerPurpose {
    /// ARMED reverts to READY if nothing is thrown
    AutoDisarm,
    /// Arming is blocked briefly after the help banner is dismissed
    ReenableArming,
    /// Move on from RESOLVING to the next throw or END_GAME
    AdvanceThrow,
    /// Start a fresh game after END_GAME
    RestartGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Scheduled {
    purpose: TimerPurpose,
    due_ms: f64,
    seq: u64,
}

/// Pending events on the session clock
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timers {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `purpose` at `due_ms`, cancelling any pending one first
    pub fn schedule(&mut self, purpose: TimerPurpose, due_ms: f64) {
        self.cancel(purpose);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled {
            purpose,
            due_ms,
            seq,
        });
    }

    /// Cancel a pending event. Returns true if one was pending.
    pub fn cancel(&mut self, purpose: TimerPurpose) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.purpose != purpose);
        self.pending.len() != before
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, purpose: TimerPurpose) -> bool {
        self.pending.iter().any(|s| s.purpose == purpose)
    }

    /// When `purpose` is due, if pending
    pub fn due_at(&self, purpose: TimerPurpose) -> Option<f64> {
        self.pending
            .iter()
            .find(|s| s.purpose == purpose)
            .map(|s| s.due_ms)
    }

    /// Remove and return the earliest event due at or before `now_ms`
    ///
    /// Events are popped one at a time so a handler can reschedule or
    /// cancel others before the next one is considered.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<TimerPurpose> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_ms <= now_ms)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)))
            .map(|(i, _)| i)?;
        Some(self.pending.swap_remove(idx).purpose)
    }
}
