//! Study-session timer: a single-instance elapsed-time state machine.
//!
//! # States and transitions
//!
//! The timer rests in one of three states:
//!
//! - `Idle`: no session underway, elapsed reads 0
//! - `Running`: a session is underway since a captured start instant
//! - `Paused`: a session is underway but the clock is frozen
//!
//! `start` moves `Idle -> Running` and records the start instant. `pause`
//! freezes the current elapsed value. `resume` re-derives a synthetic start
//! instant (`now - frozen elapsed`) so the `now - start` computation picks
//! up exactly where it left off. `end` works from either active state,
//! emits one [`StudySession`] carrying the elapsed value, and returns the
//! timer to `Idle`; screen teardown calls the same `end` as the explicit
//! user action, so an in-progress session is never lost.
//!
//! Elapsed time is always **recomputed** from the start instant, truncated
//! to whole seconds, never incremented per tick. Displays driven by a
//! polling loop therefore stay monotonic and drift-free no matter how late
//! or how often the loop fires.
//!
//! Every transition takes `now` explicitly; callers pass `Utc::now()` and
//! tests pass fixed instants.

use chrono::{DateTime, Duration, Utc};

use crate::models::StudySession;

/// Discriminant-only view of the timer's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Running { started_at: DateTime<Utc> },
    Paused { started_at: DateTime<Utc>, frozen_secs: u64 },
}

/// Tracks one study session at a time.
#[derive(Debug, Clone)]
pub struct StudyTimer {
    phase: Phase,
}

impl StudyTimer {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn state(&self) -> TimerState {
        match self.phase {
            Phase::Idle => TimerState::Idle,
            Phase::Running { .. } => TimerState::Running,
            Phase::Paused { .. } => TimerState::Paused,
        }
    }

    /// True while a session is underway, running or paused.
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Begin a session. Refused (returns `false`) while one is active.
    pub fn start(&mut self, now: DateTime<Utc>) -> bool {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Running { started_at: now };
                true
            }
            _ => false,
        }
    }

    /// Freeze the clock. Only valid while running.
    pub fn pause(&mut self, now: DateTime<Utc>) -> bool {
        match self.phase {
            Phase::Running { started_at } => {
                self.phase =
                    Phase::Paused { started_at, frozen_secs: whole_seconds(started_at, now) };
                true
            }
            _ => false,
        }
    }

    /// Continue a paused session without losing the accumulated time.
    pub fn resume(&mut self, now: DateTime<Utc>) -> bool {
        match self.phase {
            Phase::Paused { frozen_secs, .. } => {
                // Synthetic start keeps `now - started_at` seamless.
                self.phase =
                    Phase::Running { started_at: now - Duration::seconds(frozen_secs as i64) };
                true
            }
            _ => false,
        }
    }

    /// End the session and emit its record, from running or paused.
    ///
    /// Returns `None` when no session is underway. Afterwards the timer is
    /// idle and elapsed reads 0.
    pub fn end(&mut self, now: DateTime<Utc>) -> Option<StudySession> {
        let session = match self.phase {
            Phase::Idle => return None,
            Phase::Running { started_at } => {
                StudySession::new(started_at, whole_seconds(started_at, now))
            }
            Phase::Paused { started_at, frozen_secs } => StudySession::new(started_at, frozen_secs),
        };
        self.phase = Phase::Idle;
        Some(session)
    }

    /// Seconds elapsed in the current session, 0 while idle.
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        match self.phase {
            Phase::Idle => 0,
            Phase::Running { started_at } => whole_seconds(started_at, now),
            Phase::Paused { frozen_secs, .. } => frozen_secs,
        }
    }
}

impl Default for StudyTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole seconds between two instants, clamped at zero for clock skew.
fn whole_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    (to - from).num_seconds().max(0) as u64
}
