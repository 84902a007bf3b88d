//! TUI application state and event handling.
//!
//! This module implements the interactive study screen. It manages:
//!
//! - **Timer control**: One toggle key walks the idle/running/paused cycle
//! - **Session recording**: An ended session is appended to the stored history
//! - **Event loop**: Polls keyboard input with a timeout that doubles as the clock tick
//! - **Status messages**: Transient feedback after a session is recorded
//! - **Dirty state tracking**: Redraws only when visible state changes
//!
//! Quitting with a session underway records it first; leaving the screen is
//! never a way to lose timed study.

use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{DateTime, Utc};
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::models::StudySession;
use crate::planner::Planner;
use crate::store::RecordStore;
use crate::timer::{StudyTimer, TimerState};
use crate::utils::format_duration_human;

/// Duration for status messages (milliseconds)
const STATUS_DURATION_MS: u64 = 3000;

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

pub struct StudyApp<'a, S: RecordStore> {
    planner: &'a Planner<S>,
    timer: StudyTimer,
    // Recorded sessions, newest first
    recent: Vec<StudySession>,
    status_message: Option<StatusMessage>,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_drawn_secs: u64,
    last_draw_time: Instant,
}

impl<'a, S: RecordStore> StudyApp<'a, S> {
    pub fn new(planner: &'a Planner<S>) -> Self {
        let mut recent = planner.sessions();
        recent.reverse();

        Self {
            planner,
            timer: StudyTimer::new(),
            recent,
            status_message: None,
            should_quit: false,
            needs_redraw: true, // Initial draw needed
            last_drawn_secs: 0,
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            expires_at: Instant::now() + Duration::from_millis(STATUS_DURATION_MS),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
        }
    }

    /// Mark dirty when the on-screen clock rolled over to a new second
    /// (extracted for testing)
    fn refresh_clock(&mut self, now: DateTime<Utc>) -> u64 {
        let elapsed = self.timer.elapsed_seconds(now);
        if elapsed != self.last_drawn_secs {
            self.needs_redraw = true;
        }
        elapsed
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            // Clear expired status messages (marks dirty if cleared)
            let had_status = self.status_message.is_some();
            self.check_and_clear_expired_status();
            if had_status && self.status_message.is_none() {
                self.needs_redraw = true;
            }

            // Elapsed time is recomputed from the start instant every pass,
            // so late ticks never make the clock drift.
            let elapsed = self.refresh_clock(Utc::now());

            // Draw if dirty or if it's been >250ms (for terminal resize handling)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(250)
            {
                terminal.draw(|f| {
                    let state = RenderState {
                        timer_state: self.timer.state(),
                        elapsed_secs: elapsed,
                        recent_sessions: &self.recent,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_drawn_secs = elapsed;
                self.last_draw_time = now;
            }

            // Handle events
            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action, Utc::now())?;
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action, now: DateTime<Utc>) -> Result<()> {
        match action {
            Action::Quit => {
                // A session underway is recorded, not discarded.
                self.save_session(now)?;
                self.should_quit = true;
            }
            Action::ToggleTimer => {
                match self.timer.state() {
                    TimerState::Idle => {
                        self.timer.start(now);
                    }
                    TimerState::Running => {
                        self.timer.pause(now);
                    }
                    TimerState::Paused => {
                        self.timer.resume(now);
                    }
                }
                self.needs_redraw = true;
            }
            Action::EndSession => {
                if self.save_session(now)? {
                    self.needs_redraw = true;
                }
            }
            Action::None => {}
        }
        Ok(())
    }

    /// End the current session, if any, and record it.
    ///
    /// Returns `true` when a session was recorded.
    fn save_session(&mut self, now: DateTime<Utc>) -> Result<bool> {
        let Some(session) = self.timer.end(now) else {
            return Ok(false);
        };

        self.planner.record_session(&session)?;
        self.set_status(format!(
            "Recorded {} of study",
            format_duration_human(session.duration_secs)
        ));
        self.recent.insert(0, session);
        Ok(true)
    }
}
