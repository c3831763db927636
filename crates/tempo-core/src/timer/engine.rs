//! Focus timer implementation.
//!
//! The timer is a wall-clock-based state machine. It does not use internal
//! threads or read the clock itself - the caller passes `now` into every
//! transition and is responsible for calling `tick()` periodically.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> ... -> Idle (on completion)
//! ```
//!
//! Remaining time re-derives from wall-clock elapsed time between
//! observations, so a host that suspends ticking (laptop sleep, background
//! tab) still counts down correctly. Invalid transitions are no-ops that
//! return `None`, never errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::model::NewSession;

/// Default focus duration: 25 minutes.
pub const DEFAULT_FOCUS_SECS: u32 = 1500;
/// Lower bound for a custom duration, in minutes.
pub const MIN_MINUTES: u32 = 1;
/// Upper bound for a custom duration, in minutes.
pub const MAX_MINUTES: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// Events produced by timer transitions.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimerEvent {
    Started {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    Paused {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero; carries the session to record.
    Completed { session: NewSession },
}

/// Point-in-time view of the timer, for display.
#[derive(Debug, Clone, Serialize)]
pub struct TimerSnapshot {
    pub state: TimerState,
    pub task: String,
    pub remaining_secs: u32,
    pub total_secs: u32,
    pub started_at: Option<DateTime<Utc>>,
}

/// Countdown state machine for a single focus run.
///
/// An explicit value owned by the caller; the CLI persists one serialized
/// instance between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTimer {
    task: String,
    total_secs: u32,
    remaining_ms: u64,
    state: TimerState,
    /// When the run last started or resumed.
    #[serde(default)]
    started_at: Option<DateTime<Utc>>,
    /// Last wall-clock observation while running; elapsed time between
    /// observations is subtracted from the remainder.
    #[serde(default)]
    last_observed: Option<DateTime<Utc>>,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTimer {
    /// Create an idle timer with the default 25-minute duration.
    pub fn new() -> Self {
        Self {
            task: "Focus".to_string(),
            total_secs: DEFAULT_FOCUS_SECS,
            remaining_ms: u64::from(DEFAULT_FOCUS_SECS) * 1000,
            state: TimerState::Idle,
            started_at: None,
            last_observed: None,
        }
    }

    /// Create an idle timer with a custom duration.
    ///
    /// # Errors
    /// Returns a validation error if `minutes` is outside 1..=120.
    pub fn with_minutes(minutes: u32) -> Result<Self> {
        let mut timer = Self::new();
        timer.set_duration(minutes)?;
        Ok(timer)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// Remaining whole seconds, rounded up.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_ms.div_ceil(1000) as u32
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            state: self.state,
            task: self.task.clone(),
            remaining_secs: self.remaining_secs(),
            total_secs: self.total_secs,
            started_at: self.started_at,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Set the label attached to sessions this timer emits.
    pub fn set_task(&mut self, label: impl Into<String>) {
        self.task = label.into();
    }

    /// Change the configured duration. Discards any run in progress.
    ///
    /// # Errors
    /// Returns a validation error if `minutes` is outside 1..=120.
    pub fn set_duration(&mut self, minutes: u32) -> Result<()> {
        if !(MIN_MINUTES..=MAX_MINUTES).contains(&minutes) {
            return Err(CoreError::Validation(format!(
                "Custom timer minutes must be between {MIN_MINUTES} and {MAX_MINUTES}"
            )));
        }
        self.total_secs = minutes * 60;
        self.reset();
        Ok(())
    }

    /// `Idle | Paused -> Running`, recording `started_at = now`. A resume
    /// records a fresh start time, so the emitted session's `start_time`
    /// is always the last (re)start. No-op while already running.
    pub fn start(&mut self, now: DateTime<Utc>) -> Option<TimerEvent> {
        if self.state == TimerState::Running {
            return None;
        }
        self.started_at = Some(now);
        self.state = TimerState::Running;
        self.last_observed = Some(now);
        Some(TimerEvent::Started {
            remaining_ms: self.remaining_ms,
            at: now,
        })
    }

    /// `Running -> Paused`, freezing the remainder. No-op otherwise.
    pub fn pause(&mut self, now: DateTime<Utc>) -> Option<TimerEvent> {
        if self.state != TimerState::Running {
            return None;
        }
        self.flush_elapsed(now);
        self.state = TimerState::Paused;
        self.last_observed = None;
        Some(TimerEvent::Paused {
            remaining_ms: self.remaining_ms,
            at: now,
        })
    }

    /// Any state -> `Idle`, remainder restored to the configured total.
    /// Never emits a session.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.remaining_ms = u64::from(self.total_secs) * 1000;
        self.started_at = None;
        self.last_observed = None;
    }

    /// Call periodically while running. Subtracts the wall-clock time
    /// elapsed since the last observation; when the remainder hits zero,
    /// returns `Completed` carrying the session to record and resets to
    /// `Idle`. Returns `None` in other states.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<TimerEvent> {
        if self.state != TimerState::Running {
            return None;
        }
        self.flush_elapsed(now);
        if self.remaining_ms > 0 {
            return None;
        }
        let session = NewSession {
            task: self.task.clone(),
            duration: self.total_secs / 60,
            start_time: self.started_at.unwrap_or(now),
            end_time: now,
        };
        self.reset();
        Some(TimerEvent::Completed { session })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn flush_elapsed(&mut self, now: DateTime<Utc>) {
        if let Some(last) = self.last_observed {
            // A backwards clock step contributes nothing.
            let elapsed_ms = (now - last).num_milliseconds().max(0) as u64;
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
            self.last_observed = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t0() -> DateTime<Utc> {
        "2026-03-01T09:00:00Z".parse().unwrap()
    }

    #[test]
    fn start_pause_resume() {
        let mut timer = FocusTimer::new();
        assert_eq!(timer.state(), TimerState::Idle);

        assert!(timer.start(t0()).is_some());
        assert_eq!(timer.state(), TimerState::Running);

        assert!(timer.pause(t0() + Duration::seconds(5)).is_some());
        assert_eq!(timer.state(), TimerState::Paused);

        assert!(timer.start(t0() + Duration::seconds(9)).is_some());
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn default_run_completes_after_1500_ticks() {
        let mut timer = FocusTimer::new();
        timer.set_task("Deep work");
        timer.start(t0());

        let mut sessions = Vec::new();
        for i in 1..=1500 {
            let now = t0() + Duration::seconds(i);
            if let Some(TimerEvent::Completed { session }) = timer.tick(now) {
                sessions.push(session);
            }
        }

        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].duration, 25);
        assert_eq!(sessions[0].task, "Deep work");
        assert_eq!(sessions[0].start_time, t0());
        assert_eq!(sessions[0].end_time, t0() + Duration::seconds(1500));
    }

    #[test]
    fn pause_then_reset_restores_remainder_without_session() {
        let mut timer = FocusTimer::new();
        timer.start(t0());
        for i in 1..=10 {
            assert!(timer.tick(t0() + Duration::seconds(i)).is_none());
        }
        timer.pause(t0() + Duration::seconds(10));
        assert_eq!(timer.remaining_secs(), 1490);

        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 1500);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut timer = FocusTimer::new();
        timer.start(t0());
        assert!(timer.pause(t0() + Duration::seconds(3)).is_some());
        let remaining = timer.remaining_ms();

        assert!(timer.pause(t0() + Duration::seconds(8)).is_none());
        assert_eq!(timer.state(), TimerState::Paused);
        assert_eq!(timer.remaining_ms(), remaining);
    }

    #[test]
    fn start_while_running_is_a_no_op() {
        let mut timer = FocusTimer::new();
        assert!(timer.start(t0()).is_some());
        assert!(timer.start(t0() + Duration::seconds(1)).is_none());
    }

    #[test]
    fn suspended_host_still_counts_wall_clock_time() {
        let mut timer = FocusTimer::with_minutes(5).unwrap();
        timer.start(t0());
        // No ticks for 10 minutes, then one observation.
        let event = timer.tick(t0() + Duration::minutes(10));
        match event {
            Some(TimerEvent::Completed { session }) => {
                assert_eq!(session.duration, 5);
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn pause_excludes_paused_span_from_countdown() {
        let mut timer = FocusTimer::new();
        timer.start(t0());
        timer.tick(t0() + Duration::seconds(60));
        timer.pause(t0() + Duration::seconds(60));

        // An hour passes while paused.
        timer.start(t0() + Duration::seconds(3660));
        timer.tick(t0() + Duration::seconds(3720));
        assert_eq!(timer.remaining_secs(), 1500 - 120);
    }

    #[test]
    fn resume_records_a_fresh_start_time() {
        let mut timer = FocusTimer::new();
        timer.start(t0());
        timer.pause(t0() + Duration::seconds(60));

        let resumed_at = t0() + Duration::seconds(600);
        timer.start(resumed_at);
        assert_eq!(timer.snapshot().started_at, Some(resumed_at));

        // The completed session carries the last resume, not the first start.
        let event = timer.tick(resumed_at + Duration::seconds(1440));
        match event {
            Some(TimerEvent::Completed { session }) => {
                assert_eq!(session.start_time, resumed_at);
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn duration_bounds_are_enforced() {
        assert!(FocusTimer::with_minutes(0).is_err());
        assert!(FocusTimer::with_minutes(121).is_err());
        assert!(FocusTimer::with_minutes(1).is_ok());
        assert!(FocusTimer::with_minutes(120).is_ok());
    }

    #[test]
    fn set_duration_discards_run_in_progress() {
        let mut timer = FocusTimer::new();
        timer.start(t0());
        timer.tick(t0() + Duration::seconds(30));
        timer.set_duration(50).unwrap();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 3000);
    }

    #[test]
    fn backwards_clock_step_does_not_extend_countdown() {
        let mut timer = FocusTimer::new();
        timer.start(t0());
        timer.tick(t0() + Duration::seconds(10));
        timer.tick(t0() - Duration::seconds(60));
        assert_eq!(timer.remaining_secs(), 1490);
    }

    #[test]
    fn serialized_state_roundtrips() {
        let mut timer = FocusTimer::with_minutes(30).unwrap();
        timer.set_task("Review");
        timer.start(t0());
        timer.pause(t0() + Duration::seconds(90));

        let json = serde_json::to_string(&timer).unwrap();
        let restored: FocusTimer = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.state(), TimerState::Paused);
        assert_eq!(restored.remaining_secs(), 30 * 60 - 90);
        assert_eq!(restored.task(), "Review");
    }
}
