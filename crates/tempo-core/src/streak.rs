//! Consecutive-day activity streaks.
//!
//! A streak counts calendar days (UTC) with at least one qualifying
//! activity - a login or a recorded focus session. The calculator is a pure
//! function; callers are expected to pass the server clock, never a
//! client-supplied timestamp.

use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;

/// Result of advancing a streak.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StreakUpdate {
    pub streak: u32,
    pub last_active: DateTime<Utc>,
    /// False when the activity fell on the same calendar day as the last
    /// one, in which case nothing needs to be persisted.
    pub changed: bool,
}

/// UTC midnight of the given instant's calendar day.
pub fn midnight(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Advance a streak for an activity happening at `now`.
///
/// - same calendar day: unchanged (repeat calls are no-ops by construction)
/// - next calendar day: streak + 1
/// - a gap of two or more days, or a backwards clock step: reset to 1
/// - no prior activity (including a malformed stored date): start at 1
pub fn advance(streak: u32, last_active: Option<DateTime<Utc>>, now: DateTime<Utc>) -> StreakUpdate {
    let Some(last) = last_active else {
        return StreakUpdate {
            streak: 1,
            last_active: now,
            changed: true,
        };
    };

    let days_diff = (now.date_naive() - last.date_naive()).num_days();
    match days_diff {
        0 => StreakUpdate {
            streak,
            last_active: last,
            changed: false,
        },
        1 => StreakUpdate {
            streak: streak + 1,
            last_active: now,
            changed: true,
        },
        _ => StreakUpdate {
            streak: 1,
            last_active: now,
            changed: true,
        },
    }
}
