//! Summary statistics over a user's tasks and focus sessions.
//!
//! A pure O(n) aggregation, recomputed on every request - no caching or
//! incremental state. "Today" and "this week" are derived from the server
//! clock in UTC.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::model::{FocusSession, Task};
use crate::streak::midnight;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
    pub today_completed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusStats {
    pub total_minutes: u32,
    pub total_hours: u32,
    pub today_minutes: u32,
    pub week_minutes: u32,
    pub sessions_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub tasks: TaskStats,
    pub focus: FocusStats,
    pub streak: u32,
    /// Percentage of tasks completed, rounded to the nearest integer.
    /// Zero when the user has no tasks.
    pub productivity_score: u32,
}

/// Compute the full analytics report for one user.
pub fn compute(
    tasks: &[Task],
    sessions: &[FocusSession],
    streak: u32,
    now: DateTime<Utc>,
) -> Analytics {
    let day_start = midnight(now);
    let week_start = now - Duration::days(7);

    let total = tasks.len() as u32;
    let completed = tasks.iter().filter(|t| t.completed).count() as u32;
    let today_completed = tasks
        .iter()
        .filter(|t| {
            t.completed
                && t.completed_at
                    .is_some_and(|at| at >= day_start && at < now)
        })
        .count() as u32;

    let total_minutes: u32 = sessions.iter().map(|s| s.duration).sum();
    let today_minutes: u32 = sessions
        .iter()
        .filter(|s| s.date >= day_start)
        .map(|s| s.duration)
        .sum();
    let week_minutes: u32 = sessions
        .iter()
        .filter(|s| s.date >= week_start)
        .map(|s| s.duration)
        .sum();

    let productivity_score = if total > 0 {
        (f64::from(completed) * 100.0 / f64::from(total)).round() as u32
    } else {
        0
    };

    Analytics {
        tasks: TaskStats {
            total,
            completed,
            pending: total - completed,
            today_completed,
        },
        focus: FocusStats {
            total_minutes,
            total_hours: total_minutes / 60,
            today_minutes,
            week_minutes,
            sessions_count: sessions.len() as u32,
        },
        streak,
        productivity_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn task(completed: bool, completed_at: Option<DateTime<Utc>>) -> Task {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: "u1".into(),
            title: "t".into(),
            description: String::new(),
            date: None,
            time: None,
            priority: Priority::Medium,
            completed,
            created_at: at("2026-02-01T00:00:00Z"),
            completed_at,
        }
    }

    fn session(duration: u32, date: DateTime<Utc>) -> FocusSession {
        FocusSession {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: "u1".into(),
            task: "Focus".into(),
            duration,
            date,
            start_time: date,
            end_time: date,
        }
    }

    #[test]
    fn empty_collections_score_zero() {
        let report = compute(&[], &[], 0, at("2026-03-01T12:00:00Z"));
        assert_eq!(report.productivity_score, 0);
        assert_eq!(report.tasks.total, 0);
        assert_eq!(report.focus.total_minutes, 0);
        assert_eq!(report.focus.sessions_count, 0);
    }

    #[test]
    fn three_of_four_completed_scores_75() {
        let now = at("2026-03-01T12:00:00Z");
        let tasks = vec![
            task(true, Some(now - Duration::hours(1))),
            task(true, Some(now - Duration::days(2))),
            task(true, Some(now - Duration::hours(2))),
            task(false, None),
        ];
        let report = compute(&tasks, &[], 5, now);
        assert_eq!(report.productivity_score, 75);
        assert_eq!(report.tasks.completed, 3);
        assert_eq!(report.tasks.pending, 1);
        // Only the two completed today count.
        assert_eq!(report.tasks.today_completed, 2);
        assert_eq!(report.streak, 5);
    }

    #[test]
    fn score_rounds_to_nearest_integer() {
        let tasks = vec![task(true, None), task(false, None), task(false, None)];
        // 1/3 -> 33.33 -> 33
        assert_eq!(compute(&tasks, &[], 0, Utc::now()).productivity_score, 33);

        let tasks = vec![task(true, None), task(true, None), task(false, None)];
        // 2/3 -> 66.67 -> 67
        assert_eq!(compute(&tasks, &[], 0, Utc::now()).productivity_score, 67);
    }

    #[test]
    fn focus_windows_partition_by_day_and_week() {
        let now = at("2026-03-10T12:00:00Z");
        let sessions = vec![
            session(25, at("2026-03-10T08:00:00Z")), // today
            session(50, at("2026-03-07T10:00:00Z")), // this week
            session(90, at("2026-02-20T10:00:00Z")), // older
        ];
        let report = compute(&[], &sessions, 0, now);
        assert_eq!(report.focus.total_minutes, 165);
        assert_eq!(report.focus.total_hours, 2);
        assert_eq!(report.focus.today_minutes, 25);
        assert_eq!(report.focus.week_minutes, 75);
        assert_eq!(report.focus.sessions_count, 3);
    }

    #[test]
    fn session_at_exact_midnight_counts_as_today() {
        let now = at("2026-03-10T12:00:00Z");
        let sessions = vec![session(10, at("2026-03-10T00:00:00Z"))];
        assert_eq!(compute(&[], &sessions, 0, now).focus.today_minutes, 10);
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let json = serde_json::to_value(compute(&[], &[], 2, Utc::now())).unwrap();
        assert!(json.get("productivityScore").is_some());
        assert!(json["tasks"].get("todayCompleted").is_some());
        assert!(json["focus"].get("sessionsCount").is_some());
    }
}
