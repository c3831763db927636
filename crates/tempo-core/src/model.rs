//! Domain entities and the typed request/patch shapes that mutate them.
//!
//! Wire and document field names are camelCase (the browser client is the
//! external consumer); Rust fields stay snake_case via serde renames.
//! Patch structs follow "absent means leave unchanged" semantics.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Task priority. Stored and serialized lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parse from a stored string. `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

/// Per-user preferences, stored as a JSON document column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: String,
    pub notifications: bool,
    pub focus_alerts: bool,
    pub weather_city: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            notifications: true,
            focus_alerts: true,
            weather_city: String::new(),
        }
    }
}

impl Settings {
    pub fn apply(&mut self, patch: &SettingsPatch) {
        if let Some(theme) = &patch.theme {
            self.theme = theme.clone();
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
        if let Some(focus_alerts) = patch.focus_alerts {
            self.focus_alerts = focus_alerts;
        }
        if let Some(weather_city) = &patch.weather_city {
            self.weather_city = weather_city.clone();
        }
    }
}

/// Partial settings update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub theme: Option<String>,
    pub notifications: Option<bool>,
    pub focus_alerts: Option<bool>,
    pub weather_city: Option<String>,
}

/// A registered user. The credential hash is never serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub settings: Settings,
    pub streak: u32,
    /// Absent until the first qualifying activity (login or session).
    /// Malformed stored values also read back as absent.
    pub last_active_date: Option<DateTime<Utc>>,
}

/// The projection of a user returned to its own client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub settings: Settings,
    pub streak: u32,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            settings: user.settings.clone(),
            streak: user.streak,
        }
    }
}

/// Input for user creation. The caller hashes the password.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(CoreError::Validation("All fields are required".into()));
        }
        Ok(())
    }
}

/// A to-do item owned by exactly one user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Non-null iff `completed` is true; maintained on every toggle.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Input for task creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl NewTask {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("Title is required".into()));
        }
        Ok(())
    }
}

/// Partial task update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

/// A free-form note owned by exactly one user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for note creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl NewNote {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("Title is required".into()));
        }
        Ok(())
    }
}

/// Partial note update. Any update bumps `updated_at`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A logged focus interval. Immutable once created.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSession {
    pub id: String,
    pub user_id: String,
    pub task: String,
    /// Focused minutes. Reported by the timer, not derived from the
    /// start/end span: a paused run has a wall span longer than its
    /// focused time.
    pub duration: u32,
    /// Stamped from the server clock at creation.
    pub date: DateTime<Utc>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Input for session creation, also emitted by the focus timer on
/// completion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub task: String,
    pub duration: u32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl NewSession {
    pub fn validate(&self) -> Result<()> {
        if self.task.trim().is_empty() {
            return Err(CoreError::Validation("Task label is required".into()));
        }
        if self.duration == 0 {
            return Err(CoreError::Validation(
                "Duration must be at least 1 minute".into(),
            ));
        }
        Ok(())
    }
}
