//! SQLite-based document store for users, tasks, notes, and sessions.
//!
//! Every operation on owned entities takes the owning `user_id`; an update
//! or delete against an id the caller does not own reports `NotFound`.
//! Timestamps are stored as RFC3339 TEXT, ids as uuid v4 TEXT, and the user
//! settings document as a JSON TEXT column. A small kv table holds
//! application state such as the CLI's persisted timer.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::model::{
    FocusSession, NewNote, NewSession, NewTask, NewUser, Note, NotePatch, Priority, Settings,
    SettingsPatch, Task, TaskPatch, User,
};

use super::data_dir;

const USER_COLS: &str =
    "id, name, email, password_hash, created_at, last_login, settings, streak, last_active_date";
const TASK_COLS: &str =
    "id, user_id, title, description, date, time, priority, completed, created_at, completed_at";
const NOTE_COLS: &str = "id, user_id, title, content, created_at, updated_at";
const SESSION_COLS: &str = "id, user_id, task, duration_min, date, start_time, end_time";

// === Helper Functions ===

/// Parse datetime from RFC3339 string with fallback to the current time.
fn parse_datetime_fallback(dt_str: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(dt_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Parse an optional datetime column; malformed values read back as absent.
fn parse_datetime_opt(dt_str: Option<&str>) -> Option<DateTime<Utc>> {
    dt_str.and_then(|s| {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    })
}

fn parse_date_opt(date_str: Option<&str>) -> Option<NaiveDate> {
    date_str.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

fn row_to_user(row: &rusqlite::Row) -> Result<User, rusqlite::Error> {
    let settings_json: String = row.get(6)?;
    let created_at: String = row.get(4)?;
    let last_login: String = row.get(5)?;
    let last_active: Option<String> = row.get(8)?;
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        created_at: parse_datetime_fallback(&created_at),
        last_login: parse_datetime_fallback(&last_login),
        settings: serde_json::from_str(&settings_json).unwrap_or_default(),
        streak: row.get(7)?,
        last_active_date: parse_datetime_opt(last_active.as_deref()),
    })
}

fn row_to_task(row: &rusqlite::Row) -> Result<Task, rusqlite::Error> {
    let date: Option<String> = row.get(4)?;
    let priority: String = row.get(6)?;
    let created_at: String = row.get(8)?;
    let completed_at: Option<String> = row.get(9)?;
    Ok(Task {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        date: parse_date_opt(date.as_deref()),
        time: row.get(5)?,
        priority: Priority::parse(&priority).unwrap_or_default(),
        completed: row.get(7)?,
        created_at: parse_datetime_fallback(&created_at),
        completed_at: parse_datetime_opt(completed_at.as_deref()),
    })
}

fn row_to_note(row: &rusqlite::Row) -> Result<Note, rusqlite::Error> {
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;
    Ok(Note {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        content: row.get(3)?,
        created_at: parse_datetime_fallback(&created_at),
        updated_at: parse_datetime_fallback(&updated_at),
    })
}

fn row_to_session(row: &rusqlite::Row) -> Result<FocusSession, rusqlite::Error> {
    let date: String = row.get(4)?;
    let start_time: String = row.get(5)?;
    let end_time: String = row.get(6)?;
    Ok(FocusSession {
        id: row.get(0)?,
        user_id: row.get(1)?,
        task: row.get(2)?,
        duration: row.get(3)?,
        date: parse_datetime_fallback(&date),
        start_time: parse_datetime_fallback(&start_time),
        end_time: parse_datetime_fallback(&end_time),
    })
}

/// SQLite document store scoped by owning user.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at `<data_dir>/tempo.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("tempo.db");
        Self::open_at(&path)
    }

    /// Open the store at an explicit path.
    pub fn open_at(path: &std::path::Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS users (
                id               TEXT PRIMARY KEY,
                name             TEXT NOT NULL,
                email            TEXT NOT NULL UNIQUE,
                password_hash    TEXT NOT NULL,
                created_at       TEXT NOT NULL,
                last_login       TEXT NOT NULL,
                settings         TEXT NOT NULL DEFAULT '{}',
                streak           INTEGER NOT NULL DEFAULT 0,
                last_active_date TEXT
            );

            CREATE TABLE IF NOT EXISTS tasks (
                id           TEXT PRIMARY KEY,
                user_id      TEXT NOT NULL REFERENCES users(id),
                title        TEXT NOT NULL,
                description  TEXT NOT NULL DEFAULT '',
                date         TEXT,
                time         TEXT,
                priority     TEXT NOT NULL DEFAULT 'medium',
                completed    INTEGER NOT NULL DEFAULT 0,
                created_at   TEXT NOT NULL,
                completed_at TEXT
            );

            CREATE TABLE IF NOT EXISTS notes (
                id         TEXT PRIMARY KEY,
                user_id    TEXT NOT NULL REFERENCES users(id),
                title      TEXT NOT NULL,
                content    TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS sessions (
                id           TEXT PRIMARY KEY,
                user_id      TEXT NOT NULL REFERENCES users(id),
                task         TEXT NOT NULL,
                duration_min INTEGER NOT NULL,
                date         TEXT NOT NULL,
                start_time   TEXT NOT NULL,
                end_time     TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            -- Indexes for the per-user list queries
            CREATE INDEX IF NOT EXISTS idx_tasks_user_created ON tasks(user_id, created_at);
            CREATE INDEX IF NOT EXISTS idx_notes_user_updated ON notes(user_id, updated_at);
            CREATE INDEX IF NOT EXISTS idx_sessions_user_date ON sessions(user_id, date);",
        )?;
        Ok(())
    }

    // === Users ===

    /// Create a user with default settings, a zero streak, and no activity
    /// history. The email is stored lowercase.
    pub fn create_user(&self, new: &NewUser) -> Result<User> {
        new.validate()?;
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: new.name.trim().to_string(),
            email: new.email.trim().to_lowercase(),
            password_hash: new.password_hash.clone(),
            created_at: now,
            last_login: now,
            settings: Settings::default(),
            streak: 0,
            last_active_date: None,
        };
        let settings_json = serde_json::to_string(&user.settings)?;
        self.conn.execute(
            &format!("INSERT INTO users ({USER_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"),
            params![
                user.id,
                user.name,
                user.email,
                user.password_hash,
                user.created_at.to_rfc3339(),
                user.last_login.to_rfc3339(),
                settings_json,
                user.streak,
                Option::<String>::None,
            ],
        )?;
        Ok(user)
    }

    pub fn get_user(&self, user_id: &str) -> Result<User> {
        self.conn
            .query_row(
                &format!("SELECT {USER_COLS} FROM users WHERE id = ?1"),
                params![user_id],
                row_to_user,
            )
            .optional()?
            .ok_or(CoreError::NotFound("User"))
    }

    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .conn
            .query_row(
                &format!("SELECT {USER_COLS} FROM users WHERE email = ?1"),
                params![email.trim().to_lowercase()],
                row_to_user,
            )
            .optional()?)
    }

    /// Apply a partial settings update and return the merged settings.
    pub fn update_user_settings(&self, user_id: &str, patch: &SettingsPatch) -> Result<Settings> {
        let user = self.get_user(user_id)?;
        let mut settings = user.settings;
        settings.apply(patch);
        let settings_json = serde_json::to_string(&settings)?;
        self.conn.execute(
            "UPDATE users SET settings = ?1 WHERE id = ?2",
            params![settings_json, user_id],
        )?;
        Ok(settings)
    }

    pub fn update_user_streak(
        &self,
        user_id: &str,
        streak: u32,
        last_active: DateTime<Utc>,
    ) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE users SET streak = ?1, last_active_date = ?2 WHERE id = ?3",
            params![streak, last_active.to_rfc3339(), user_id],
        )?;
        if changed == 0 {
            return Err(CoreError::NotFound("User"));
        }
        Ok(())
    }

    pub fn touch_last_login(&self, user_id: &str, now: DateTime<Utc>) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE users SET last_login = ?1 WHERE id = ?2",
            params![now.to_rfc3339(), user_id],
        )?;
        if changed == 0 {
            return Err(CoreError::NotFound("User"));
        }
        Ok(())
    }

    // === Tasks ===

    pub fn create_task(&self, user_id: &str, new: &NewTask) -> Result<Task> {
        new.validate()?;
        let task = Task {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: new.title.trim().to_string(),
            description: new.description.clone().unwrap_or_default(),
            date: new.date,
            time: new.time.clone(),
            priority: new.priority.unwrap_or_default(),
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        };
        self.conn.execute(
            &format!("INSERT INTO tasks ({TASK_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"),
            params![
                task.id,
                task.user_id,
                task.title,
                task.description,
                task.date.map(|d| d.format("%Y-%m-%d").to_string()),
                task.time,
                task.priority.as_str(),
                task.completed,
                task.created_at.to_rfc3339(),
                Option::<String>::None,
            ],
        )?;
        Ok(task)
    }

    /// List the user's tasks, newest first.
    pub fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TASK_COLS} FROM tasks WHERE user_id = ?1 ORDER BY created_at DESC"
        ))?;
        let rows = stmt.query_map(params![user_id], row_to_task)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Apply a partial update to an owned task. Toggling `completed`
    /// maintains `completed_at`.
    pub fn update_task(&self, user_id: &str, id: &str, patch: &TaskPatch) -> Result<Task> {
        let mut task = self
            .conn
            .query_row(
                &format!("SELECT {TASK_COLS} FROM tasks WHERE id = ?1 AND user_id = ?2"),
                params![id, user_id],
                row_to_task,
            )
            .optional()?
            .ok_or(CoreError::NotFound("Task"))?;

        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(CoreError::Validation("Title is required".into()));
            }
            task.title = title.trim().to_string();
        }
        if let Some(description) = &patch.description {
            task.description = description.clone();
        }
        if let Some(date) = patch.date {
            task.date = Some(date);
        }
        if let Some(time) = &patch.time {
            task.time = Some(time.clone());
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
            task.completed_at = completed.then(Utc::now);
        }

        self.conn.execute(
            "UPDATE tasks SET title = ?1, description = ?2, date = ?3, time = ?4,
                    priority = ?5, completed = ?6, completed_at = ?7
             WHERE id = ?8 AND user_id = ?9",
            params![
                task.title,
                task.description,
                task.date.map(|d| d.format("%Y-%m-%d").to_string()),
                task.time,
                task.priority.as_str(),
                task.completed,
                task.completed_at.map(|at| at.to_rfc3339()),
                id,
                user_id,
            ],
        )?;
        Ok(task)
    }

    pub fn delete_task(&self, user_id: &str, id: &str) -> Result<()> {
        let deleted = self.conn.execute(
            "DELETE FROM tasks WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        if deleted == 0 {
            return Err(CoreError::NotFound("Task"));
        }
        Ok(())
    }

    // === Notes ===

    pub fn create_note(&self, user_id: &str, new: &NewNote) -> Result<Note> {
        new.validate()?;
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: new.title.trim().to_string(),
            content: new.content.clone().unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.conn.execute(
            &format!("INSERT INTO notes ({NOTE_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
            params![
                note.id,
                note.user_id,
                note.title,
                note.content,
                note.created_at.to_rfc3339(),
                note.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(note)
    }

    /// List the user's notes, most recently updated first.
    pub fn list_notes(&self, user_id: &str) -> Result<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {NOTE_COLS} FROM notes WHERE user_id = ?1 ORDER BY updated_at DESC"
        ))?;
        let rows = stmt.query_map(params![user_id], row_to_note)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Apply a partial update to an owned note. Always bumps `updated_at`.
    pub fn update_note(&self, user_id: &str, id: &str, patch: &NotePatch) -> Result<Note> {
        let mut note = self
            .conn
            .query_row(
                &format!("SELECT {NOTE_COLS} FROM notes WHERE id = ?1 AND user_id = ?2"),
                params![id, user_id],
                row_to_note,
            )
            .optional()?
            .ok_or(CoreError::NotFound("Note"))?;

        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(CoreError::Validation("Title is required".into()));
            }
            note.title = title.trim().to_string();
        }
        if let Some(content) = &patch.content {
            note.content = content.clone();
        }
        note.updated_at = Utc::now();

        self.conn.execute(
            "UPDATE notes SET title = ?1, content = ?2, updated_at = ?3
             WHERE id = ?4 AND user_id = ?5",
            params![
                note.title,
                note.content,
                note.updated_at.to_rfc3339(),
                id,
                user_id,
            ],
        )?;
        Ok(note)
    }

    pub fn delete_note(&self, user_id: &str, id: &str) -> Result<()> {
        let deleted = self.conn.execute(
            "DELETE FROM notes WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        if deleted == 0 {
            return Err(CoreError::NotFound("Note"));
        }
        Ok(())
    }

    // === Sessions ===

    /// Record a focus session. Sessions are append-only; `date` is stamped
    /// from the server clock, not taken from the caller.
    pub fn create_session(&self, user_id: &str, new: &NewSession) -> Result<FocusSession> {
        new.validate()?;
        let session = FocusSession {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            task: new.task.trim().to_string(),
            duration: new.duration,
            date: Utc::now(),
            start_time: new.start_time,
            end_time: new.end_time,
        };
        self.conn.execute(
            &format!("INSERT INTO sessions ({SESSION_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
            params![
                session.id,
                session.user_id,
                session.task,
                session.duration,
                session.date.to_rfc3339(),
                session.start_time.to_rfc3339(),
                session.end_time.to_rfc3339(),
            ],
        )?;
        Ok(session)
    }

    /// List the user's sessions, newest first.
    pub fn list_sessions(&self, user_id: &str) -> Result<Vec<FocusSession>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SESSION_COLS} FROM sessions WHERE user_id = ?1 ORDER BY date DESC"
        ))?;
        let rows = stmt.query_map(params![user_id], row_to_session)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    // === Key-value ===

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        Ok(stmt
            .query_row(params![key], |row| row.get::<_, String>(0))
            .optional()?)
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn store_with_user() -> (Store, User) {
        let store = Store::open_memory().unwrap();
        let user = store
            .create_user(&NewUser {
                name: "Ada".into(),
                email: "Ada@Example.Com".into(),
                password_hash: "hash".into(),
            })
            .unwrap();
        (store, user)
    }

    #[test]
    fn new_users_start_with_no_activity() {
        let (_, user) = store_with_user();
        assert_eq!(user.streak, 0);
        assert!(user.last_active_date.is_none());
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.settings.theme, "dark");
    }

    #[test]
    fn find_user_by_email_is_case_insensitive() {
        let (store, user) = store_with_user();
        let found = store.find_user_by_email("ADA@example.com").unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
        assert!(store.find_user_by_email("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn settings_patch_only_touches_given_fields() {
        let (store, user) = store_with_user();
        let settings = store
            .update_user_settings(
                &user.id,
                &SettingsPatch {
                    weather_city: Some("Osaka".into()),
                    ..SettingsPatch::default()
                },
            )
            .unwrap();
        assert_eq!(settings.weather_city, "Osaka");
        assert_eq!(settings.theme, "dark");

        let reread = store.get_user(&user.id).unwrap();
        assert_eq!(reread.settings.weather_city, "Osaka");
    }

    #[test]
    fn streak_update_persists() {
        let (store, user) = store_with_user();
        let now = Utc::now();
        store.update_user_streak(&user.id, 3, now).unwrap();
        let reread = store.get_user(&user.id).unwrap();
        assert_eq!(reread.streak, 3);
        assert_eq!(
            reread.last_active_date.map(|at| at.timestamp()),
            Some(now.timestamp())
        );
    }

    #[test]
    fn malformed_last_active_date_reads_back_as_absent() {
        let (store, user) = store_with_user();
        store
            .conn
            .execute(
                "UPDATE users SET last_active_date = 'garbage' WHERE id = ?1",
                params![user.id],
            )
            .unwrap();
        let reread = store.get_user(&user.id).unwrap();
        assert!(reread.last_active_date.is_none());
    }

    #[test]
    fn task_completion_toggle_maintains_completed_at() {
        let (store, user) = store_with_user();
        let task = store
            .create_task(
                &user.id,
                &NewTask {
                    title: "Ship release".into(),
                    ..NewTask::default()
                },
            )
            .unwrap();
        assert!(task.completed_at.is_none());

        let done = store
            .update_task(
                &user.id,
                &task.id,
                &TaskPatch {
                    completed: Some(true),
                    ..TaskPatch::default()
                },
            )
            .unwrap();
        assert!(done.completed);
        assert!(done.completed_at.is_some());

        let undone = store
            .update_task(
                &user.id,
                &task.id,
                &TaskPatch {
                    completed: Some(false),
                    ..TaskPatch::default()
                },
            )
            .unwrap();
        assert!(!undone.completed);
        assert!(undone.completed_at.is_none());
    }

    #[test]
    fn non_owned_task_is_not_found_and_not_mutated() {
        let (store, owner) = store_with_user();
        let other = store
            .create_user(&NewUser {
                name: "Eve".into(),
                email: "eve@example.com".into(),
                password_hash: "hash".into(),
            })
            .unwrap();
        let task = store
            .create_task(
                &owner.id,
                &NewTask {
                    title: "Private".into(),
                    ..NewTask::default()
                },
            )
            .unwrap();

        let patch = TaskPatch {
            title: Some("Hijacked".into()),
            ..TaskPatch::default()
        };
        match store.update_task(&other.id, &task.id, &patch) {
            Err(CoreError::NotFound("Task")) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(matches!(
            store.delete_task(&other.id, &task.id),
            Err(CoreError::NotFound("Task"))
        ));

        let unchanged = &store.list_tasks(&owner.id).unwrap()[0];
        assert_eq!(unchanged.title, "Private");
    }

    #[test]
    fn tasks_list_newest_first() {
        let (store, user) = store_with_user();
        for title in ["first", "second", "third"] {
            store
                .create_task(
                    &user.id,
                    &NewTask {
                        title: title.into(),
                        ..NewTask::default()
                    },
                )
                .unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        let titles: Vec<_> = store
            .list_tasks(&user.id)
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["third", "second", "first"]);
    }

    #[test]
    fn note_update_bumps_updated_at() {
        let (store, user) = store_with_user();
        let note = store
            .create_note(
                &user.id,
                &NewNote {
                    title: "Ideas".into(),
                    content: None,
                },
            )
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let updated = store
            .update_note(
                &user.id,
                &note.id,
                &NotePatch {
                    content: Some("more".into()),
                    ..NotePatch::default()
                },
            )
            .unwrap();
        assert!(updated.updated_at > note.updated_at);
        assert_eq!(updated.title, "Ideas");
    }

    #[test]
    fn sessions_are_scoped_and_stamped_with_server_date() {
        let (store, user) = store_with_user();
        let start = Utc::now() - Duration::minutes(25);
        let session = store
            .create_session(
                &user.id,
                &NewSession {
                    task: "Deep work".into(),
                    duration: 25,
                    start_time: start,
                    end_time: Utc::now(),
                },
            )
            .unwrap();
        assert!(session.date >= start);

        let listed = store.list_sessions(&user.id).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].duration, 25);
        assert!(store.list_sessions("someone-else").unwrap().is_empty());
    }

    #[test]
    fn kv_store_roundtrip() {
        let store = Store::open_memory().unwrap();
        assert!(store.kv_get("timer").unwrap().is_none());
        store.kv_set("timer", "{}").unwrap();
        assert_eq!(store.kv_get("timer").unwrap().as_deref(), Some("{}"));
    }
}
