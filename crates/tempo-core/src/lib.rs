//! # Tempo Core Library
//!
//! Core business logic for Tempo, a personal productivity tracker. The
//! library follows a CLI-first philosophy: everything here is callable from
//! the standalone CLI binary, with the REST server being a thin HTTP layer
//! over the same core.
//!
//! ## Architecture
//!
//! - **Focus Timer**: a wall-clock-based state machine; the caller invokes
//!   `tick()` periodically and passes the current time into every transition
//! - **Streak**: pure consecutive-day streak arithmetic
//! - **Analytics**: pure aggregation over a user's tasks and focus sessions
//! - **Storage**: SQLite-backed per-user document store plus TOML config
//!
//! ## Key Components
//!
//! - [`FocusTimer`]: timer state machine
//! - [`Store`]: user/task/note/session persistence
//! - [`Config`]: local configuration management

pub mod analytics;
pub mod error;
pub mod model;
pub mod storage;
pub mod streak;
pub mod timer;

pub use analytics::Analytics;
pub use error::{ConfigError, CoreError};
pub use model::{FocusSession, Note, Priority, Settings, Task, User};
pub use storage::{Config, Store};
pub use streak::StreakUpdate;
pub use timer::{FocusTimer, TimerEvent, TimerState};
