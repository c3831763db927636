//! CLI subcommands and shared helpers.
//!
//! The CLI is a local single-profile client: it resolves a default user on
//! first use, remembers it in the kv table, and drives the same core
//! library the server exposes over HTTP.

pub mod config;
pub mod note;
pub mod session;
pub mod stats;
pub mod task;
pub mod timer;

use chrono::Utc;

use tempo_core::model::{NewUser, User};
use tempo_core::storage::Store;
use tempo_core::streak;

const ACTIVE_USER_KEY: &str = "active_user";

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Resolve the local default user, creating it on first use.
pub(crate) fn active_user(store: &Store) -> Result<User, Box<dyn std::error::Error>> {
    if let Some(id) = store.kv_get(ACTIVE_USER_KEY)? {
        if let Ok(user) = store.get_user(&id) {
            return Ok(user);
        }
    }
    let user = store.create_user(&NewUser {
        name: "local".into(),
        email: "local@tempo".into(),
        password_hash: String::new(),
    })?;
    store.kv_set(ACTIVE_USER_KEY, &user.id)?;
    Ok(user)
}

/// Refresh the user's streak for an activity happening now.
/// Returns the current streak value.
pub(crate) fn refresh_streak(
    store: &Store,
    user: &User,
) -> Result<u32, Box<dyn std::error::Error>> {
    let update = streak::advance(user.streak, user.last_active_date, Utc::now());
    if update.changed {
        store.update_user_streak(&user.id, update.streak, update.last_active)?;
    }
    Ok(update.streak)
}

/// Print a value as JSON, pretty or compact per config.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> CliResult {
    let pretty = tempo_core::Config::load_or_default().output.pretty;
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
