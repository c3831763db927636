//! Focus session history and manual logging.

use chrono::{Duration, Utc};
use clap::Subcommand;

use tempo_core::model::NewSession;
use tempo_core::storage::Store;

use super::{active_user, print_json, refresh_streak};

#[derive(Subcommand)]
pub enum SessionAction {
    /// List recorded sessions, newest first
    List,
    /// Log a finished interval by hand (e.g. work done off the timer)
    Log {
        /// What the time was spent on
        task: String,
        /// Focused minutes
        minutes: u32,
    },
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let user = active_user(&store)?;

    match action {
        SessionAction::List => {
            let sessions = store.list_sessions(&user.id)?;
            print_json(&sessions)?;
        }
        SessionAction::Log { task, minutes } => {
            let now = Utc::now();
            let session = store.create_session(
                &user.id,
                &NewSession {
                    task,
                    duration: minutes,
                    start_time: now - Duration::minutes(i64::from(minutes)),
                    end_time: now,
                },
            )?;
            refresh_streak(&store, &user)?;
            print_json(&session)?;
        }
    }
    Ok(())
}
