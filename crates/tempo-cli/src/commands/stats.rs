//! Analytics report over the local user's data.

use chrono::Utc;

use tempo_core::analytics;
use tempo_core::storage::Store;

use super::{active_user, print_json};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let user = active_user(&store)?;

    let tasks = store.list_tasks(&user.id)?;
    let sessions = store.list_sessions(&user.id)?;
    let report = analytics::compute(&tasks, &sessions, user.streak, Utc::now());
    print_json(&report)
}
