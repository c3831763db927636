//! Timer control.
//!
//! One timer instance is persisted under a kv key between invocations.
//! `status` ticks the machine; when the countdown has finished, the
//! completed session is recorded and the streak refreshed in the same run.

use chrono::Utc;
use clap::Subcommand;

use tempo_core::storage::Store;
use tempo_core::{Config, FocusTimer, TimerEvent};

use super::{active_user, print_json, refresh_streak};

const ENGINE_KEY: &str = "focus_timer";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Configure duration and task label (discards any run in progress)
    Set {
        /// Duration in minutes (1-120)
        minutes: u32,
        /// Task label attached to the emitted session
        #[arg(long)]
        task: Option<String>,
    },
    /// Start or resume the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Reset to idle without recording anything
    Reset,
    /// Print current timer state as JSON (ticks the countdown)
    Status,
}

fn load_timer(store: &Store) -> FocusTimer {
    if let Ok(Some(json)) = store.kv_get(ENGINE_KEY) {
        if let Ok(timer) = serde_json::from_str::<FocusTimer>(&json) {
            return timer;
        }
    }
    let cfg = Config::load_or_default();
    let mut timer = FocusTimer::with_minutes(cfg.timer.focus_minutes)
        .unwrap_or_else(|_| FocusTimer::new());
    timer.set_task(cfg.timer.default_task);
    timer
}

fn save_timer(store: &Store, timer: &FocusTimer) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(timer)?;
    store.kv_set(ENGINE_KEY, &json)?;
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut timer = load_timer(&store);
    let now = Utc::now();

    match action {
        TimerAction::Set { minutes, task } => {
            timer.set_duration(minutes)?;
            if let Some(task) = task {
                timer.set_task(task);
            }
            print_json(&timer.snapshot())?;
        }
        TimerAction::Start => {
            timer.start(now);
            print_json(&timer.snapshot())?;
        }
        TimerAction::Pause => {
            timer.pause(now);
            print_json(&timer.snapshot())?;
        }
        TimerAction::Reset => {
            timer.reset();
            print_json(&timer.snapshot())?;
        }
        TimerAction::Status => {
            // Always a single JSON document, so the output stays pipeable.
            if let Some(TimerEvent::Completed { session }) = timer.tick(now) {
                let user = active_user(&store)?;
                let recorded = store.create_session(&user.id, &session)?;
                refresh_streak(&store, &user)?;
                print_json(&serde_json::json!({
                    "timer": timer.snapshot(),
                    "completed": recorded,
                }))?;
            } else {
                print_json(&timer.snapshot())?;
            }
        }
    }

    save_timer(&store, &timer)?;
    Ok(())
}
