mod engine;

pub use engine::{
    FocusTimer, TimerEvent, TimerSnapshot, TimerState, DEFAULT_FOCUS_SECS, MAX_MINUTES,
    MIN_MINUTES,
};
