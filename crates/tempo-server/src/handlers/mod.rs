pub mod analytics;
pub mod auth;
pub mod notes;
pub mod sessions;
pub mod tasks;
pub mod users;

use serde::Serialize;

/// Envelope for operations that only confirm.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
