//! Focus session logging. Sessions are append-only: no update or delete.

use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tempo_core::model::{FocusSession, NewSession};
use tempo_core::streak;

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::extract::Json;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub task: Option<String>,
    pub duration: Option<u32>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct SessionListResponse {
    pub sessions: Vec<FocusSession>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub message: String,
    pub session: FocusSession,
}

pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<SessionListResponse>, ApiError> {
    let sessions = state.store().list_sessions(&user.id)?;
    Ok(Json(SessionListResponse { sessions }))
}

pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let (Some(task), Some(duration), Some(start_time), Some(end_time)) = (
        payload.task,
        payload.duration,
        payload.start_time,
        payload.end_time,
    ) else {
        return Err(ApiError::Validation("All fields are required".into()));
    };

    let new = NewSession {
        task,
        duration,
        start_time,
        end_time,
    };

    // Recording a session is a qualifying activity. The streak refresh
    // uses the server clock and shares one lock with the insert so two
    // concurrent sessions from the same user cannot lose an update.
    let now = Utc::now();
    let session = {
        let store = state.store();
        let session = store.create_session(&user.id, &new)?;
        // Re-read under the lock; the extractor's copy may be stale.
        let fresh = store.get_user(&user.id)?;
        let update = streak::advance(fresh.streak, fresh.last_active_date, now);
        if update.changed {
            store.update_user_streak(&user.id, update.streak, update.last_active)?;
        }
        session
    };

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            message: "Session created".into(),
            session,
        }),
    ))
}
