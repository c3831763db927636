//! Analytics report, recomputed from raw collections on every request.

use axum::extract::State;
use chrono::Utc;
use serde::Serialize;

use tempo_core::analytics::{self, Analytics};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::extract::Json;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub analytics: Analytics,
}

pub async fn report(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let (tasks, sessions) = {
        let store = state.store();
        (store.list_tasks(&user.id)?, store.list_sessions(&user.id)?)
    };
    let analytics = analytics::compute(&tasks, &sessions, user.streak, Utc::now());
    Ok(Json(AnalyticsResponse { analytics }))
}
