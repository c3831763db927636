//! User settings.

use axum::extract::State;
use serde::Serialize;

use tempo_core::model::{Settings, SettingsPatch};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::extract::Json;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub message: String,
    pub settings: Settings,
}

pub async fn update_settings(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(patch): Json<SettingsPatch>,
) -> Result<Json<SettingsResponse>, ApiError> {
    let settings = state.store().update_user_settings(&user.id, &patch)?;
    Ok(Json(SettingsResponse {
        message: "Settings updated".into(),
        settings,
    }))
}
