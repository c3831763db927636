//! Note CRUD.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use tempo_core::model::{NewNote, Note, NotePatch};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::extract::Json;
use crate::state::AppState;

use super::MessageResponse;

#[derive(Debug, Serialize)]
pub struct NoteListResponse {
    pub notes: Vec<Note>,
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub message: String,
    pub note: Note,
}

pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<NoteListResponse>, ApiError> {
    let notes = state.store().list_notes(&user.id)?;
    Ok(Json(NoteListResponse { notes }))
}

pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(new): Json<NewNote>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    let note = state.store().create_note(&user.id, &new)?;
    Ok((
        StatusCode::CREATED,
        Json(NoteResponse {
            message: "Note created".into(),
            note,
        }),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(patch): Json<NotePatch>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = state.store().update_note(&user.id, &id, &patch)?;
    Ok(Json(NoteResponse {
        message: "Note updated".into(),
        note,
    }))
}

pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store().delete_note(&user.id, &id)?;
    Ok(Json(MessageResponse::new("Note deleted")))
}
