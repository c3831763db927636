//! Task CRUD.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use tempo_core::model::{NewTask, Task, TaskPatch};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::extract::Json;
use crate::state::AppState;

use super::MessageResponse;

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub message: String,
    pub task: Task,
}

pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<TaskListResponse>, ApiError> {
    let tasks = state.store().list_tasks(&user.id)?;
    Ok(Json(TaskListResponse { tasks }))
}

pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(new): Json<NewTask>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let task = state.store().create_task(&user.id, &new)?;
    Ok((
        StatusCode::CREATED,
        Json(TaskResponse {
            message: "Task created".into(),
            task,
        }),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.store().update_task(&user.id, &id, &patch)?;
    Ok(Json(TaskResponse {
        message: "Task updated".into(),
        task,
    }))
}

pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store().delete_task(&user.id, &id)?;
    Ok(Json(MessageResponse::new("Task deleted")))
}
