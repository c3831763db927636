//! Registration, login, and identity.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use rand_core::OsRng;
use serde::{Deserialize, Serialize};

use tempo_core::model::{NewUser, PublicUser};
use tempo_core::streak;

use crate::auth::{issue_token, CurrentUser};
use crate::error::ApiError;
use crate::extract::Json;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: PublicUser,
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.password.is_empty()
    {
        return Err(ApiError::Validation("All fields are required".into()));
    }
    if payload.password.len() < 6 {
        return Err(ApiError::Validation(
            "Password must be at least 6 characters".into(),
        ));
    }

    let email = payload.email.trim().to_lowercase();
    if state.store().find_user_by_email(&email)?.is_some() {
        return Err(ApiError::Validation("Email already registered".into()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|e| ApiError::Validation(e.to_string()))?
        .to_string();

    let user = state.store().create_user(&NewUser {
        name: payload.name.trim().to_string(),
        email,
        password_hash,
    })?;

    let token = issue_token(&user.id, state.jwt_secret())?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Account created successfully".into(),
            token,
            user: PublicUser::from(&user),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let invalid = || ApiError::Unauthorized("Invalid email or password".to_string());

    let mut user = state
        .store()
        .find_user_by_email(&payload.email)?
        .ok_or_else(invalid)?;

    let parsed_hash = PasswordHash::new(&user.password_hash).map_err(|_| invalid())?;
    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| invalid())?;

    // Login is a qualifying activity: refresh the streak with the server
    // clock and stamp the login, holding the lock once across both writes.
    let now = Utc::now();
    let update = streak::advance(user.streak, user.last_active_date, now);
    {
        let store = state.store();
        if update.changed {
            store.update_user_streak(&user.id, update.streak, update.last_active)?;
        }
        store.touch_last_login(&user.id, now)?;
    }
    user.streak = update.streak;

    let token = issue_token(&user.id, state.jwt_secret())?;
    Ok(Json(AuthResponse {
        message: "Login successful".into(),
        token,
        user: PublicUser::from(&user),
    }))
}

pub async fn me(CurrentUser(user): CurrentUser) -> Json<MeResponse> {
    Json(MeResponse {
        user: PublicUser::from(&user),
    })
}
