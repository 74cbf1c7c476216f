use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{hash_password, issue_token, verify_password, AuthUser};
use crate::error::AppError;
use crate::models::user::{Role, User, UserProfile};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: UserProfile,
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name cannot be empty".to_string()));
    }

    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        return Err(AppError::BadRequest("invalid email".to_string()));
    }

    if payload.password.is_empty() {
        return Err(AppError::BadRequest("password cannot be empty".to_string()));
    }

    let user = User {
        user_id: Uuid::new_v4(),
        name: payload.name,
        email: payload.email.trim().to_string(),
        password_hash: hash_password(&payload.password)?,
        role: payload.role,
        created_at: Utc::now(),
        is_active: true,
    };

    state.store.insert_user(user.clone())?;
    tracing::info!(user_id = %user.user_id, role = ?user.role, "user registered");

    let access_token = issue_token(&user.email, &state.jwt_secret, state.token_ttl_minutes)?;

    Ok(Json(AuthResponse {
        access_token,
        token_type: "bearer",
        user: UserProfile::from(&user),
    }))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    // Same error for unknown email and wrong password.
    let user = state
        .store
        .find_user_by_email(&payload.email)
        .filter(|user| verify_password(&payload.password, &user.password_hash))
        .ok_or_else(|| AppError::Unauthorized("invalid email or password".to_string()))?;

    let access_token = issue_token(&user.email, &state.jwt_secret, state.token_ttl_minutes)?;

    Ok(Json(AuthResponse {
        access_token,
        token_type: "bearer",
        user: UserProfile::from(&user),
    }))
}

async fn me(AuthUser(user): AuthUser) -> Json<UserProfile> {
    Json(UserProfile::from(&user))
}
