use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::user::{User, UserResponse};
use crate::routes::users::fetch_user;
use crate::security::{issue_token, verify_password, AuthUser};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// POST /api/v1/auth/login
///
/// Checks the credentials and issues a signed bearer token. Unknown email
/// and wrong password both map to the same 401 so the endpoint cannot be
/// used to enumerate accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, email, hashed_password, role, created_at \
         FROM users WHERE email = ?1",
    )
    .bind(&payload.email)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&payload.password, &user.hashed_password)? {
        tracing::warn!("Failed login attempt for user {}", user.id);
        return Err(AppError::InvalidCredentials);
    }

    let access_token = issue_token(&user, &state.config.token_secret, state.config.token_ttl_secs)?;

    tracing::info!("User {} logged in", user.id);

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.config.token_ttl_secs,
    }))
}

/// GET /api/v1/auth/me
///
/// Resolve the bearer token to the current account.
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> Result<Json<UserResponse>> {
    let user = fetch_user(&state, auth.id).await?;
    Ok(Json(user.into()))
}
