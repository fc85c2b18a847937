use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{is_unique_violation, AppError, Result};
use crate::models::user::{
    validate_email, validate_password, validate_username, User, UserResponse, ROLE_ADMIN,
    ROLE_USER,
};
use crate::security::{hash_password, AuthUser};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub success: bool,
    pub message: String,
}

/// Register a new user
///
/// Validates the username, email and password, hashes the password with
/// Argon2id and stores the account with the `user` role. The configured
/// bootstrap admin email is granted `admin` instead.
///
/// Returns 409 Conflict if the username or email is already registered.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    validate_username(&payload.username)?;
    validate_email(&payload.email)?;
    validate_password(&payload.password)?;

    let role = match &state.config.bootstrap_admin_email {
        Some(admin_email) if admin_email.eq_ignore_ascii_case(&payload.email) => ROLE_ADMIN,
        _ => ROLE_USER,
    };

    let hashed_password = hash_password(&payload.password)?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, email, hashed_password, role, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5) \
         RETURNING id, username, email, hashed_password, role, created_at",
    )
    .bind(&payload.username)
    .bind(&payload.email)
    .bind(&hashed_password)
    .bind(role)
    .bind(Utc::now())
    .fetch_one(&state.pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict("Username or email already registered".to_string())
        } else {
            e.into()
        }
    })?;

    tracing::info!("New user registered with ID {} (role: {})", user.id, user.role);

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/v1/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>> {
    let user = fetch_user(&state, user_id).await?;
    Ok(Json(user.into()))
}

/// PUT /api/v1/users/:id
///
/// Partial update of username, email and password. Only the account owner
/// or an admin may update a user.
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>> {
    if auth.id != user_id && !auth.is_admin() {
        tracing::warn!("User {} denied update of user {}", auth.id, user_id);
        return Err(AppError::Forbidden);
    }

    let current = fetch_user(&state, user_id).await?;

    let username = match payload.username {
        Some(username) => {
            validate_username(&username)?;
            username
        }
        None => current.username,
    };
    let email = match payload.email {
        Some(email) => {
            validate_email(&email)?;
            email
        }
        None => current.email,
    };
    let hashed_password = match payload.password {
        Some(password) => {
            validate_password(&password)?;
            hash_password(&password)?
        }
        None => current.hashed_password,
    };

    let user = sqlx::query_as::<_, User>(
        "UPDATE users SET username = ?1, email = ?2, hashed_password = ?3 WHERE id = ?4 \
         RETURNING id, username, email, hashed_password, role, created_at",
    )
    .bind(&username)
    .bind(&email)
    .bind(&hashed_password)
    .bind(user_id)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict("Username or email already registered".to_string())
        } else {
            e.into()
        }
    })?;

    tracing::info!("User {} updated", user_id);

    Ok(Json(user.into()))
}

/// DELETE /api/v1/users/:id
///
/// Deletes the account and, through the schema, its votes. Foods the user
/// created stay on the menu with the creator cleared.
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
) -> Result<Json<DeleteUserResponse>> {
    if auth.id != user_id && !auth.is_admin() {
        tracing::warn!("User {} denied deletion of user {}", auth.id, user_id);
        return Err(AppError::Forbidden);
    }

    let result = sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(user_id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::UserNotFound);
    }

    tracing::info!("User {} deleted", user_id);

    Ok(Json(DeleteUserResponse {
        success: true,
        message: "User and associated votes deleted".to_string(),
    }))
}

/// Fetch a user row by ID or return UserNotFound
pub async fn fetch_user(state: &AppState, user_id: i64) -> Result<User> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, email, hashed_password, role, created_at FROM users WHERE id = ?1",
    )
    .bind(user_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::UserNotFound)
}
