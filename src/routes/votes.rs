use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{is_foreign_key_violation, AppError, Result};
use crate::models::vote::validate_vote_value;
use crate::models::Vote;
use crate::routes::foods::fetch_food;
use crate::security::AuthUser;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateVoteRequest {
    pub food_id: i64,
    pub value: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteVoteResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/v1/votes
///
/// Casts a rating for a food. The voter is always the authenticated user.
/// Voting again for the same food overwrites the previous value; the
/// schema's UNIQUE(user_id, food_id) backs the upsert.
pub async fn create_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateVoteRequest>,
) -> Result<(StatusCode, Json<Vote>)> {
    validate_vote_value(payload.value)?;
    fetch_food(&state, payload.food_id).await?;

    let vote = sqlx::query_as::<_, Vote>(
        "INSERT INTO votes (user_id, food_id, value, created_at) VALUES (?1, ?2, ?3, ?4) \
         ON CONFLICT (user_id, food_id) DO UPDATE SET value = excluded.value \
         RETURNING id, user_id, food_id, value, created_at",
    )
    .bind(auth.id)
    .bind(payload.food_id)
    .bind(payload.value)
    .bind(Utc::now())
    .fetch_one(&state.pool)
    .await
    .map_err(|e| {
        // The account behind a still-valid token may have been deleted
        if is_foreign_key_violation(&e) {
            AppError::UserNotFound
        } else {
            e.into()
        }
    })?;

    tracing::info!(
        "User {} rated food {} with {}",
        auth.id,
        payload.food_id,
        payload.value
    );

    Ok((StatusCode::CREATED, Json(vote)))
}

/// GET /api/v1/votes/:id
pub async fn get_vote(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(vote_id): Path<i64>,
) -> Result<Json<Vote>> {
    let vote = sqlx::query_as::<_, Vote>(
        "SELECT id, user_id, food_id, value, created_at FROM votes WHERE id = ?1",
    )
    .bind(vote_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::VoteNotFound)?;

    Ok(Json(vote))
}

/// DELETE /api/v1/votes/:id
///
/// Only the voter or an admin may retract a vote.
pub async fn delete_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(vote_id): Path<i64>,
) -> Result<Json<DeleteVoteResponse>> {
    let vote = sqlx::query_as::<_, Vote>(
        "SELECT id, user_id, food_id, value, created_at FROM votes WHERE id = ?1",
    )
    .bind(vote_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::VoteNotFound)?;

    if vote.user_id != auth.id && !auth.is_admin() {
        tracing::warn!("User {} denied deletion of vote {}", auth.id, vote_id);
        return Err(AppError::Forbidden);
    }

    sqlx::query("DELETE FROM votes WHERE id = ?1")
        .bind(vote_id)
        .execute(&state.pool)
        .await?;

    tracing::info!("Vote {} deleted by user {}", vote_id, auth.id);

    Ok(Json(DeleteVoteResponse {
        success: true,
        message: "Vote deleted".to_string(),
    }))
}
