use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{is_unique_violation, AppError, Result};
use crate::models::FoodAvailability;
use crate::routes::{days::fetch_day, foods::fetch_food};
use crate::security::AdminUser;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAvailabilityRequest {
    pub food_id: i64,
    pub day_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub food_id: i64,
    pub day_id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteAvailabilityResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/v1/availability
///
/// Admin only. Schedules a food on a day. Both rows must exist, and the
/// pair must not already be linked.
pub async fn create_availability(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(payload): Json<CreateAvailabilityRequest>,
) -> Result<(StatusCode, Json<FoodAvailability>)> {
    // Explicit existence checks give precise 404s instead of a bare
    // foreign key failure.
    fetch_food(&state, payload.food_id).await?;
    fetch_day(&state, payload.day_id).await?;

    let entry = sqlx::query_as::<_, FoodAvailability>(
        "INSERT INTO food_availability (food_id, day_id) VALUES (?1, ?2) \
         RETURNING id, food_id, day_id",
    )
    .bind(payload.food_id)
    .bind(payload.day_id)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict("Food is already scheduled on this day".to_string())
        } else {
            e.into()
        }
    })?;

    tracing::info!(
        "Food {} scheduled on day {} by user {}",
        payload.food_id,
        payload.day_id,
        admin.id
    );

    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/availability/:id
pub async fn get_availability(
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
) -> Result<Json<FoodAvailability>> {
    let entry = sqlx::query_as::<_, FoodAvailability>(
        "SELECT id, food_id, day_id FROM food_availability WHERE id = ?1",
    )
    .bind(entry_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::AvailabilityNotFound)?;

    Ok(Json(entry))
}

/// PUT /api/v1/availability/:id
///
/// Admin only. Re-points a link at another food/day pair. The new pair
/// must exist and must not already be linked.
pub async fn update_availability(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(entry_id): Path<i64>,
    Json(payload): Json<UpdateAvailabilityRequest>,
) -> Result<Json<FoodAvailability>> {
    fetch_food(&state, payload.food_id).await?;
    fetch_day(&state, payload.day_id).await?;

    let entry = sqlx::query_as::<_, FoodAvailability>(
        "UPDATE food_availability SET food_id = ?1, day_id = ?2 WHERE id = ?3 \
         RETURNING id, food_id, day_id",
    )
    .bind(payload.food_id)
    .bind(payload.day_id)
    .bind(entry_id)
    .fetch_optional(&state.pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict("Food is already scheduled on this day".to_string())
        } else {
            e.into()
        }
    })?
    .ok_or(AppError::AvailabilityNotFound)?;

    tracing::info!(
        "Availability entry {} re-pointed to food {} on day {} by user {}",
        entry_id,
        payload.food_id,
        payload.day_id,
        admin.id
    );

    Ok(Json(entry))
}

/// DELETE /api/v1/availability/:id
pub async fn delete_availability(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(entry_id): Path<i64>,
) -> Result<Json<DeleteAvailabilityResponse>> {
    let result = sqlx::query("DELETE FROM food_availability WHERE id = ?1")
        .bind(entry_id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::AvailabilityNotFound);
    }

    tracing::info!("Availability entry {} deleted by user {}", entry_id, admin.id);

    Ok(Json(DeleteAvailabilityResponse {
        success: true,
        message: "Availability entry deleted".to_string(),
    }))
}
