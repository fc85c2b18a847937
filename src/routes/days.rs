use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{is_unique_violation, AppError, Result};
use crate::models::day::validate_day_name;
use crate::models::Day;
use crate::security::AdminUser;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DayRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteDayResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/v1/days
pub async fn list_days(State(state): State<AppState>) -> Result<Json<Vec<Day>>> {
    let days = sqlx::query_as::<_, Day>("SELECT id, name FROM days ORDER BY id")
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(days))
}

/// GET /api/v1/days/:id
pub async fn get_day(
    State(state): State<AppState>,
    Path(day_id): Path<i64>,
) -> Result<Json<Day>> {
    let day = fetch_day(&state, day_id).await?;
    Ok(Json(day))
}

/// POST /api/v1/days
///
/// Admin only. The weekdays are seeded by migration; this exists for extra
/// labels such as holidays.
pub async fn create_day(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(payload): Json<DayRequest>,
) -> Result<(StatusCode, Json<Day>)> {
    validate_day_name(&payload.name)?;

    let day = sqlx::query_as::<_, Day>(
        "INSERT INTO days (name) VALUES (?1) RETURNING id, name",
    )
    .bind(&payload.name)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict("Day already exists".to_string())
        } else {
            e.into()
        }
    })?;

    tracing::info!("Day {} ({}) created by user {}", day.id, day.name, admin.id);

    Ok((StatusCode::CREATED, Json(day)))
}

/// PUT /api/v1/days/:id
pub async fn update_day(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(day_id): Path<i64>,
    Json(payload): Json<DayRequest>,
) -> Result<Json<Day>> {
    validate_day_name(&payload.name)?;

    let day = sqlx::query_as::<_, Day>(
        "UPDATE days SET name = ?1 WHERE id = ?2 RETURNING id, name",
    )
    .bind(&payload.name)
    .bind(day_id)
    .fetch_optional(&state.pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict("Day already exists".to_string())
        } else {
            e.into()
        }
    })?
    .ok_or(AppError::DayNotFound)?;

    tracing::info!("Day {} renamed to {} by user {}", day_id, day.name, admin.id);

    Ok(Json(day))
}

/// DELETE /api/v1/days/:id
///
/// Availability links on this day cascade with the row.
pub async fn delete_day(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(day_id): Path<i64>,
) -> Result<Json<DeleteDayResponse>> {
    let result = sqlx::query("DELETE FROM days WHERE id = ?1")
        .bind(day_id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::DayNotFound);
    }

    tracing::info!("Day {} deleted by user {}", day_id, admin.id);

    Ok(Json(DeleteDayResponse {
        success: true,
        message: "Day and its availability links deleted".to_string(),
    }))
}

/// Fetch a day row by ID or return DayNotFound
pub async fn fetch_day(state: &AppState, day_id: i64) -> Result<Day> {
    sqlx::query_as::<_, Day>("SELECT id, name FROM days WHERE id = ?1")
        .bind(day_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::DayNotFound)
}
