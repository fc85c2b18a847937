use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::food::validate_food_input;
use crate::models::{Day, Food, VoteSummary};
use crate::security::AdminUser;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateFoodRequest {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFoodRequest {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListFoodsParams {
    /// Restrict the listing to foods available on this day name
    pub day: Option<String>,
}

/// Food detail: the row plus its scheduled days and vote summary
#[derive(Debug, Serialize)]
pub struct FoodDetailResponse {
    #[serde(flatten)]
    pub food: Food,
    pub days: Vec<Day>,
    pub votes: VoteSummary,
}

#[derive(Debug, Serialize)]
pub struct DeleteFoodResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/v1/foods
///
/// Lists the menu ordered by name. With `?day=<name>` only foods linked to
/// that day through the availability table are returned.
pub async fn list_foods(
    State(state): State<AppState>,
    Query(params): Query<ListFoodsParams>,
) -> Result<Json<Vec<Food>>> {
    let foods = match params.day {
        Some(day) => {
            sqlx::query_as::<_, Food>(
                "SELECT f.id, f.name, f.price, f.description, f.creator_id, f.created_at \
                 FROM foods f \
                 JOIN food_availability fa ON fa.food_id = f.id \
                 JOIN days d ON d.id = fa.day_id \
                 WHERE d.name = ?1 \
                 ORDER BY f.name",
            )
            .bind(day)
            .fetch_all(&state.pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Food>(
                "SELECT id, name, price, description, creator_id, created_at \
                 FROM foods ORDER BY name",
            )
            .fetch_all(&state.pool)
            .await?
        }
    };

    Ok(Json(foods))
}

/// GET /api/v1/foods/:id
pub async fn get_food(
    State(state): State<AppState>,
    Path(food_id): Path<i64>,
) -> Result<Json<FoodDetailResponse>> {
    let food = fetch_food(&state, food_id).await?;

    let days = sqlx::query_as::<_, Day>(
        "SELECT d.id, d.name FROM days d \
         JOIN food_availability fa ON fa.day_id = d.id \
         WHERE fa.food_id = ?1 ORDER BY d.id",
    )
    .bind(food_id)
    .fetch_all(&state.pool)
    .await?;

    let votes = vote_summary(&state, food_id).await?;

    Ok(Json(FoodDetailResponse { food, days, votes }))
}

/// POST /api/v1/foods
///
/// Admin only. The creator is the authenticated admin, never taken from
/// the request body.
pub async fn create_food(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(payload): Json<CreateFoodRequest>,
) -> Result<(StatusCode, Json<Food>)> {
    validate_food_input(&payload.name, payload.price, payload.description.as_deref())?;

    let food = sqlx::query_as::<_, Food>(
        "INSERT INTO foods (name, price, description, creator_id, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5) \
         RETURNING id, name, price, description, creator_id, created_at",
    )
    .bind(&payload.name)
    .bind(payload.price)
    .bind(&payload.description)
    .bind(admin.id)
    .bind(Utc::now())
    .fetch_one(&state.pool)
    .await?;

    tracing::info!("Food {} ({}) created by user {}", food.id, food.name, admin.id);

    Ok((StatusCode::CREATED, Json(food)))
}

/// PUT /api/v1/foods/:id
pub async fn update_food(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(food_id): Path<i64>,
    Json(payload): Json<UpdateFoodRequest>,
) -> Result<Json<Food>> {
    validate_food_input(&payload.name, payload.price, payload.description.as_deref())?;

    let food = sqlx::query_as::<_, Food>(
        "UPDATE foods SET name = ?1, price = ?2, description = ?3 WHERE id = ?4 \
         RETURNING id, name, price, description, creator_id, created_at",
    )
    .bind(&payload.name)
    .bind(payload.price)
    .bind(&payload.description)
    .bind(food_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::FoodNotFound)?;

    tracing::info!("Food {} updated by user {}", food_id, admin.id);

    Ok(Json(food))
}

/// DELETE /api/v1/foods/:id
///
/// Availability links and votes cascade with the row.
pub async fn delete_food(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(food_id): Path<i64>,
) -> Result<Json<DeleteFoodResponse>> {
    let result = sqlx::query("DELETE FROM foods WHERE id = ?1")
        .bind(food_id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::FoodNotFound);
    }

    tracing::info!("Food {} deleted by user {}", food_id, admin.id);

    Ok(Json(DeleteFoodResponse {
        success: true,
        message: "Food, its availability and votes deleted".to_string(),
    }))
}

/// GET /api/v1/foods/:id/votes
pub async fn food_votes(
    State(state): State<AppState>,
    Path(food_id): Path<i64>,
) -> Result<Json<VoteSummary>> {
    // 404 for unknown foods rather than an empty summary
    fetch_food(&state, food_id).await?;
    let summary = vote_summary(&state, food_id).await?;
    Ok(Json(summary))
}

/// Fetch a food row by ID or return FoodNotFound
pub async fn fetch_food(state: &AppState, food_id: i64) -> Result<Food> {
    sqlx::query_as::<_, Food>(
        "SELECT id, name, price, description, creator_id, created_at FROM foods WHERE id = ?1",
    )
    .bind(food_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::FoodNotFound)
}

/// Aggregate vote count and average for a food
pub async fn vote_summary(state: &AppState, food_id: i64) -> Result<VoteSummary> {
    let summary = sqlx::query_as::<_, VoteSummary>(
        "SELECT COUNT(*) AS count, AVG(value) AS average FROM votes WHERE food_id = ?1",
    )
    .bind(food_id)
    .fetch_one(&state.pool)
    .await?;

    Ok(summary)
}
