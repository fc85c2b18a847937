pub mod auth;
pub mod availability;
pub mod days;
pub mod foods;
pub mod health;
pub mod users;
pub mod votes;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Build the full application router with CORS and request tracing
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .allowed_origins
                .iter()
                .filter_map(|s| s.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/users", post(users::create_user))
        .route(
            "/api/v1/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::me))
        .route(
            "/api/v1/foods",
            get(foods::list_foods).post(foods::create_food),
        )
        .route(
            "/api/v1/foods/:id",
            get(foods::get_food)
                .put(foods::update_food)
                .delete(foods::delete_food),
        )
        .route("/api/v1/foods/:id/votes", get(foods::food_votes))
        .route("/api/v1/days", get(days::list_days).post(days::create_day))
        .route(
            "/api/v1/days/:id",
            get(days::get_day).put(days::update_day).delete(days::delete_day),
        )
        .route(
            "/api/v1/availability",
            post(availability::create_availability),
        )
        .route(
            "/api/v1/availability/:id",
            get(availability::get_availability)
                .put(availability::update_availability)
                .delete(availability::delete_availability),
        )
        .route("/api/v1/votes", post(votes::create_vote))
        .route(
            "/api/v1/votes/:id",
            get(votes::get_vote).delete(votes::delete_vote),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
