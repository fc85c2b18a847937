use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hash error: {0}")]
    PasswordHash(argon2::password_hash::Error),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("User not found")]
    UserNotFound,

    #[error("Food not found")]
    FoodNotFound,

    #[error("Day not found")]
    DayNotFound,

    #[error("Availability entry not found")]
    AvailabilityNotFound,

    #[error("Vote not found")]
    VoteNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing or invalid bearer token")]
    Unauthorized,

    #[error("Insufficient permissions")]
    Forbidden,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::PasswordHash(err)
    }
}

/// Check whether a sqlx error is a UNIQUE constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation()
    )
}

/// Check whether a sqlx error is a FOREIGN KEY constraint violation
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation()
    )
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::PasswordHash(ref e) => {
                tracing::error!("Password hash error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Token(ref e) => {
                tracing::warn!("Token error: {:?}", e);
                (StatusCode::UNAUTHORIZED, "Missing or invalid bearer token")
            }
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "User not found"),
            AppError::FoodNotFound => (StatusCode::NOT_FOUND, "Food not found"),
            AppError::DayNotFound => (StatusCode::NOT_FOUND, "Day not found"),
            AppError::AvailabilityNotFound => {
                (StatusCode::NOT_FOUND, "Availability entry not found")
            }
            AppError::VoteNotFound => (StatusCode::NOT_FOUND, "Vote not found"),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Missing or invalid bearer token")
            }
            AppError::Forbidden => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            AppError::InvalidInput(ref msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, msg.as_str()),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
