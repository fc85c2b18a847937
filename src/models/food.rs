use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use crate::error::{AppError, Result};

/// Food row as stored in the database
///
/// `creator_id` is nullable: deleting a user keeps their foods on the
/// menu with the creator cleared.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub creator_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Validate food fields shared by create and update
pub fn validate_food_input(name: &str, price: f64, description: Option<&str>) -> Result<()> {
    if name.trim().is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::InvalidInput(format!(
            "Food name must be 1-{} characters",
            MAX_NAME_LEN
        )));
    }

    if !price.is_finite() || price < 0.0 {
        return Err(AppError::InvalidInput(
            "Price must be a non-negative number".to_string(),
        ));
    }

    if let Some(desc) = description {
        if desc.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(AppError::InvalidInput(format!(
                "Description must be at most {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }
    }

    Ok(())
}
