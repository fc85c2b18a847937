use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ERR_VOTE_VALUE_RANGE, MAX_VOTE_VALUE, MIN_VOTE_VALUE};
use crate::error::{AppError, Result};

/// Vote row: one rating per user per food, enforced by the schema.
/// Re-voting overwrites the previous value.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Vote {
    pub id: i64,
    pub user_id: i64,
    pub food_id: i64,
    pub value: i64,
    pub created_at: DateTime<Utc>,
}

/// Aggregated rating for a food: vote count and average value.
/// `average` is null when nobody has voted yet.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct VoteSummary {
    pub count: i64,
    pub average: Option<f64>,
}

/// Validate a vote value is within the accepted rating range
pub fn validate_vote_value(value: i64) -> Result<()> {
    if !(MIN_VOTE_VALUE..=MAX_VOTE_VALUE).contains(&value) {
        return Err(AppError::InvalidInput(ERR_VOTE_VALUE_RANGE.to_string()));
    }
    Ok(())
}
