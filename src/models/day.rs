use serde::{Deserialize, Serialize};

use crate::constants::MAX_NAME_LEN;
use crate::error::{AppError, Result};

/// Day row: a named slot foods can be scheduled on.
/// The seven weekdays are seeded by migration.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Day {
    pub id: i64,
    pub name: String,
}

/// Validate a day name
pub fn validate_day_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::InvalidInput(format!(
            "Day name must be 1-{} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_day_name() {
        assert!(validate_day_name("Monday").is_ok());
        assert!(validate_day_name("Holiday").is_ok());
        assert!(validate_day_name("").is_err());
        assert!(validate_day_name("   ").is_err());
        assert!(validate_day_name(&"d".repeat(121)).is_err());
    }
}
