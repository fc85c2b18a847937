use serde::{Deserialize, Serialize};

/// Link row scheduling a food on a day.
/// `UNIQUE(food_id, day_id)` in the schema keeps the pair unique.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FoodAvailability {
    pub id: i64,
    pub food_id: i64,
    pub day_id: i64,
}
