pub mod pool;

pub use pool::create_pool;

/// Database handle type shared across handlers
pub type Db = sqlx::SqlitePool;
