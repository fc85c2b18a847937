//! Mess Menu Server Library
//!
//! REST backend for a cafeteria's daily food menu: foods, day-wise
//! availability, user accounts, bearer-token authentication and a
//! one-vote-per-user rating system.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod security;

pub use config::Config;
pub use db::{create_pool, Db};
pub use error::{AppError, Result};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: Db,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given pool and configuration
    pub fn new(pool: Db, config: Config) -> Self {
        Self { pool, config }
    }
}
