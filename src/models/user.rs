use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    ERR_INVALID_EMAIL, ERR_INVALID_USERNAME, ERR_PASSWORD_TOO_SHORT, MAX_USERNAME_LEN,
    MIN_PASSWORD_LEN, MIN_USERNAME_LEN,
};
use crate::error::{AppError, Result};

/// Role granted to every registered account
pub const ROLE_USER: &str = "user";

/// Role allowed to manage foods, days and availability
pub const ROLE_ADMIN: &str = "admin";

/// User row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Public view of a user, safe to serialize in API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Validate a username: 3-32 chars, letters/digits/underscore/hyphen
pub fn validate_username(username: &str) -> Result<()> {
    let len = username.chars().count();
    if len < MIN_USERNAME_LEN
        || len > MAX_USERNAME_LEN
        || !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::InvalidInput(ERR_INVALID_USERNAME.to_string()));
    }
    Ok(())
}

/// Validate an email address shape: one '@' with a dotted domain.
/// Deliverability is not checked; the unique index catches duplicates.
pub fn validate_email(email: &str) -> Result<()> {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.is_empty();

    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidInput(ERR_INVALID_EMAIL.to_string()));
    }
    Ok(())
}

/// Validate a password meets the minimum length
pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::InvalidInput(ERR_PASSWORD_TOO_SHORT.to_string()));
    }
    Ok(())
}
