/// Minimum accepted rating value
pub const MIN_VOTE_VALUE: i64 = 1;

/// Maximum accepted rating value
pub const MAX_VOTE_VALUE: i64 = 5;

/// Username length bounds
pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 32;

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum length for a food or day name
pub const MAX_NAME_LEN: usize = 120;

/// Maximum length for a food description
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Default bearer token lifetime (24 hours)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 86_400;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a rating outside the accepted range
pub const ERR_VOTE_VALUE_RANGE: &str = "Vote value must be between 1 and 5";

/// Error message for an invalid username
pub const ERR_INVALID_USERNAME: &str =
    "Username must be 3-32 characters of letters, digits, '_' or '-'";

/// Error message for an invalid email address
pub const ERR_INVALID_EMAIL: &str = "Invalid email address";

/// Error message for a too-short password
pub const ERR_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
