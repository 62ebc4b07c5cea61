//! Error types for credential and session operations

use thiserror::Error;

/// Errors raised by the credential store and the session provider
#[derive(Error, Debug)]
pub enum AuthError {
    /// Registration conflict on an existing username
    #[error("Username '{0}' is already taken")]
    DuplicateUsername(String),

    /// Unknown username or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No live session behind the presented token
    #[error("Not authenticated")]
    Unauthenticated,

    /// Too many failed logins for this username
    #[error("Too many failed login attempts")]
    RateLimited,

    /// Argon2 failed to hash or parse a password hash
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// Error from the underlying store
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Type alias for Result with AuthError
pub type AuthResult<T> = Result<T, AuthError>;

impl From<argon2::password_hash::Error> for AuthError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AuthError::PasswordHash(err.to_string())
    }
}
