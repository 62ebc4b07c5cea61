//! Authentication library for the Wordsmith application
//!
//! Owns the credential store (accounts and hashed passwords), the session
//! provider mapping cookie tokens to users, and the login rate limiter.

pub mod error;
pub mod models;
pub mod password;
pub mod rate_limiter;
pub mod repositories;
pub mod session;
pub mod validation;

pub use error::{AuthError, AuthResult};
pub use rate_limiter::{RateLimiter, RateLimiterConfig};
pub use repositories::CredentialStore;
pub use session::SessionManager;
