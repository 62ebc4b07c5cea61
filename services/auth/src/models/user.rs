//! User model and related functionality

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Primary key of the `user` table
pub type UserId = i64;

/// User entity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
