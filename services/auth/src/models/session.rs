//! Session model and related functionality

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::user::UserId;

/// Freshly issued session; `token` is the only copy of the raw secret
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

/// Session row as persisted in the `session` table
#[derive(Debug, Clone, FromRow)]
pub struct SessionRecord {
    pub token_hash: String,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Whether the session is past its expiry at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
