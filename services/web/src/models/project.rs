//! Project model

use auth::models::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Primary key of the `project` table
pub type ProjectId = i64;

/// A user-owned writing effort
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub owner_id: UserId,
}

impl Project {
    /// Owner check
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}
