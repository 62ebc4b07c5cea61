//! Legacy to-do item, not scoped to any user

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Primary key of the `my_task` table
pub type TaskId = i64;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}
