//! Legacy task list
//!
//! Tasks are global: every authenticated user sees and edits the same list.
//! Known defect, kept until tasks gain an owner column.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::{
    error::{AppError, AppResult, FieldErrors},
    models::{Task, TaskId, check_text},
};

#[derive(Clone)]
pub struct TaskList {
    pool: SqlitePool,
}

impl TaskList {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn add(&self, content: &str) -> AppResult<TaskId> {
        let content = validate_content(content)?;
        info!("Adding task: {}", content);

        let result = sqlx::query("INSERT INTO my_task (content, completed, created_at) VALUES (?, 0, ?)")
            .bind(content)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get(&self, id: TaskId) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "SELECT id, content, completed, created_at FROM my_task WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(not_found(id))
    }

    pub async fn edit(&self, id: TaskId, content: &str) -> AppResult<()> {
        let content = validate_content(content)?;
        info!("Editing task: {}", id);

        let result = sqlx::query("UPDATE my_task SET content = ? WHERE id = ?")
            .bind(content)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// Flip the completed flag
    pub async fn toggle(&self, id: TaskId) -> AppResult<()> {
        info!("Toggling task: {}", id);

        let result = sqlx::query("UPDATE my_task SET completed = NOT completed WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: TaskId) -> AppResult<()> {
        info!("Deleting task: {}", id);

        let result = sqlx::query("DELETE FROM my_task WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// All tasks, oldest first
    pub async fn list_all(&self) -> AppResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, content, completed, created_at FROM my_task ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }
}

fn validate_content(content: &str) -> Result<&str, FieldErrors> {
    let content = content.trim();
    let mut errors = FieldErrors::default();
    check_text(&mut errors, "content", "Content", content);
    errors.into_result().map(|_| content)
}

fn not_found(id: TaskId) -> AppError {
    AppError::NotFound { entity: "Task", id }
}
