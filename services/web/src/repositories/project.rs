//! Project registry: projects per user, visible only to their owner

use auth::models::UserId;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::{
    error::{AppError, AppResult, FieldErrors},
    models::{Project, ProjectId, check_text},
};

#[derive(Clone)]
pub struct ProjectRegistry {
    pool: SqlitePool,
}

impl ProjectRegistry {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a project owned by `owner_id`
    pub async fn create(&self, owner_id: UserId, name: &str) -> AppResult<ProjectId> {
        let name = name.trim();
        let mut errors = FieldErrors::default();
        check_text(&mut errors, "name", "Name", name);
        errors.into_result()?;

        info!("Creating project '{}' for user: {}", name, owner_id);

        let result = sqlx::query(
            r#"
            INSERT INTO project (name, created_at, owner_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(Utc::now())
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Projects of `owner_id`, oldest first
    pub async fn list_for_owner(&self, owner_id: UserId) -> AppResult<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, created_at, owner_id
            FROM project
            WHERE owner_id = ?
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    /// Fetch a project on behalf of `owner_id`
    ///
    /// `NotFound` when no project has this id, `Forbidden` when it belongs to
    /// someone else. Every project-scoped operation goes through here.
    pub async fn get_for_owner(&self, owner_id: UserId, project_id: ProjectId) -> AppResult<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, created_at, owner_id
            FROM project
            WHERE id = ?
            "#,
        )
        .bind(project_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound {
            entity: "Project",
            id: project_id,
        })?;

        if !project.is_owned_by(owner_id) {
            warn!(
                "User {} denied access to project {} owned by {}",
                owner_id, project_id, project.owner_id
            );
            return Err(AppError::Forbidden);
        }

        Ok(project)
    }

    pub async fn count_for_owner(&self, owner_id: UserId) -> AppResult<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM project WHERE owner_id = ?")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as usize)
    }
}
