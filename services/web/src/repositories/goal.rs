//! Goal tracker: word-count goals attached to projects

use auth::models::UserId;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, warn};

use super::project::ProjectRegistry;
use crate::{
    error::{AppError, AppResult, FieldErrors},
    models::{Goal, GoalId, GoalWithProject, NewGoal, ProjectId},
};

const GOAL_COLUMNS: &str = "g.id AS id, g.name AS name, g.start_date AS start_date, \
    g.end_date AS end_date, g.target AS target, g.progress AS progress, \
    g.project_id AS project_id, g.created_at AS created_at";

#[derive(Clone)]
pub struct GoalTracker {
    pool: SqlitePool,
    projects: ProjectRegistry,
}

impl GoalTracker {
    pub fn new(pool: SqlitePool, projects: ProjectRegistry) -> Self {
        Self { pool, projects }
    }

    /// Attach a goal to a project owned by `owner_id`
    pub async fn add_goal(
        &self,
        owner_id: UserId,
        project_id: ProjectId,
        new_goal: &NewGoal,
    ) -> AppResult<GoalId> {
        self.projects.get_for_owner(owner_id, project_id).await?;
        new_goal.validate()?;

        info!(
            "Adding goal '{}' (target {}) to project: {}",
            new_goal.name, new_goal.target, project_id
        );

        let result = sqlx::query(
            r#"
            INSERT INTO goal (name, start_date, end_date, target, progress, project_id, created_at)
            VALUES (?, ?, ?, ?, 0, ?, ?)
            "#,
        )
        .bind(new_goal.name.trim())
        .bind(new_goal.start_date)
        .bind(new_goal.end_date)
        .bind(new_goal.target)
        .bind(project_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Goals of a project in creation order
    ///
    /// No owner check here: callers resolve the project through
    /// [`ProjectRegistry::get_for_owner`] first.
    pub async fn list_goals(&self, project_id: ProjectId) -> AppResult<Vec<Goal>> {
        let goals = sqlx::query_as::<_, Goal>(&format!(
            "SELECT {GOAL_COLUMNS} FROM goal g WHERE g.project_id = ? ORDER BY g.created_at ASC, g.id ASC"
        ))
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(goals)
    }

    /// Every goal across the projects of `owner_id`
    pub async fn goals_for_owner(&self, owner_id: UserId) -> AppResult<Vec<GoalWithProject>> {
        let goals = sqlx::query_as::<_, GoalWithProject>(&format!(
            r#"
            SELECT {GOAL_COLUMNS}, p.name AS project_name
            FROM goal g
            JOIN project p ON p.id = g.project_id
            WHERE p.owner_id = ?
            ORDER BY p.created_at ASC, p.id ASC, g.created_at ASC, g.id ASC
            "#
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(goals)
    }

    /// Add `delta` written words to a goal the caller owns
    ///
    /// Progress may run past the target. The increment is a single `UPDATE`,
    /// so concurrent additions never overwrite each other.
    pub async fn record_progress(
        &self,
        owner_id: UserId,
        goal_id: GoalId,
        delta: i64,
    ) -> AppResult<Goal> {
        if delta < 1 {
            return Err(FieldErrors::single("words", "Words must be at least 1").into());
        }

        let owner: UserId = sqlx::query_scalar(
            r#"
            SELECT p.owner_id
            FROM goal g
            JOIN project p ON p.id = g.project_id
            WHERE g.id = ?
            "#,
        )
        .bind(goal_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound {
            entity: "Goal",
            id: goal_id,
        })?;

        if owner != owner_id {
            warn!(
                "User {} denied progress on goal {} owned by {}",
                owner_id, goal_id, owner
            );
            return Err(AppError::Forbidden);
        }

        // The progress guard keeps the sum inside i64
        let goal = sqlx::query_as::<_, Goal>(
            r#"
            UPDATE goal
            SET progress = progress + ?
            WHERE id = ? AND progress <= ?
            RETURNING id, name, start_date, end_date, target, progress, project_id, created_at
            "#,
        )
        .bind(delta)
        .bind(goal_id)
        .bind(i64::MAX - delta)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| FieldErrors::single("words", "That is too many words"))?;

        info!(
            "Recorded {} words on goal {} ({} / {})",
            delta, goal_id, goal.progress, goal.target
        );

        Ok(goal)
    }
}
