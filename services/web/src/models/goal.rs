//! Goal model: a target word count over a date range, scoped to one project

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::{check_text, project::ProjectId};
use crate::error::FieldErrors;

/// Primary key of the `goal` table
pub type GoalId = i64;

/// Goal entity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub target: i64,
    pub progress: i64,
    pub project_id: ProjectId,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Progress as a percentage of the target
    ///
    /// `None` when the target is zero: there is nothing to be a percentage of.
    /// Progress past the target yields values above 100.
    pub fn percent_complete(&self) -> Option<f64> {
        if self.target == 0 {
            return None;
        }
        Some(self.progress as f64 / self.target as f64 * 100.0)
    }

    /// Words still missing to reach the target, never negative
    pub fn remaining(&self) -> i64 {
        (self.target - self.progress).max(0)
    }

    pub fn is_complete(&self) -> bool {
        self.target > 0 && self.progress >= self.target
    }
}

/// Goal as shown on a project page
#[derive(Debug, Clone, Serialize)]
pub struct GoalView {
    #[serde(flatten)]
    pub goal: Goal,
    pub percent_complete: Option<f64>,
    pub remaining: i64,
}

impl From<Goal> for GoalView {
    fn from(goal: Goal) -> Self {
        Self {
            percent_complete: goal.percent_complete(),
            remaining: goal.remaining(),
            goal,
        }
    }
}

/// Goal joined with the name of its project
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GoalWithProject {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub goal: Goal,
    pub project_name: String,
}

/// Goal creation payload
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub target: i64,
}

impl NewGoal {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        check_text(&mut errors, "name", "Name", &self.name);
        if self.target < 0 {
            errors.add("target", "Target must be zero or more words");
        }
        if self.end_date < self.start_date {
            errors.add("end_date", "End date must not be before the start date");
        }

        errors.into_result()
    }
}
