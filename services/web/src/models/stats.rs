//! Per-request aggregation of a writer's goals

use serde::Serialize;

use super::goal::GoalWithProject;

/// Totals across every goal of every project a user owns
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritingStats {
    pub projects: usize,
    pub goals: usize,
    pub goals_completed: usize,
    pub words_written: i64,
    pub words_targeted: i64,
    pub percent_complete: Option<f64>,
}

impl WritingStats {
    pub fn compute(project_count: usize, goals: &[GoalWithProject]) -> Self {
        let words_written = goals
            .iter()
            .fold(0i64, |acc, g| acc.saturating_add(g.goal.progress));
        let words_targeted = goals
            .iter()
            .fold(0i64, |acc, g| acc.saturating_add(g.goal.target));

        let percent_complete = (words_targeted > 0)
            .then(|| words_written as f64 / words_targeted as f64 * 100.0);

        Self {
            projects: project_count,
            goals: goals.len(),
            goals_completed: goals.iter().filter(|g| g.goal.is_complete()).count(),
            words_written,
            words_targeted,
            percent_complete,
        }
    }
}
