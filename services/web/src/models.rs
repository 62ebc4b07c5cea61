//! Domain models for projects, goals and the legacy task list

use crate::error::FieldErrors;

pub mod goal;
pub mod project;
pub mod stats;
pub mod task;

pub use goal::{Goal, GoalId, GoalView, GoalWithProject, NewGoal};
pub use project::{Project, ProjectId};
pub use stats::WritingStats;
pub use task::{Task, TaskId};

/// Longest accepted project name, goal name or task content, in characters
pub const TEXT_MAX_LEN: usize = 100;

/// Check a required free-text field of at most [`TEXT_MAX_LEN`] characters
pub fn check_text(errors: &mut FieldErrors, field: &'static str, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{} is required", label));
    } else if value.chars().count() > TEXT_MAX_LEN {
        errors.add(
            field,
            format!("{} must be at most {} characters long", label, TEXT_MAX_LEN),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_text_bounds() {
        let mut errors = FieldErrors::default();
        check_text(&mut errors, "name", "Name", "Novel A");
        check_text(&mut errors, "name", "Name", &"x".repeat(100));
        assert!(errors.is_empty());

        check_text(&mut errors, "name", "Name", "");
        check_text(&mut errors, "content", "Content", &"x".repeat(101));
        assert_eq!(errors.get("name"), Some(&vec!["Name is required".to_string()]));
        assert_eq!(
            errors.get("content"),
            Some(&vec!["Content must be at most 100 characters long".to_string()])
        );
    }
}
