//! Form payloads
//!
//! Every field is a plain string defaulting to empty so a malformed
//! submission turns into field errors instead of a rejected request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{error::FieldErrors, models::NewGoal};

/// Date format of `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskForm {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoalForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub target: String,
}

impl GoalForm {
    /// Parse into a [`NewGoal`], collecting every field error at once
    pub fn parse(&self) -> Result<NewGoal, FieldErrors> {
        let mut errors = FieldErrors::default();

        let start_date = parse_date(&mut errors, "start_date", "Start date", &self.start_date);
        let end_date = parse_date(&mut errors, "end_date", "End date", &self.end_date);
        let target = parse_integer(&mut errors, "target", "Target", &self.target);

        let (Some(start_date), Some(end_date), Some(target)) = (start_date, end_date, target) else {
            // Surface name errors alongside parse errors
            if self.name.trim().is_empty() {
                errors.add("name", "Name is required");
            }
            return Err(errors);
        };

        let goal = NewGoal {
            name: self.name.trim().to_string(),
            start_date,
            end_date,
            target,
        };
        goal.validate()?;
        Ok(goal)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WordsForm {
    #[serde(default)]
    pub goal_id: String,
    #[serde(default)]
    pub words: String,
}

impl WordsForm {
    /// `(goal_id, words)`; the lower bound on words is enforced by the tracker
    pub fn parse(&self) -> Result<(i64, i64), FieldErrors> {
        let mut errors = FieldErrors::default();
        let goal_id = parse_integer(&mut errors, "goal_id", "Goal", &self.goal_id);
        let words = parse_integer(&mut errors, "words", "Words", &self.words);

        match (goal_id, words) {
            (Some(goal_id), Some(words)) => Ok((goal_id, words)),
            _ => Err(errors),
        }
    }
}

/// Login form; only the username is ever echoed back
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    /// Username as it is stored, without surrounding whitespace
    pub fn username(&self) -> &str {
        self.username.trim()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl RegisterForm {
    /// Username as it is stored, without surrounding whitespace
    pub fn username(&self) -> &str {
        self.username.trim()
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if let Err(message) = auth::validation::validate_username(self.username()) {
            errors.add("username", message);
        }
        if let Err(message) = auth::validation::validate_password(&self.password) {
            errors.add("password", message);
        }
        if let Err(message) =
            auth::validation::validate_password_confirmation(&self.password, &self.confirm_password)
        {
            errors.add("confirm_password", message);
        }

        errors.into_result()
    }
}

fn parse_date(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, format!("{} is required", label));
        return None;
    }

    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, format!("{} must be a date (YYYY-MM-DD)", label));
            None
        }
    }
}

fn parse_integer(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, format!("{} is required", label));
        return None;
    }

    match value.parse() {
        Ok(number) => Some(number),
        Err(_) => {
            errors.add(field, format!("{} must be a whole number", label));
            None
        }
    }
}
