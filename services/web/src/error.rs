//! Custom error types for the web service

use std::collections::BTreeMap;

use auth::AuthError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::flash;

/// Message shown instead of any internal failure detail
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Field-level validation messages, keyed by form field
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when no message was recorded
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }
}

/// Custom error type for the web service
#[derive(Error, Debug)]
pub enum AppError {
    /// Form or field constraints failed
    #[error("Validation failed")]
    Validation(FieldErrors),

    /// Referenced row does not exist
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Authenticated, but not the owner of the resource
    #[error("Forbidden")]
    Forbidden,

    /// Credential or session failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "errors": errors })))
                    .into_response()
            }
            AppError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{} {} not found", entity, id) })),
            )
                .into_response(),
            AppError::Forbidden => {
                let jar = flash::push(CookieJar::new(), "You do not have access to that project.");
                (jar, Redirect::to("/projects")).into_response()
            }
            AppError::Auth(AuthError::Unauthenticated) => Redirect::to("/login").into_response(),
            AppError::Auth(AuthError::InvalidCredentials) => {
                let jar = flash::push(
                    CookieJar::new(),
                    "Login unsuccessful. Please check username and password.",
                );
                (jar, Redirect::to("/login")).into_response()
            }
            AppError::Auth(AuthError::RateLimited) => {
                let jar = flash::push(
                    CookieJar::new(),
                    "Too many failed login attempts. Please try again later.",
                );
                (jar, Redirect::to("/login")).into_response()
            }
            other => {
                tracing::error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": GENERIC_ERROR_MESSAGE })),
                )
                    .into_response()
            }
        }
    }
}

/// Type alias for handler results
pub type AppResult<T> = Result<T, AppError>;
