//! View selection
//!
//! Handlers pick a template and build its context; the response is the JSON
//! document a renderer turns into HTML.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{error::FieldErrors, flash, middleware::CurrentUser};

/// A template name plus the context it is rendered with
#[derive(Debug, Clone)]
pub struct View {
    template: &'static str,
    status: StatusCode,
    context: Map<String, Value>,
}

impl View {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            status: StatusCode::OK,
            context: Map::new(),
        }
    }

    /// View rendered for a logged-in user
    pub fn for_user(template: &'static str, user: &CurrentUser) -> Self {
        Self::new(template).with("current_user", user)
    }

    /// Add a context entry
    pub fn with(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or_else(|e| {
            tracing::error!("Failed to serialize view context '{}': {}", key, e);
            Value::Null
        });
        self.context.insert(key.to_string(), value);
        self
    }

    /// Re-render a form with field-level messages
    pub fn with_errors(mut self, errors: &FieldErrors) -> Self {
        self.status = StatusCode::UNPROCESSABLE_ENTITY;
        self.with("errors", errors)
    }

    /// Attach pending flash messages, clearing them from the client
    pub fn render(self, jar: CookieJar) -> (CookieJar, Self) {
        let (jar, messages) = flash::take(jar);
        (jar, self.with("flashes", messages))
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        let mut body = self.context;
        body.insert("view".to_string(), Value::from(self.template));
        (self.status, Json(Value::Object(body))).into_response()
    }
}
