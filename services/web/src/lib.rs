//! Wordsmith web service
//!
//! Projects, word-count goals and the legacy task list behind a cookie
//! session, answered as JSON view documents.

pub mod config;
pub mod error;
pub mod flash;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod views;

use axum::Router;

pub use crate::config::ServerConfig;
pub use crate::state::AppState;

/// Build the application router over `state`
pub fn build_app(state: AppState) -> Router {
    routes::create_router(state)
}
