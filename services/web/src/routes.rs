//! Web service routes

mod account;
mod goals;
mod pages;
mod projects;
mod tasks;

use axum::{Json, Router, extract::State, middleware, response::IntoResponse, routing::get};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{redirect_authenticated, require_login},
    state::AppState,
};

/// Create the router for the web service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/", get(tasks::index).post(tasks::create))
        .route("/home", get(tasks::index).post(tasks::create))
        .route("/delete/:id", get(tasks::delete))
        .route("/edit/:id", get(tasks::edit_form).post(tasks::edit))
        .route("/toggle/:id", get(tasks::toggle))
        .route("/projects", get(projects::list))
        .route(
            "/create_project",
            get(projects::new_form).post(projects::create),
        )
        .route("/project/:id", get(projects::show))
        .route(
            "/add_goal/:project_id",
            get(goals::new_form).post(goals::create),
        )
        .route("/add_words", get(goals::words_form).post(goals::add_words))
        .route("/plot/:id", get(pages::plot).post(pages::plot))
        .route(
            "/worldbuilding/:id",
            get(pages::worldbuilding).post(pages::worldbuilding),
        )
        .route(
            "/characters/:id",
            get(pages::characters).post(pages::characters),
        )
        .route("/dashboard", get(pages::dashboard))
        .route("/profile", get(pages::profile))
        .route("/about", get(pages::about))
        .route("/stats", get(pages::stats))
        .route("/logout", get(account::logout).post(account::logout))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_login));

    let guest_routes = Router::new()
        .route("/login", get(account::login_form).post(account::login))
        .route(
            "/register",
            get(account::register_form).post(account::register),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            redirect_authenticated,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/welcome", get(pages::welcome))
        .route("/about_pre", get(pages::about_pre))
        .merge(protected_routes)
        .merge(guest_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = common::database::health_check(&state.db_pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Health check failed: {}", e);
            false
        });

    Json(json!({
        "status": "ok",
        "service": "wordsmith",
        "database": database
    }))
}
