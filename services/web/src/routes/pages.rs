//! Informational and placeholder pages

use axum::{
    Extension,
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;

use crate::{
    error::AppResult,
    middleware::CurrentUser,
    models::{ProjectId, WritingStats},
    state::AppState,
    views::View,
};

pub async fn welcome(jar: CookieJar) -> impl IntoResponse {
    View::new("welcome.html").render(jar)
}

pub async fn about_pre(jar: CookieJar) -> impl IntoResponse {
    View::new("about_pre.html").with("title", "About").render(jar)
}

pub async fn about(Extension(user): Extension<CurrentUser>, jar: CookieJar) -> impl IntoResponse {
    View::for_user("about.html", &user)
        .with("title", "About")
        .render(jar)
}

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let projects = state.projects.list_for_owner(user.id).await?;
    Ok(View::for_user("dashboard.html", &user)
        .with("projects", projects)
        .render(jar))
}

pub async fn profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let project_count = state.projects.count_for_owner(user.id).await?;
    Ok(View::for_user("profile.html", &user)
        .with("project_count", project_count)
        .render(jar))
}

/// Totals over every goal of the caller, recomputed per request
pub async fn stats(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let project_count = state.projects.count_for_owner(user.id).await?;
    let goals = state.goals.goals_for_owner(user.id).await?;
    let stats = WritingStats::compute(project_count, &goals);

    Ok(View::for_user("stats.html", &user)
        .with("stats", stats)
        .with("goals", goals)
        .render(jar))
}

async fn project_page(
    template: &'static str,
    state: &AppState,
    user: &CurrentUser,
    id: ProjectId,
    jar: CookieJar,
) -> AppResult<impl IntoResponse + use<>> {
    let project = state.projects.get_for_owner(user.id, id).await?;
    Ok(View::for_user(template, user)
        .with("project", project)
        .render(jar))
}

pub async fn plot(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<ProjectId>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    project_page("plot.html", &state, &user, id, jar).await
}

pub async fn worldbuilding(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<ProjectId>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    project_page("worldbuilding.html", &state, &user, id, jar).await
}

pub async fn characters(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<ProjectId>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    project_page("characters.html", &state, &user, id, jar).await
}
