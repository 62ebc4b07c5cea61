//! Project handlers

use axum::{
    Extension, Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    error::{AppError, AppResult},
    flash,
    forms::ProjectForm,
    middleware::CurrentUser,
    models::{GoalView, ProjectId},
    state::AppState,
    views::View,
};

pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let projects = state.projects.list_for_owner(user.id).await?;
    Ok(View::for_user("projects.html", &user)
        .with("projects", projects)
        .render(jar))
}

pub async fn new_form(
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
) -> impl IntoResponse {
    View::for_user("create_project.html", &user).render(jar)
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
    Form(form): Form<ProjectForm>,
) -> AppResult<Response> {
    match state.projects.create(user.id, &form.name).await {
        Ok(_) => {
            let jar = flash::push(jar, format!("Project '{}' created!", form.name.trim()));
            Ok((jar, Redirect::to("/projects")).into_response())
        }
        Err(AppError::Validation(errors)) => {
            let view = View::for_user("create_project.html", &user)
                .with("form", &form)
                .with_errors(&errors);
            Ok(view.render(jar).into_response())
        }
        Err(e) => Err(e),
    }
}

/// Project page with its goals and their completion
pub async fn show(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<ProjectId>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let project = state.projects.get_for_owner(user.id, id).await?;
    let goals: Vec<GoalView> = state
        .goals
        .list_goals(project.id)
        .await?
        .into_iter()
        .map(GoalView::from)
        .collect();

    Ok(View::for_user("project.html", &user)
        .with("project", project)
        .with("goals", goals)
        .render(jar))
}
