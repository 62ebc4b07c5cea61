//! Legacy task list handlers
//!
//! Tasks are global: every logged-in user sees and edits the same list.

use axum::{
    Extension, Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    forms::TaskForm,
    middleware::CurrentUser,
    models::TaskId,
    state::AppState,
    views::View,
};

/// Home page view: all tasks plus the caller's projects
async fn home_view(state: &AppState, user: &CurrentUser) -> AppResult<View> {
    let tasks = state.tasks.list_all().await?;
    let projects = state.projects.list_for_owner(user.id).await?;

    Ok(View::for_user("index.html", user)
        .with("tasks", tasks)
        .with("projects", projects))
}

pub async fn index(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    Ok(home_view(&state, &user).await?.render(jar))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
    Form(form): Form<TaskForm>,
) -> AppResult<Response> {
    match state.tasks.add(&form.content).await {
        Ok(id) => {
            info!("User {} added task {}", user.id, id);
            Ok(Redirect::to("/").into_response())
        }
        Err(AppError::Validation(errors)) => {
            let view = home_view(&state, &user)
                .await?
                .with("form", &form)
                .with_errors(&errors);
            Ok(view.render(jar).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<TaskId>) -> AppResult<Redirect> {
    state.tasks.delete(id).await?;
    Ok(Redirect::to("/"))
}

pub async fn toggle(State(state): State<AppState>, Path(id): Path<TaskId>) -> AppResult<Redirect> {
    state.tasks.toggle(id).await?;
    Ok(Redirect::to("/"))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<TaskId>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let task = state.tasks.get(id).await?;
    Ok(View::for_user("update.html", &user)
        .with("task", task)
        .render(jar))
}

pub async fn edit(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<TaskId>,
    jar: CookieJar,
    Form(form): Form<TaskForm>,
) -> AppResult<Response> {
    match state.tasks.edit(id, &form.content).await {
        Ok(()) => Ok(Redirect::to("/").into_response()),
        Err(AppError::Validation(errors)) => {
            let task = state.tasks.get(id).await?;
            let view = View::for_user("update.html", &user)
                .with("task", task)
                .with("form", &form)
                .with_errors(&errors);
            Ok(view.render(jar).into_response())
        }
        Err(e) => Err(e),
    }
}
