//! Goal creation and word-count progress

use axum::{
    Extension, Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use tracing::info;

use crate::{
    error::{AppError, AppResult, FieldErrors},
    flash,
    forms::{GoalForm, WordsForm},
    middleware::CurrentUser,
    models::{Project, ProjectId},
    state::AppState,
    views::View,
};

fn goal_view(user: &CurrentUser, project: Project) -> View {
    View::for_user("add_goal.html", user).with("project", project)
}

pub async fn new_form(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(project_id): Path<ProjectId>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let project = state.projects.get_for_owner(user.id, project_id).await?;
    Ok(goal_view(&user, project).render(jar))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(project_id): Path<ProjectId>,
    jar: CookieJar,
    Form(form): Form<GoalForm>,
) -> AppResult<Response> {
    // Ownership is settled before the form is looked at
    let project = state.projects.get_for_owner(user.id, project_id).await?;

    let result = match form.parse() {
        Ok(new_goal) => state.goals.add_goal(user.id, project.id, &new_goal).await,
        Err(errors) => Err(errors.into()),
    };

    match result {
        Ok(goal_id) => {
            info!("Goal {} added to project {}", goal_id, project.id);
            let jar = flash::push(jar, format!("Goal '{}' added!", form.name.trim()));
            Ok((jar, Redirect::to(&format!("/project/{}", project.id))).into_response())
        }
        Err(AppError::Validation(errors)) => {
            let view = goal_view(&user, project)
                .with("form", &form)
                .with_errors(&errors);
            Ok(view.render(jar).into_response())
        }
        Err(e) => Err(e),
    }
}

async fn words_view(state: &AppState, user: &CurrentUser) -> AppResult<View> {
    let goals = state.goals.goals_for_owner(user.id).await?;
    Ok(View::for_user("add_words.html", user).with("goals", goals))
}

pub async fn words_form(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    Ok(words_view(&state, &user).await?.render(jar))
}

pub async fn add_words(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
    Form(form): Form<WordsForm>,
) -> AppResult<Response> {
    let result = match form.parse() {
        Ok((goal_id, words)) => state.goals.record_progress(user.id, goal_id, words).await,
        Err(errors) => Err(errors.into()),
    };

    match result {
        Ok(goal) => {
            let message = match goal.percent_complete() {
                Some(percent) => format!(
                    "{} words added to '{}' ({:.0}% of target).",
                    form.words.trim(),
                    goal.name,
                    percent
                ),
                None => format!("{} words added to '{}'.", form.words.trim(), goal.name),
            };
            let jar = flash::push(jar, message);
            Ok((jar, Redirect::to(&format!("/project/{}", goal.project_id))).into_response())
        }
        Err(AppError::Validation(errors)) => invalid_words(&state, &user, jar, &form, &errors).await,
        Err(e) => Err(e),
    }
}

async fn invalid_words(
    state: &AppState,
    user: &CurrentUser,
    jar: CookieJar,
    form: &WordsForm,
    errors: &FieldErrors,
) -> AppResult<Response> {
    let view = words_view(state, user)
        .await?
        .with("form", form)
        .with_errors(errors);
    Ok(view.render(jar).into_response())
}
