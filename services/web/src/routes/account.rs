//! Registration, login and logout

use auth::AuthError;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use serde_json::json;
use tracing::{info, warn};

use crate::{
    error::{AppResult, FieldErrors},
    flash,
    forms::{LoginForm, RegisterForm},
    middleware::{SESSION_COOKIE, clear_session_cookie, set_session_cookie},
    state::AppState,
    views::View,
};

pub async fn login_form(jar: CookieJar) -> impl IntoResponse {
    View::new("login.html").render(jar)
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let mut errors = FieldErrors::default();
    if form.username().is_empty() {
        errors.add("username", "Username is required");
    }
    if form.password.is_empty() {
        errors.add("password", "Password is required");
    }
    if !errors.is_empty() {
        let view = View::new("login.html")
            .with("form", json!({ "username": form.username() }))
            .with_errors(&errors);
        return Ok(view.render(jar).into_response());
    }

    if !state.rate_limiter.is_allowed(form.username()).await {
        warn!("Login refused, rate limited: {}", form.username());
        return Err(AuthError::RateLimited.into());
    }

    let user_id = match state.credentials.verify(form.username(), &form.password).await {
        Ok(user_id) => user_id,
        Err(AuthError::InvalidCredentials) => {
            state.rate_limiter.record_failure(form.username()).await;
            return Err(AuthError::InvalidCredentials.into());
        }
        Err(e) => return Err(e.into()),
    };

    state.rate_limiter.reset(form.username()).await;
    let session = state.sessions.login(user_id).await?;
    info!("User logged in: {}", user_id);

    let jar = set_session_cookie(jar, session.token, state.config.secure_cookies);
    let jar = flash::push(jar, format!("Welcome back, {}!", form.username()));
    Ok((jar, Redirect::to("/home")).into_response())
}

pub async fn register_form(jar: CookieJar) -> impl IntoResponse {
    View::new("register.html").render(jar)
}

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        return Ok(invalid_registration(jar, &form, &errors));
    }

    match state.credentials.register(form.username(), &form.password).await {
        Ok(user_id) => {
            info!("Registered user {} as {}", form.username(), user_id);
            let jar = flash::push(
                jar,
                format!("Account created for {}! You can now log in.", form.username()),
            );
            Ok((jar, Redirect::to("/login")).into_response())
        }
        Err(AuthError::DuplicateUsername(_)) => {
            let errors = FieldErrors::single(
                "username",
                "That username is taken. Please choose a different one.",
            );
            Ok(invalid_registration(jar, &form, &errors))
        }
        Err(e) => Err(e.into()),
    }
}

// Passwords are never echoed back
fn invalid_registration(jar: CookieJar, form: &RegisterForm, errors: &FieldErrors) -> Response {
    View::new("register.html")
        .with("form", json!({ "username": form.username() }))
        .with_errors(errors)
        .render(jar)
        .into_response()
}

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> AppResult<impl IntoResponse> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.logout(cookie.value()).await?;
    }

    let jar = clear_session_cookie(jar);
    let jar = flash::push(jar, "You have been logged out.");
    Ok((jar, Redirect::to("/login")))
}
