//! Session cookie middleware
//!
//! Protected routes resolve the `session` cookie to a [`CurrentUser`] placed
//! in the request extensions. Anonymous requests are redirected to `/login`.

use auth::{AuthError, models::UserId};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::{error::AppError, state::AppState};

/// Name of the cookie carrying the raw session token
pub const SESSION_COOKIE: &str = "session";

/// Authenticated user information
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
    pub member_since: DateTime<Utc>,
}

/// Resolve the session cookie, or `None` for anonymous requests
async fn resolve(state: &AppState, jar: &CookieJar) -> Result<Option<CurrentUser>, AppError> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };

    match state.sessions.current_user(cookie.value()).await {
        Ok(user) => Ok(Some(CurrentUser {
            id: user.id,
            username: user.username,
            member_since: user.created_at,
        })),
        Err(AuthError::Unauthenticated) => {
            debug!("Ignoring unknown or expired session cookie");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Require a live session, redirecting anonymous requests to `/login`
pub async fn require_login(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    match resolve(&state, &jar).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Ok(None) => {
            let jar = if jar.get(SESSION_COOKIE).is_some() {
                clear_session_cookie(jar)
            } else {
                jar
            };
            (jar, Redirect::to("/login")).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Send logged-in users away from the login and registration pages
pub async fn redirect_authenticated(
    State(state): State<AppState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    match resolve(&state, &jar).await {
        Ok(Some(_)) => Redirect::to("/home").into_response(),
        Ok(None) => next.run(req).await,
        Err(e) => e.into_response(),
    }
}

/// Store a freshly issued session token on the client
pub fn set_session_cookie(jar: CookieJar, token: String, secure: bool) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure);
    jar.add(cookie)
}

pub fn clear_session_cookie(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/"))
}
