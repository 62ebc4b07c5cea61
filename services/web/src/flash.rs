//! One-shot flash messages carried to the next rendered view in a cookie
//!
//! The cookie holds a hex-encoded JSON array so arbitrary message text
//! survives cookie value rules.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const FLASH_COOKIE: &str = "flash";

/// Queue `message` behind any flash already pending in `jar`
pub fn push(jar: CookieJar, message: impl Into<String>) -> CookieJar {
    let mut messages = pending(&jar);
    messages.push(message.into());

    let cookie = Cookie::build((FLASH_COOKIE, encode(&messages)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

/// Drain pending messages, clearing the cookie
pub fn take(jar: CookieJar) -> (CookieJar, Vec<String>) {
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, Vec::new());
    }

    let messages = pending(&jar);
    let jar = jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/"));
    (jar, messages)
}

fn pending(jar: &CookieJar) -> Vec<String> {
    jar.get(FLASH_COOKIE)
        .map(|cookie| decode(cookie.value()))
        .unwrap_or_default()
}

fn encode(messages: &[String]) -> String {
    serde_json::to_vec(messages)
        .map(hex::encode)
        .unwrap_or_default()
}

// Tampered or stale values decode to nothing
fn decode(value: &str) -> Vec<String> {
    hex::decode(value)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}
