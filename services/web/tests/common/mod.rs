//! Shared helpers for the web integration tests
//!
//! Each test gets its own in-memory database and drives the real router with
//! `oneshot`, carrying cookies between requests like a browser would.

#![allow(dead_code)]

use std::collections::BTreeMap;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{
        Request, StatusCode,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    },
    response::Response,
};
use common::database::{DatabaseConfig, connect};
use serde_json::Value;
use tower::ServiceExt;
use web::{AppState, ServerConfig, build_app};

pub async fn test_app() -> Router {
    let pool = connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    build_app(AppState::new(pool, ServerConfig::default()))
}

/// Cookie-carrying client over one application instance
pub struct TestClient {
    app: Router,
    cookies: BTreeMap<String, String>,
}

impl TestClient {
    pub async fn new() -> Self {
        Self::with_app(test_app().await)
    }

    pub fn with_app(app: Router) -> Self {
        Self {
            app,
            cookies: BTreeMap::new(),
        }
    }

    /// A second browser against the same application and database
    pub fn fork(&self) -> Self {
        Self::with_app(self.app.clone())
    }

    pub fn set_cookie(&mut self, name: &str, value: &str) {
        self.cookies.insert(name.to_string(), value.to_string());
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    pub async fn get(&mut self, uri: &str) -> Response {
        let request = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> Response {
        let request = self
            .request("POST", uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(fields)))
            .unwrap();
        self.send(request).await
    }

    /// GET a page and return its view document
    pub async fn view(&mut self, uri: &str) -> Value {
        let response = self.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        body_json(response).await
    }

    pub async fn register(&mut self, username: &str, password: &str) -> Response {
        self.post_form(
            "/register",
            &[
                ("username", username),
                ("password", password),
                ("confirm_password", password),
            ],
        )
        .await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Response {
        self.post_form("/login", &[("username", username), ("password", password)])
            .await
    }

    pub async fn register_and_login(&mut self, username: &str, password: &str) {
        let response = self.register(username, password).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let response = self.login(username, password).await;
        assert_eq!(location(&response), "/home");
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(uri);
        if !self.cookies.is_empty() {
            let header = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; ");
            builder = builder.header(COOKIE, header);
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> Response {
        let response = self.app.clone().oneshot(request).await.unwrap();

        for header in response.headers().get_all(SET_COOKIE) {
            let header = header.to_str().unwrap();
            let pair = header.split(';').next().unwrap_or_default();
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            if value.is_empty() {
                self.cookies.remove(name.trim());
            } else {
                self.cookies.insert(name.trim().to_string(), value.to_string());
            }
        }

        response
    }
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}={}", percent_encode(name), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn percent_encode(value: &str) -> String {
    value
        .bytes()
        .map(|byte| match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (byte as char).to_string()
            }
            b' ' => "+".to_string(),
            other => format!("%{:02X}", other),
        })
        .collect()
}
