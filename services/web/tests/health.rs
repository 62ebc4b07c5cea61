//! Integration tests for the health check and public pages

mod common;

use axum::http::StatusCode;
use common::{TestClient, body_json, location};

#[tokio::test]
async fn health_check_reports_database() {
    let mut client = TestClient::new().await;
    let response = client.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "wordsmith");
    assert_eq!(json["database"], true);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let mut client = TestClient::new().await;
    let response = client.get("/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn public_pages_render_without_session() {
    let mut client = TestClient::new().await;

    let welcome = client.view("/welcome").await;
    assert_eq!(welcome["view"], "welcome.html");
    assert_eq!(welcome["flashes"], serde_json::json!([]));

    let about = client.view("/about_pre").await;
    assert_eq!(about["view"], "about_pre.html");
    assert_eq!(about["title"], "About");
}

#[tokio::test]
async fn protected_pages_redirect_to_login() {
    let mut client = TestClient::new().await;

    for uri in ["/", "/home", "/projects", "/stats", "/add_words", "/project/1"] {
        let response = client.get(uri).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "GET {}", uri);
        assert_eq!(location(&response), "/login", "GET {}", uri);
    }
}
