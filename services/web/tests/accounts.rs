//! Registration, login, logout and login throttling

mod common;

use axum::http::StatusCode;
use common::{TestClient, body_json, location};
use serde_json::json;

#[tokio::test]
async fn register_then_login_opens_a_session() {
    let mut client = TestClient::new().await;

    let response = client.register("alice", "pass1").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let response = client.login("alice", "pass1").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/home");
    assert!(client.cookie("session").is_some());

    let home = client.view("/home").await;
    assert_eq!(home["view"], "index.html");
    assert_eq!(home["current_user"]["username"], "alice");
    assert!(
        home["flashes"]
            .as_array()
            .unwrap()
            .contains(&json!("Welcome back, alice!"))
    );
    assert!(client.cookie("flash").is_none());
}

#[tokio::test]
async fn duplicate_username_is_a_field_error() {
    let mut client = TestClient::new().await;
    client.register("alice", "pass1").await;

    let response = client.register("alice", "other1").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["view"], "register.html");
    assert_eq!(
        json["errors"]["username"],
        json!(["That username is taken. Please choose a different one."])
    );
    assert_eq!(json["form"], json!({ "username": "alice" }));
}

#[tokio::test]
async fn registration_form_is_validated() {
    let mut client = TestClient::new().await;

    let response = client
        .post_form(
            "/register",
            &[
                ("username", "averyveryverylongusername"),
                ("password", "abc"),
                ("confirm_password", "abd"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert!(json["errors"]["username"].is_array());
    assert!(json["errors"]["password"].is_array());
    assert_eq!(
        json["errors"]["confirm_password"],
        json!(["Passwords must match"])
    );
}

#[tokio::test]
async fn wrong_password_flashes_and_redirects() {
    let mut client = TestClient::new().await;
    client.register("alice", "pass1").await;

    let response = client.login("alice", "wrong").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert!(client.cookie("session").is_none());

    let login = client.view("/login").await;
    assert_eq!(
        login["flashes"],
        json!(["Login unsuccessful. Please check username and password."])
    );
}

#[tokio::test]
async fn blank_login_is_rejected_before_lookup() {
    let mut client = TestClient::new().await;

    let response = client.login("", "").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["errors"]["username"], json!(["Username is required"]));
    assert_eq!(json["errors"]["password"], json!(["Password is required"]));
}

#[tokio::test]
async fn logout_ends_the_session() {
    let mut client = TestClient::new().await;
    client.register_and_login("alice", "pass1").await;

    let response = client.get("/logout").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert!(client.cookie("session").is_none());

    let response = client.get("/home").await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn stale_session_cookie_is_cleared() {
    let mut client = TestClient::new().await;
    client.register_and_login("alice", "pass1").await;
    let token = client.cookie("session").unwrap().to_string();

    client.post_form("/logout", &[]).await;

    // Replay the old token from a second browser
    let mut stale = client.fork();
    stale.set_cookie("session", &token);
    let response = stale.get("/projects").await;
    assert_eq!(location(&response), "/login");
    assert!(stale.cookie("session").is_none());
}

#[tokio::test]
async fn logged_in_users_skip_login_and_register() {
    let mut client = TestClient::new().await;
    client.register_and_login("alice", "pass1").await;

    for uri in ["/login", "/register"] {
        let response = client.get(uri).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "GET {}", uri);
        assert_eq!(location(&response), "/home", "GET {}", uri);
    }
}

#[tokio::test]
async fn repeated_failures_are_throttled() {
    let mut client = TestClient::new().await;

    for _ in 0..5 {
        let response = client.login("ghost", "nope").await;
        assert_eq!(location(&response), "/login");
    }

    client.login("ghost", "nope").await;
    let login = client.view("/login").await;
    assert_eq!(
        login["flashes"],
        json!(["Too many failed login attempts. Please try again later."])
    );
}

#[tokio::test]
async fn padded_username_is_the_same_account() {
    let mut client = TestClient::new().await;
    client.register("alice", "pass1").await;

    let response = client.register("  alice ", "pass1").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(
        json["errors"]["username"],
        json!(["That username is taken. Please choose a different one."])
    );
    assert_eq!(json["form"], json!({ "username": "alice" }));

    let response = client.login(" alice", "pass1").await;
    assert_eq!(location(&response), "/home");
}
