//! Projects, goals and word-count progress over HTTP

mod common;

use axum::http::StatusCode;
use common::{TestClient, body_json, location};
use serde_json::{Value, json};

async fn create_project(client: &mut TestClient, name: &str) -> i64 {
    let response = client.post_form("/create_project", &[("name", name)]).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/projects");

    let projects = client.view("/projects").await;
    projects["projects"]
        .as_array()
        .unwrap()
        .iter()
        .find(|project| project["name"] == name)
        .and_then(|project| project["id"].as_i64())
        .unwrap()
}

async fn add_goal(client: &mut TestClient, project_id: i64, target: &str) -> axum::response::Response {
    client
        .post_form(
            &format!("/add_goal/{}", project_id),
            &[
                ("name", "First draft"),
                ("start_date", "2024-11-01"),
                ("end_date", "2024-11-30"),
                ("target", target),
            ],
        )
        .await
}

fn flashes(view: &Value) -> &Vec<Value> {
    view["flashes"].as_array().unwrap()
}

#[tokio::test]
async fn owner_sees_goals_and_others_are_turned_away() {
    let mut alice = TestClient::new().await;
    alice.register_and_login("alice", "pass1").await;

    let project_id = create_project(&mut alice, "Novel A").await;
    let response = add_goal(&mut alice, project_id, "50000").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/project/{}", project_id));

    let page = alice.view(&format!("/project/{}", project_id)).await;
    assert_eq!(page["view"], "project.html");
    assert_eq!(page["project"]["name"], "Novel A");
    assert_eq!(page["goals"][0]["name"], "First draft");
    assert_eq!(page["goals"][0]["target"], 50000);
    assert_eq!(page["goals"][0]["progress"], 0);
    assert_eq!(page["goals"][0]["percent_complete"], json!(0.0));
    assert_eq!(page["goals"][0]["start_date"], "2024-11-01");

    let mut bob = alice.fork();
    bob.register_and_login("bob", "pass2").await;

    let response = bob.get(&format!("/project/{}", project_id)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/projects");

    let projects = bob.view("/projects").await;
    assert!(flashes(&projects).contains(&json!("You do not have access to that project.")));
    assert_eq!(projects["projects"], json!([]));
}

#[tokio::test]
async fn foreign_projects_reject_goals_and_placeholder_pages() {
    let mut alice = TestClient::new().await;
    alice.register_and_login("alice", "pass1").await;
    let project_id = create_project(&mut alice, "Novel A").await;

    let mut bob = alice.fork();
    bob.register_and_login("bob", "pass2").await;

    let response = add_goal(&mut bob, project_id, "1000").await;
    assert_eq!(location(&response), "/projects");

    for page in ["plot", "worldbuilding", "characters"] {
        let response = bob.get(&format!("/{}/{}", page, project_id)).await;
        assert_eq!(location(&response), "/projects", "{}", page);

        let view = alice.view(&format!("/{}/{}", page, project_id)).await;
        assert_eq!(view["view"], format!("{}.html", page));
        assert_eq!(view["project"]["id"], project_id);
    }

    let page = alice.view(&format!("/project/{}", project_id)).await;
    assert_eq!(page["goals"], json!([]));
}

#[tokio::test]
async fn unknown_project_is_not_found() {
    let mut client = TestClient::new().await;
    client.register_and_login("alice", "pass1").await;

    let response = client.get("/project/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Project 999 not found" })
    );
}

#[tokio::test]
async fn project_and_goal_forms_are_validated() {
    let mut client = TestClient::new().await;
    client.register_and_login("alice", "pass1").await;

    let response = client.post_form("/create_project", &[("name", "   ")]).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["view"], "create_project.html");
    assert_eq!(json["errors"]["name"], json!(["Name is required"]));

    let project_id = create_project(&mut client, "Novel A").await;

    let response = add_goal(&mut client, project_id, "-1").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["view"], "add_goal.html");
    assert!(json["errors"]["target"].is_array());
    assert_eq!(json["form"]["target"], "-1");

    let response = client
        .post_form(
            &format!("/add_goal/{}", project_id),
            &[
                ("name", "Backwards"),
                ("start_date", "2024-11-30"),
                ("end_date", "2024-11-01"),
                ("target", "100"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["errors"]["end_date"].is_array());
}

#[tokio::test]
async fn zero_target_goal_has_no_percentage() {
    let mut client = TestClient::new().await;
    client.register_and_login("alice", "pass1").await;
    let project_id = create_project(&mut client, "Notebook").await;

    let response = add_goal(&mut client, project_id, "0").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let page = client.view(&format!("/project/{}", project_id)).await;
    assert_eq!(page["goals"][0]["target"], 0);
    assert_eq!(page["goals"][0]["percent_complete"], Value::Null);
}

#[tokio::test]
async fn words_accumulate_on_owned_goals() {
    let mut alice = TestClient::new().await;
    alice.register_and_login("alice", "pass1").await;
    let project_id = create_project(&mut alice, "Novel A").await;
    add_goal(&mut alice, project_id, "50000").await;

    let form = alice.view("/add_words").await;
    assert_eq!(form["view"], "add_words.html");
    assert_eq!(form["goals"][0]["project_name"], "Novel A");
    let goal_id = form["goals"][0]["id"].as_i64().unwrap();
    let goal_id = goal_id.to_string();

    for words in ["10000", "2500"] {
        let response = alice
            .post_form("/add_words", &[("goal_id", goal_id.as_str()), ("words", words)])
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), format!("/project/{}", project_id));
    }

    let page = alice.view(&format!("/project/{}", project_id)).await;
    assert_eq!(page["goals"][0]["progress"], 12500);
    assert_eq!(page["goals"][0]["percent_complete"], json!(25.0));
    assert_eq!(page["goals"][0]["remaining"], 37500);
    assert!(flashes(&page).contains(&json!("2500 words added to 'First draft' (25% of target).")));

    let response = alice
        .post_form("/add_words", &[("goal_id", goal_id.as_str()), ("words", "0")])
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["words"], json!(["Words must be at least 1"]));

    let mut bob = alice.fork();
    bob.register_and_login("bob", "pass2").await;
    let response = bob
        .post_form("/add_words", &[("goal_id", goal_id.as_str()), ("words", "999")])
        .await;
    assert_eq!(location(&response), "/projects");

    let page = alice.view(&format!("/project/{}", project_id)).await;
    assert_eq!(page["goals"][0]["progress"], 12500);
}

#[tokio::test]
async fn stats_aggregate_the_callers_goals() {
    let mut client = TestClient::new().await;
    client.register_and_login("alice", "pass1").await;

    let stats = client.view("/stats").await;
    assert_eq!(stats["stats"]["projects"], 0);
    assert_eq!(stats["stats"]["percent_complete"], Value::Null);

    let project_id = create_project(&mut client, "Novel A").await;
    add_goal(&mut client, project_id, "50000").await;
    let goal_id = client.view("/add_words").await["goals"][0]["id"]
        .as_i64()
        .unwrap()
        .to_string();
    client
        .post_form("/add_words", &[("goal_id", goal_id.as_str()), ("words", "25000")])
        .await;

    let stats = client.view("/stats").await;
    assert_eq!(stats["view"], "stats.html");
    assert_eq!(stats["stats"]["projects"], 1);
    assert_eq!(stats["stats"]["goals"], 1);
    assert_eq!(stats["stats"]["goals_completed"], 0);
    assert_eq!(stats["stats"]["words_written"], 25000);
    assert_eq!(stats["stats"]["words_targeted"], 50000);
    assert_eq!(stats["stats"]["percent_complete"], json!(50.0));
}

#[tokio::test]
async fn informational_pages_carry_the_user() {
    let mut client = TestClient::new().await;
    client.register_and_login("alice", "pass1").await;
    create_project(&mut client, "Novel A").await;

    let dashboard = client.view("/dashboard").await;
    assert_eq!(dashboard["projects"][0]["name"], "Novel A");

    let profile = client.view("/profile").await;
    assert_eq!(profile["current_user"]["username"], "alice");
    assert_eq!(profile["project_count"], 1);

    let about = client.view("/about").await;
    assert_eq!(about["view"], "about.html");
}
