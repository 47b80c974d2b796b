//! End-to-end tests driving the router in-process.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use blog_backend::config::AppConfig;
use blog_backend::{create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let mut config = AppConfig::default();
    config.auth.secret = "integration-secret".to_string();
    create_router(AppState::in_memory(&config.auth), &config.server)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn query(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/query")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn register(app: &Router, username: &str) -> String {
    let (status, body) = query(
        app,
        json!({
            "operation": "createUser",
            "arguments": {
                "username": username,
                "email": format!("{username}@x.com"),
                "password": "pw123"
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["createUser"]["success"], true);
    body["data"]["createUser"]["token"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn create_post(app: &Router, token: &str, title: &str, content: &str) -> Value {
    let (status, body) = query(
        app,
        json!({
            "operation": "createPost",
            "arguments": {"token": token, "title": title, "content": content}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["createPost"].clone()
}

#[tokio::test]
async fn register_post_edit_delete_scenario() {
    let app = app();
    let token = register(&app, "alice").await;

    let created = create_post(&app, &token, "Hello", "World").await;
    assert_eq!(created["success"], true);
    assert_eq!(created["post"]["title"], "Hello");
    let post_id = created["post"]["id"].as_i64().unwrap();

    let (_, body) = query(
        &app,
        json!({
            "operation": "editPost",
            "arguments": {"token": token, "postId": post_id, "content": "Edited"}
        }),
    )
    .await;
    let edited = &body["data"]["editPost"];
    assert_eq!(edited["success"], true);
    assert_eq!(edited["post"]["title"], "Hello");
    assert_eq!(edited["post"]["content"], "Edited");

    let delete = json!({
        "operation": "deletePost",
        "arguments": {"token": token, "postId": post_id}
    });
    let (_, body) = query(&app, delete.clone()).await;
    assert_eq!(body["data"]["deletePost"]["success"], true);

    let (status, body) = query(&app, delete).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deletePost"]["success"], false);
    assert_eq!(body["data"]["deletePost"]["errors"], "Post does not exist");
}

#[tokio::test]
async fn create_user_returns_username_and_token() {
    let app = app();
    let (_, body) = query(
        &app,
        json!({
            "operation": "createUser",
            "arguments": {"username": "testuser", "email": "testuser@gmail.com", "password": "testpassword"}
        }),
    )
    .await;

    let payload = &body["data"]["createUser"];
    assert_eq!(payload["user"]["username"], "testuser");
    assert_eq!(payload["token"].as_str().unwrap().split('.').count(), 3);
    assert!(payload["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn duplicate_username_is_reported_in_payload() {
    let app = app();
    register(&app, "alice").await;

    let (status, body) = query(
        &app,
        json!({
            "operation": "createUser",
            "arguments": {"username": "alice", "email": "again@x.com", "password": "pw"}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let payload = &body["data"]["createUser"];
    assert_eq!(payload["success"], false);
    assert_eq!(payload["token"], Value::Null);
    assert_eq!(payload["errors"], "A user with that username already exists.");
}

#[tokio::test]
async fn obtain_token_logs_in_existing_user() {
    let app = app();
    register(&app, "alice").await;

    let (_, body) = query(
        &app,
        json!({
            "operation": "obtainToken",
            "arguments": {"username": "alice", "password": "pw123"}
        }),
    )
    .await;
    let token = body["data"]["obtainToken"]["token"].as_str().unwrap().to_string();

    let created = create_post(&app, &token, "From login", "ok").await;
    assert_eq!(created["success"], true);

    let (_, body) = query(
        &app,
        json!({
            "operation": "obtainToken",
            "arguments": {"username": "alice", "password": "nope"}
        }),
    )
    .await;
    assert_eq!(body["data"]["obtainToken"]["success"], false);
    assert_eq!(
        body["data"]["obtainToken"]["errors"],
        "Invalid username or password"
    );
}

#[tokio::test]
async fn invalid_token_is_rejected_without_writing() {
    let app = app();
    let created = create_post(&app, "invalid_token", "New Post", "This is a new post").await;
    assert_eq!(created["success"], false);
    assert_eq!(created["post"], Value::Null);
    assert_eq!(created["errors"], "Invalid token");

    let (_, body) = query(&app, json!({"operation": "allPosts"})).await;
    assert_eq!(body["data"]["allPosts"], json!([]));
}

#[tokio::test]
async fn tampered_token_is_rejected() {
    let app = app();
    let token = register(&app, "alice").await;

    let (head, signature) = token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = signature.chars().collect();
    let idx = chars.len() / 2;
    chars[idx] = if chars[idx] == 'x' { 'y' } else { 'x' };
    let tampered = format!("{head}.{}", chars.into_iter().collect::<String>());

    let created = create_post(&app, &tampered, "Hello", "World").await;
    assert_eq!(created["success"], false);
    assert_eq!(created["errors"], "Signature verification failed");
}

#[tokio::test]
async fn other_author_sees_not_found_and_post_is_untouched() {
    let app = app();
    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;

    let created = create_post(&app, &alice, "Existing Post", "This is an existing post").await;
    let post_id = created["post"]["id"].as_i64().unwrap();

    let (_, body) = query(
        &app,
        json!({
            "operation": "editPost",
            "arguments": {"token": bob, "postId": post_id, "title": "Hijacked"}
        }),
    )
    .await;
    assert_eq!(body["data"]["editPost"]["success"], false);
    assert_eq!(body["data"]["editPost"]["errors"], "Post does not exist");

    let (_, body) = query(
        &app,
        json!({
            "operation": "deletePost",
            "arguments": {"token": bob, "postId": post_id}
        }),
    )
    .await;
    assert_eq!(body["data"]["deletePost"]["success"], false);
    assert_eq!(body["data"]["deletePost"]["errors"], "Post does not exist");

    let (status, body) = query(
        &app,
        json!({"operation": "postById", "arguments": {"id": post_id}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let post = &body["data"]["postById"];
    assert_eq!(post["title"], "Existing Post");
    assert_eq!(post["content"], "This is an existing post");
}

#[tokio::test]
async fn edit_distinguishes_empty_from_absent() {
    let app = app();
    let token = register(&app, "alice").await;
    let created = create_post(&app, &token, "Hello", "World").await;
    let post_id = created["post"]["id"].as_i64().unwrap();

    let (_, body) = query(
        &app,
        json!({
            "operation": "editPost",
            "arguments": {"token": token, "postId": post_id, "title": ""}
        }),
    )
    .await;
    let post = &body["data"]["editPost"]["post"];
    assert_eq!(post["title"], "");
    assert_eq!(post["content"], "World");
}

#[tokio::test]
async fn all_posts_lists_every_author() {
    let app = app();
    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;
    create_post(&app, &alice, "first", "a").await;
    create_post(&app, &bob, "second", "b").await;

    let (status, body) = query(&app, json!({"operation": "allPosts"})).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body["data"]["allPosts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["first", "second"]);
}

#[tokio::test]
async fn all_posts_accepts_every_empty_arguments_form() {
    let app = app();
    let token = register(&app, "alice").await;
    create_post(&app, &token, "Hello", "World").await;

    for body in [
        json!({"operation": "allPosts"}),
        json!({"operation": "allPosts", "arguments": null}),
        json!({"operation": "allPosts", "arguments": {}}),
    ] {
        let (status, body) = query(&app, body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["allPosts"][0]["title"], "Hello");
    }
}

#[tokio::test]
async fn post_by_id_miss_is_a_structured_not_found() {
    let app = app();
    let (status, body) = query(
        &app,
        json!({"operation": "postById", "arguments": {"id": 999}}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Post does not exist");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unknown_operation_is_a_client_error() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/query")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"operation": "dropTables", "arguments": {}}"#))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn health_reports_version() {
    let app = app();
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
