#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use serde_json::{Value, json};
use users_api::api::routes::user_routes;
use users_api::state::AppState;

pub const UNKNOWN_USER_ID: &str = "4b3a1c2e-8f9d-4e5a-b6c7-d8e9f0a1b2c3";

pub fn create_test_state() -> AppState {
    AppState::in_memory()
}

/// Server exposing only the production user routes under `/api`.
pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new().nest("/api", user_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

pub fn john_doe() -> Value {
    json!({
        "username": "John Doe",
        "age": "30",
        "hobby": ["Cricket", "Painting"]
    })
}

/// Creates a user through the API and returns its `userId`.
pub async fn create_test_user(server: &TestServer, username: &str) -> String {
    let response = server
        .post("/api/users")
        .json(&json!({ "username": username, "age": 30, "hobby": "Reading" }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    response.json::<Value>()["userId"]
        .as_str()
        .unwrap()
        .to_string()
}
