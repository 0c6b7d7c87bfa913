mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use axum_test::TestServer;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use users_api::api::middleware::catch_panic;
use users_api::routes::app_router;

#[tokio::test]
async fn test_unmatched_route_returns_not_found_message() {
    let server = TestServer::new(app_router(common::create_test_state())).unwrap();

    let response = server.get("/api/unknown").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>(), json!({ "message": "Not Found" }));
}

#[tokio::test]
async fn test_unmatched_route_via_oneshot() {
    let app = app_router(common::create_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/does/not/exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Not Found");
}

#[tokio::test]
async fn test_unsupported_method_returns_not_found_message() {
    let server = TestServer::new(app_router(common::create_test_state())).unwrap();

    let on_collection = server.patch("/api/users").await;
    on_collection.assert_status_not_found();
    assert_eq!(on_collection.json::<Value>(), json!({ "message": "Not Found" }));

    let on_item = server
        .post(&format!("/api/users/{}", common::UNKNOWN_USER_ID))
        .await;
    on_item.assert_status_not_found();
    assert_eq!(on_item.json::<Value>(), json!({ "message": "Not Found" }));
}

#[tokio::test]
async fn test_user_routes_are_mounted_under_api() {
    let server = TestServer::new(app_router(common::create_test_state())).unwrap();

    server
        .post("/api/users")
        .json(&common::john_doe())
        .await
        .assert_status(StatusCode::CREATED);

    let list = server.get("/api/users").await;
    list.assert_status_ok();
    assert_eq!(list.json::<Value>().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let server = TestServer::new(app_router(common::create_test_state())).unwrap();

    let response = server.get("/api-docs.json").await;

    response.assert_status_ok();
    let doc = response.json::<Value>();
    assert!(doc["openapi"].as_str().unwrap().starts_with("3."));
    assert!(doc["paths"].get("/api/users").is_some());
    assert!(doc["paths"].get("/api/users/{userId}").is_some());
}

#[tokio::test]
async fn test_swagger_ui_is_served() {
    let server = TestServer::new(app_router(common::create_test_state())).unwrap();

    let response = server.get("/api-docs/").await;

    response.assert_status_ok();
    assert!(response.text().contains("swagger"));
}

#[tokio::test]
async fn test_listeners_sharing_state_see_the_same_records() {
    let state = common::create_test_state();
    let first = TestServer::new(app_router(state.clone())).unwrap();
    let second = TestServer::new(app_router(state)).unwrap();

    let user_id = common::create_test_user(&first, "Alice").await;

    let response = second.get(&format!("/api/users/{user_id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["username"], "Alice");
}

async fn panicking_handler() -> &'static str {
    panic!("secret internal detail")
}

#[tokio::test]
async fn test_handler_panic_becomes_generic_500() {
    let app = Router::new()
        .route("/boom", get(panicking_handler))
        .layer(catch_panic::layer());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/boom").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text();
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "message": "Internal Server Error" })
    );
    assert!(!body.contains("secret"));
}
