//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/users*`         - User resource (see [`crate::api::routes`])
//! - `GET /api-docs`       - Swagger UI
//! - `GET /api-docs.json`  - OpenAPI document
//! - anything else         - 404 `{"message": "Not Found"}`, including a known
//!   path requested with an unsupported method
//!
//! # Middleware
//!
//! - **Panic isolation** - A panicking handler yields a generic 500
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::{catch_panic, tracing};
use crate::api::openapi::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::state::AppState;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Constructs the application router with all routes and middleware.
///
/// The same router (and therefore the same store) is served by every
/// listener the server binds.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::routes::user_routes())
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(catch_panic::layer())
        .layer(tracing::layer())
}
