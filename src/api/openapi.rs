//! OpenAPI document generated from the handler annotations.
//!
//! Served as JSON at [`OPENAPI_JSON_PATH`] and through Swagger UI at
//! [`SWAGGER_UI_PATH`].

use utoipa::{OpenApi, ToSchema};

use crate::api::dto::user::UserResponse;
use crate::error::ErrorBody;

pub const SWAGGER_UI_PATH: &str = "/api-docs";
pub const OPENAPI_JSON_PATH: &str = "/api-docs.json";

/// Documentation-only view of [`crate::api::dto::user::UserPayload`].
///
/// The real DTO accepts looser input (`age` as a numeric string, `hobby` as a
/// single string); this schema shows the canonical form.
#[derive(ToSchema)]
#[schema(example = json!({ "username": "John Doe", "age": 30, "hobby": ["Cricket", "Painting"] }))]
pub struct UserPayloadDoc {
    pub username: String,
    #[schema(minimum = 1)]
    pub age: u32,
    pub hobby: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "CRUD service for user records kept in process memory"
    ),
    paths(
        crate::api::handlers::users::list_users_handler,
        crate::api::handlers::users::get_user_handler,
        crate::api::handlers::users::create_user_handler,
        crate::api::handlers::users::update_user_handler,
        crate::api::handlers::users::delete_user_handler,
    ),
    components(schemas(UserResponse, UserPayloadDoc, ErrorBody)),
    tags((name = "Users", description = "User record management"))
)]
pub struct ApiDoc;
