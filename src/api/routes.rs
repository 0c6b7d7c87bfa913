//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    not_found_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// User resource routes.
///
/// # Endpoints
///
/// - `GET    /users`            - List all users
/// - `POST   /users`            - Create a user
/// - `GET    /users/{userId}`   - Get a user
/// - `PUT    /users/{userId}`   - Replace a user's profile
/// - `DELETE /users/{userId}`   - Delete a user
///
/// Any other method on these paths answers 404 like an unmatched route.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{user_id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .method_not_allowed_fallback(not_found_handler)
}
