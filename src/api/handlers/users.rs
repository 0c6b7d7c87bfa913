//! Handlers for the user resource.
//!
//! Each handler validates its input, calls the service once, and maps the
//! result to a status code. Errors are rendered by [`AppError`].

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::user::{UserPayload, UserResponse};
use crate::domain::entities::UserProfile;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Unwraps the `userId` path segment.
///
/// A segment that does not percent-decode to UTF-8 cannot be a UUID.
fn user_id_from_path(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    path.map(|Path(user_id)| user_id).map_err(|e| {
        tracing::debug!(error = %e, "userId path segment rejected");
        AppError::InvalidUserId
    })
}

/// Turns the raw body extraction into a validated profile.
///
/// A body that is JSON but has wrongly typed fields counts as missing
/// fields, and so does a body sent without a JSON content type. Anything
/// else that fails to parse is a malformed body.
fn profile_from_body(
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<UserProfile, AppError> {
    match payload {
        Ok(Json(payload)) => UserProfile::try_from(payload),
        Err(JsonRejection::JsonDataError(e)) => {
            tracing::debug!(error = %e, "user payload has invalid fields");
            Err(AppError::MissingFields)
        }
        Err(JsonRejection::MissingJsonContentType(e)) => {
            tracing::debug!(error = %e, "user payload sent without JSON content type");
            Err(AppError::MissingFields)
        }
        Err(e) => {
            tracing::debug!(error = %e, "user payload is not JSON");
            Err(AppError::MalformedBody)
        }
    }
}

/// Lists all users.
///
/// # Endpoint
///
/// `GET /api/users`
#[utoipa::path(
    get, path = "/api/users", tag = "Users",
    responses(
        (status = 200, description = "Successful operation", body = Vec<UserResponse>),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    )
)]
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Retrieves one user.
///
/// # Endpoint
///
/// `GET /api/users/{userId}`
///
/// # Errors
///
/// Returns 400 if `userId` is not UUID-shaped (checked before existence).
/// Returns 404 if the user does not exist.
#[utoipa::path(
    get, path = "/api/users/{userId}", tag = "Users",
    params(("userId" = uuid::Uuid, Path, description = "ID of the user to retrieve")),
    responses(
        (status = 200, description = "Successful operation", body = UserResponse),
        (status = 400, description = "Invalid userId format", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn get_user_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user_id = user_id_from_path(path)?;
    let user = state.user_service.get_user(&user_id).await?;

    Ok(Json(user.into()))
}

/// Creates a user with a server-generated `userId`.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// { "username": "John Doe", "age": "30", "hobby": ["Cricket", "Painting"] }
/// ```
///
/// # Errors
///
/// Returns 400 if any of `username`, `age`, `hobby` is missing or empty.
#[utoipa::path(
    post, path = "/api/users", tag = "Users",
    request_body = crate::api::openapi::UserPayloadDoc,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Username, age and hobby are required fields", body = ErrorBody)
    )
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let profile = profile_from_body(payload)?;

    let user = state.user_service.create_user(profile).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Replaces the profile of an existing user.
///
/// # Endpoint
///
/// `PUT /api/users/{userId}`
///
/// # Behavior
///
/// Checks run in order: identifier shape (400), existence (404), body (400).
/// The stored `userId` is never changed.
#[utoipa::path(
    put, path = "/api/users/{userId}", tag = "Users",
    params(("userId" = uuid::Uuid, Path, description = "ID of the user to update")),
    request_body = crate::api::openapi::UserPayloadDoc,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, description = "Invalid userId format or Username, age and hobby are required fields", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn update_user_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let user_id = user_id_from_path(path)?;
    state.user_service.get_user(&user_id).await?;

    let profile = profile_from_body(payload)?;

    let user = state.user_service.update_user(&user_id, profile).await?;

    Ok(Json(user.into()))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /api/users/{userId}`
///
/// # Errors
///
/// Returns 400 if `userId` is not UUID-shaped.
/// Returns 404 if the user does not exist.
#[utoipa::path(
    delete, path = "/api/users/{userId}", tag = "Users",
    params(("userId" = uuid::Uuid, Path, description = "ID of the user to delete")),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 400, description = "Invalid userId format", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn delete_user_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let user_id = user_id_from_path(path)?;
    state.user_service.delete_user(&user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
