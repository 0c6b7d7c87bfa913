//! Catch-all handler for unmatched routes.

use crate::error::AppError;

/// Answers every request no route matched.
///
/// Returns 404 with `{"message": "Not Found"}`.
pub async fn not_found_handler() -> AppError {
    AppError::RouteNotFound
}
