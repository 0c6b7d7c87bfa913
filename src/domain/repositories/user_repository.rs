//! Repository trait for user record storage.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the user collection.
///
/// Absence is never an error: lookups return `Ok(None)` and deletes return
/// `Ok(false)`, leaving the choice of HTTP status to the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store is unusable.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Finds the first record whose `user_id` equals the argument exactly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store is unusable.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, AppError>;

    /// Appends a record and stamps its creation-order `id`.
    ///
    /// Field contents are not validated here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store is unusable.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Merges `patch` into the first record matching `user_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` with the merged record
    /// - `Ok(None)` if no record matches (nothing is mutated)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store is unusable.
    async fn update(&self, user_id: &str, patch: UserPatch) -> Result<Option<User>, AppError>;

    /// Removes every record matching `user_id`.
    ///
    /// Returns whether the collection changed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store is unusable.
    async fn delete(&self, user_id: &str) -> Result<bool, AppError>;
}
