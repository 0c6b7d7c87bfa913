//! User management service.

use crate::domain::entities::{NewUser, User, UserPatch, UserProfile};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::user_id::{generate_user_id, validate_user_id};
use std::sync::Arc;

/// Service for the user resource.
///
/// Every identifier-taking operation checks the UUID shape first
/// ([`AppError::InvalidUserId`]) and existence second ([`AppError::UserNotFound`]).
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all users in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a user by its `userId`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUserId`] if the id is not UUID-shaped.
    /// Returns [`AppError::UserNotFound`] if no such user exists.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_user(&self, user_id: &str) -> Result<User, AppError> {
        validate_user_id(user_id)?;

        self.repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    /// Creates a user with a freshly generated `userId`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_user(&self, profile: UserProfile) -> Result<User, AppError> {
        let user_id = generate_user_id();

        let user = self
            .repository
            .create(NewUser::new(user_id, profile))
            .await?;

        tracing::info!(user_id = %user.user_id, "user created");
        Ok(user)
    }

    /// Overwrites the profile of an existing user, keeping its `userId`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUserId`] if the id is not UUID-shaped.
    /// Returns [`AppError::UserNotFound`] if no such user exists.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_user(&self, user_id: &str, profile: UserProfile) -> Result<User, AppError> {
        validate_user_id(user_id)?;

        let user = self
            .repository
            .update(user_id, UserPatch::from(profile))
            .await?
            .ok_or(AppError::UserNotFound)?;

        tracing::info!(user_id = %user.user_id, "user updated");
        Ok(user)
    }

    /// Deletes an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUserId`] if the id is not UUID-shaped.
    /// Returns [`AppError::UserNotFound`] if no such user exists.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        self.get_user(user_id).await?;

        if !self.repository.delete(user_id).await? {
            return Err(AppError::UserNotFound);
        }

        tracing::info!(user_id, "user deleted");
        Ok(())
    }
}
