//! Process-local implementation of the user repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// In-memory user store backed by an ordered `Vec`.
///
/// Insertion order is preserved for listing and lookups are linear scans.
/// The lock is never held across an `.await`, so every operation completes
/// atomically with respect to the others. Clone-friendly via `Arc`: clones
/// share the same collection.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::internal("user store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::internal("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.read()?.clone())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .read()?
            .iter()
            .find(|user| user.user_id == user_id)
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.write()?;

        // Position at insert time; stale once earlier records are deleted.
        let user = User {
            id: (users.len() + 1).to_string(),
            user_id: new_user.user_id,
            username: new_user.username,
            age: new_user.age,
            hobby: new_user.hobby,
        };
        users.push(user.clone());

        debug!(user_id = %user.user_id, id = %user.id, "user stored");
        Ok(user)
    }

    async fn update(&self, user_id: &str, patch: UserPatch) -> Result<Option<User>, AppError> {
        let mut users = self.write()?;

        Ok(users
            .iter_mut()
            .find(|user| user.user_id == user_id)
            .map(|user| {
                user.apply(patch);
                user.clone()
            }))
    }

    async fn delete(&self, user_id: &str) -> Result<bool, AppError> {
        let mut users = self.write()?;

        let before = users.len();
        users.retain(|user| user.user_id != user_id);

        Ok(users.len() != before)
    }
}
