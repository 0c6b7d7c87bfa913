//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::infrastructure::persistence::InMemoryUserRepository;

/// Service handles shared by all handlers and all listeners.
///
/// Cloning is cheap; every clone points at the same store.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService<InMemoryUserRepository>>) -> Self {
        Self { user_service }
    }

    /// State over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        let repository = Arc::new(InMemoryUserRepository::new());
        Self::new(Arc::new(UserService::new(repository)))
    }
}
