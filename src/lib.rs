//! # Users API
//!
//! A small REST CRUD service for user records built with Axum. Records live in
//! process memory and are lost on restart.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - User entity and the repository trait
//! - **Application Layer** ([`application`]) - Identifier checks and orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store
//! - **API Layer** ([`api`]) - Handlers, DTOs, middleware and OpenAPI document
//!
//! ## Endpoints
//!
//! - `GET    /api/users`
//! - `GET    /api/users/{userId}`
//! - `POST   /api/users`
//! - `PUT    /api/users/{userId}`
//! - `DELETE /api/users/{userId}`
//! - `GET    /api-docs` (Swagger UI), `GET /api-docs.json` (OpenAPI)
//!
//! ## Quick Start
//!
//! ```bash
//! # One listener on :3000
//! cargo run
//!
//! # Four listeners on :4000-4003 sharing one store
//! WORKERS=4 cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UserService;
    pub use crate::domain::entities::{NewUser, User, UserPatch, UserProfile};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUserRepository;
    pub use crate::state::AppState;
}
