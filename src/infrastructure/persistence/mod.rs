//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryUserRepository`] - process-local user collection; nothing
//!   survives a restart

pub mod in_memory_user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
