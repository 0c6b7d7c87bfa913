//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on infrastructure or presentation
//! layers. Business rules (identifier shape, existence checks) live in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
