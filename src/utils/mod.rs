//! Utility functions shared across layers.
//!
//! - [`user_id`] - Identifier generation and UUID shape validation

pub mod user_id;
