//! HTTP middleware for request processing.
//!
//! Provides observability and panic isolation.

pub mod catch_panic;
pub mod tracing;
