//! Data Transfer Objects for API requests and responses.
//!
//! DTOs use Serde (with `serde_with` adapters) for JSON and `validator` for
//! input validation.

pub mod user;
