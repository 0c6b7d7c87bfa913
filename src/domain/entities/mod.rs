//! Core domain entities.
//!
//! Entities are plain data structures. Creation and update inputs are kept in
//! separate structs:
//! - [`NewUser`] - for inserting a record
//! - [`UserPatch`] - for partial (merge) updates
//! - [`UserProfile`] - the validated client-supplied attributes

pub mod user;

pub use user::{NewUser, User, UserPatch, UserProfile};
