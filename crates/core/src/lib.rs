//! Domain layer for the AutoMir dealership backend.
//!
//! Holds the shared types, the error-kind enumeration, inbound record
//! validation, and the document renderers. Nothing in this crate touches
//! the database.

pub mod documents;
pub mod error;
pub mod types;
pub mod validation;
