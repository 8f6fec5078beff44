//! Row structs and input DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the listing query
//! - A `Deserialize` + `Validate` input DTO used for both create and
//!   full-record replacement

pub mod car;
pub mod car_model;
pub mod manufacturer;
