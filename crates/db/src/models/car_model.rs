//! Car model entity (the `models` table) and DTOs.

use automir_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A `models` row joined with its manufacturer's name.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CarModel {
    pub id: DbId,
    pub name: String,
    /// Manufacturer name, resolved through `manufacturer_id`.
    pub manufacturer: String,
    pub year: i32,
    pub body_type: String,
    pub manufacturer_id: DbId,
}

/// Full model record without the id, for create and replace.
///
/// `manufacturer_id` is not checked here; the foreign key constraint
/// rejects ids that do not resolve.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CarModelInput {
    pub name: String,
    pub manufacturer_id: DbId,
    pub year: i32,
    pub body_type: String,
}
