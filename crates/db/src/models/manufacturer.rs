//! Manufacturer entity model and DTOs.

use automir_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `manufacturers` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Manufacturer {
    pub id: DbId,
    pub name: String,
    pub country: String,
    pub year_founded: i32,
}

/// Full manufacturer record without the id, for create and replace.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ManufacturerInput {
    pub name: String,
    pub country: String,
    pub year_founded: i32,
}
