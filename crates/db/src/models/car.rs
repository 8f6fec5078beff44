//! Car entity model, DTOs, and the denormalized export row.

use automir_core::documents::CarSheet;
use automir_core::types::DbId;
use automir_core::validation::validate_price;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A `cars` row joined with its model and manufacturer names.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Car {
    pub id: DbId,
    /// Manufacturer name, resolved through the model.
    pub manufacturer: String,
    /// Model name, resolved through `model_id`.
    pub model: String,
    pub color: String,
    pub price: f64,
    pub year: i32,
    pub engine_type: String,
    pub transmission: String,
    pub mileage: i32,
    pub status: String,
    pub model_id: DbId,
}

/// Full car record without the id, for create and replace.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CarInput {
    pub model_id: DbId,
    pub color: String,
    #[validate(
        range(min = 0.0, message = "must not be negative"),
        custom(function = "validate_price")
    )]
    pub price: f64,
    pub year: i32,
    pub engine_type: String,
    pub transmission: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub mileage: i32,
    /// Free-form domain value such as `available`, `sold`, `reserved`.
    pub status: String,
}

/// Everything the document renderers need about one car.
#[derive(Debug, Clone, FromRow)]
pub struct CarDetails {
    pub id: DbId,
    pub manufacturer_name: String,
    pub manufacturer_country: String,
    pub model_name: String,
    pub color: String,
    pub price: f64,
    pub year: i32,
    pub engine_type: String,
    pub transmission: String,
    pub mileage: i32,
    pub status: String,
}

impl From<CarDetails> for CarSheet {
    fn from(row: CarDetails) -> Self {
        CarSheet {
            id: row.id,
            manufacturer_name: row.manufacturer_name,
            manufacturer_country: row.manufacturer_country,
            model_name: row.model_name,
            color: row.color,
            price: row.price,
            year: row.year,
            engine_type: row.engine_type,
            transmission: row.transmission,
            mileage: row.mileage,
            status: row.status,
        }
    }
}
