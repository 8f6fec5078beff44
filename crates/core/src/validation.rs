//! Structural validation of inbound records.
//!
//! Field presence and primitive types are enforced by deserialization into
//! the typed input DTOs; value rules (non-negative price and mileage,
//! prices that fit the money column exactly) are declared on the DTOs with
//! `validator` attributes and checked here.

use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::error::CoreError;

/// Run the `validator` rules declared on `input`.
///
/// All violations are folded into a single [`CoreError::Validation`]
/// message, one `field: message` pair per violation, sorted by field name.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(|errors| {
        let mut violations: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    format!("{field}: {message}")
                })
            })
            .collect();
        violations.sort();
        CoreError::Validation(violations.join("; "))
    })
}

/// Largest amount a `NUMERIC(12, 2)` price column holds.
pub const MAX_PRICE: f64 = 9_999_999_999.99;

/// Custom `validator` rule for money amounts: at most [`MAX_PRICE`] and no
/// more than two decimal places, so the stored value reads back unchanged.
pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price > MAX_PRICE {
        return Err(ValidationError::new("price_range")
            .with_message(Cow::Borrowed("must not exceed 9999999999.99")));
    }
    if (price * 100.0).round() / 100.0 != price {
        return Err(ValidationError::new("price_precision")
            .with_message(Cow::Borrowed("must have at most two decimal places")));
    }
    Ok(())
}
