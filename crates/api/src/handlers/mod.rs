//! Request handlers, one module per resource.

pub mod car;
pub mod car_model;
pub mod export;
pub mod manufacturer;
