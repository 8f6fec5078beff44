//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every method issues
//! exactly one statement.

pub mod car_model_repo;
pub mod car_repo;
pub mod manufacturer_repo;

pub use car_model_repo::CarModelRepo;
pub use car_repo::CarRepo;
pub use manufacturer_repo::ManufacturerRepo;
