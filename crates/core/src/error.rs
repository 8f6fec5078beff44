use crate::types::DbId;

/// Error kinds shared by every layer. Mapped to HTTP status codes only at
/// the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A foreign key did not resolve, or a referenced row is still in use.
    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrity(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
