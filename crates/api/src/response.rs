use automir_core::types::DbId;
use serde::Serialize;

/// Body returned by create, replace and delete endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    /// Generated id, present only for creates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

impl MutationResponse {
    pub fn created(id: DbId) -> Self {
        Self {
            success: true,
            id: Some(id),
        }
    }

    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
        }
    }
}
