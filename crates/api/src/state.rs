use std::sync::Arc;

use automir_core::documents::DocumentRenderer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted and the rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: automir_db::DbPool,
    /// Document renderers, with the acceptance-act font resolved at startup.
    pub documents: Arc<DocumentRenderer>,
}
