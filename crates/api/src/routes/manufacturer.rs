//! Route definitions for the `/manufacturers` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::manufacturer;
use crate::state::AppState;

/// Routes mounted at `/manufacturers`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(manufacturer::list).post(manufacturer::create))
        .route("/{id}", put(manufacturer::update).delete(manufacturer::delete))
}
