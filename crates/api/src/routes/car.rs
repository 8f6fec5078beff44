//! Route definitions for the `/cars` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::car;
use crate::state::AppState;

/// Routes mounted at `/cars`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(car::list).post(car::create))
        .route("/{id}", put(car::update).delete(car::delete))
}
