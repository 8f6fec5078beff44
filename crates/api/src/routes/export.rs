//! Route definitions for document exports.

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Routes mounted at `/export`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contract/{car_id}", get(export::contract))
        .route("/acceptance-act/{car_id}", get(export::acceptance_act))
        .route("/receipt/{car_id}", get(export::receipt))
}
