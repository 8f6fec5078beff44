pub mod car;
pub mod car_model;
pub mod export;
pub mod health;
pub mod manufacturer;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /manufacturers                      list, create
/// /manufacturers/{id}                 update, delete
///
/// /models                             list, create
/// /models/{id}                        update, delete
///
/// /cars                               list, create
/// /cars/{id}                          update, delete
///
/// /export/contract/{car_id}           contract (.doc)
/// /export/acceptance-act/{car_id}     acceptance act (.pdf)
/// /export/receipt/{car_id}            receipt (.xlsx)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/manufacturers", manufacturer::router())
        .nest("/models", car_model::router())
        .nest("/cars", car::router())
        .nest("/export", export::router())
}
