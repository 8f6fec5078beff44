//! Handlers for the `/cars` resource.

use automir_core::types::DbId;
use automir_db::models::car::{Car, CarInput};
use automir_db::repositories::CarRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::response::MutationResponse;
use crate::state::AppState;

/// GET /api/cars
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Car>>> {
    let cars = CarRepo::list(&state.pool).await?;
    Ok(Json(cars))
}

/// POST /api/cars
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CarInput>,
) -> AppResult<(StatusCode, Json<MutationResponse>)> {
    let id = CarRepo::create(&state.pool, &input).await?;
    tracing::info!(car_id = id, "Car created");
    Ok((StatusCode::CREATED, Json(MutationResponse::created(id))))
}

/// PUT /api/cars/{id}
///
/// Replaces every field. An unknown id still reports success.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CarInput>,
) -> AppResult<Json<MutationResponse>> {
    if CarRepo::update(&state.pool, id, &input).await? {
        tracing::info!(car_id = id, "Car updated");
    } else {
        tracing::warn!(car_id = id, "Car update matched no row");
    }
    Ok(Json(MutationResponse::ok()))
}

/// DELETE /api/cars/{id}
///
/// An unknown id still reports success.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MutationResponse>> {
    if CarRepo::delete(&state.pool, id).await? {
        tracing::info!(car_id = id, "Car deleted");
    } else {
        tracing::warn!(car_id = id, "Car delete matched no row");
    }
    Ok(Json(MutationResponse::ok()))
}
