//! Handlers for the `/manufacturers` resource.

use automir_core::types::DbId;
use automir_db::models::manufacturer::{Manufacturer, ManufacturerInput};
use automir_db::repositories::ManufacturerRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::response::MutationResponse;
use crate::state::AppState;

/// GET /api/manufacturers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Manufacturer>>> {
    let manufacturers = ManufacturerRepo::list(&state.pool).await?;
    Ok(Json(manufacturers))
}

/// POST /api/manufacturers
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ManufacturerInput>,
) -> AppResult<(StatusCode, Json<MutationResponse>)> {
    let id = ManufacturerRepo::create(&state.pool, &input).await?;
    tracing::info!(manufacturer_id = id, "Manufacturer created");
    Ok((StatusCode::CREATED, Json(MutationResponse::created(id))))
}

/// PUT /api/manufacturers/{id}
///
/// Replaces every field. An unknown id still reports success.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<ManufacturerInput>,
) -> AppResult<Json<MutationResponse>> {
    if ManufacturerRepo::update(&state.pool, id, &input).await? {
        tracing::info!(manufacturer_id = id, "Manufacturer updated");
    } else {
        tracing::warn!(manufacturer_id = id, "Manufacturer update matched no row");
    }
    Ok(Json(MutationResponse::ok()))
}

/// DELETE /api/manufacturers/{id}
///
/// An unknown id still reports success.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MutationResponse>> {
    if ManufacturerRepo::delete(&state.pool, id).await? {
        tracing::info!(manufacturer_id = id, "Manufacturer deleted");
    } else {
        tracing::warn!(manufacturer_id = id, "Manufacturer delete matched no row");
    }
    Ok(Json(MutationResponse::ok()))
}
