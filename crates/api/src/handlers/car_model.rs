//! Handlers for the `/models` resource.

use automir_core::types::DbId;
use automir_db::models::car_model::{CarModel, CarModelInput};
use automir_db::repositories::CarModelRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::response::MutationResponse;
use crate::state::AppState;

/// GET /api/models
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CarModel>>> {
    let models = CarModelRepo::list(&state.pool).await?;
    Ok(Json(models))
}

/// POST /api/models
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CarModelInput>,
) -> AppResult<(StatusCode, Json<MutationResponse>)> {
    let id = CarModelRepo::create(&state.pool, &input).await?;
    tracing::info!(model_id = id, "Model created");
    Ok((StatusCode::CREATED, Json(MutationResponse::created(id))))
}

/// PUT /api/models/{id}
///
/// Replaces every field. An unknown id still reports success.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CarModelInput>,
) -> AppResult<Json<MutationResponse>> {
    if CarModelRepo::update(&state.pool, id, &input).await? {
        tracing::info!(model_id = id, "Model updated");
    } else {
        tracing::warn!(model_id = id, "Model update matched no row");
    }
    Ok(Json(MutationResponse::ok()))
}

/// DELETE /api/models/{id}
///
/// An unknown id still reports success.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MutationResponse>> {
    if CarModelRepo::delete(&state.pool, id).await? {
        tracing::info!(model_id = id, "Model deleted");
    } else {
        tracing::warn!(model_id = id, "Model delete matched no row");
    }
    Ok(Json(MutationResponse::ok()))
}
