//! Handlers for `/export`: document downloads for a single car.
//!
//! All three share one fetch step, so a missing car is a 404 for every
//! document kind.

use automir_core::documents::{CarSheet, DocumentKind};
use automir_core::error::CoreError;
use automir_core::types::DbId;
use automir_db::repositories::CarRepo;
use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/export/contract/{car_id}
pub async fn contract(
    State(state): State<AppState>,
    Path(car_id): Path<DbId>,
) -> AppResult<Response> {
    export(&state, DocumentKind::Contract, car_id).await
}

/// GET /api/export/acceptance-act/{car_id}
pub async fn acceptance_act(
    State(state): State<AppState>,
    Path(car_id): Path<DbId>,
) -> AppResult<Response> {
    export(&state, DocumentKind::AcceptanceAct, car_id).await
}

/// GET /api/export/receipt/{car_id}
pub async fn receipt(
    State(state): State<AppState>,
    Path(car_id): Path<DbId>,
) -> AppResult<Response> {
    export(&state, DocumentKind::Receipt, car_id).await
}

async fn export(state: &AppState, kind: DocumentKind, car_id: DbId) -> AppResult<Response> {
    let details = CarRepo::find_details(&state.pool, car_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Car",
            id: car_id,
        }))?;

    let sheet = CarSheet::from(details);
    let today = chrono::Local::now().date_naive();
    let document = state.documents.render(kind, &sheet, today)?;

    let disposition = HeaderValue::from_str(&document.content_disposition())
        .map_err(|e| AppError::InternalError(format!("Invalid file name header: {e}")))?;

    tracing::info!(car_id, kind = kind.as_str(), "Document exported");

    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static(document.content_type())),
            (CONTENT_DISPOSITION, disposition),
        ],
        document.bytes,
    )
        .into_response())
}
