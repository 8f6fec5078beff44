//! Request extractors.

use automir_core::error::CoreError;
use automir_core::validation::validate_input;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that also runs the DTO's `validator` rules.
///
/// Missing fields, wrong primitive types and rule violations all become
/// [`CoreError::Validation`] (422) before the handler body runs. Malformed
/// JSON and a missing `Content-Type` stay plain bad requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_to_error)?;
        validate_input(&value)?;
        Ok(Self(value))
    }
}

fn json_rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => CoreError::Validation(err.body_text()).into(),
        other => AppError::BadRequest(other.body_text()),
    }
}
