//! Axum extractors whose rejections use the `ApiResponse` envelope
//!
//! - `ValidatedJson<T>`: handlers never see malformed or invalid bodies
//! - `ApiPath<T>`: unparseable path segments become 400 `INVALID_PARAMETER`

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::PathRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::response::ApiError;

#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // 1. Extract JSON body
        let Json(value): Json<T> = Json::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e.body_text())))?;

        // 2. Field-level validation
        value
            .validate()
            .map_err(|e| ApiError::bad_request(describe(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// `Path<T>` with an `ApiError` rejection
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ApiPath(value))
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        ApiError::bad_request(format!("Invalid path: {}", e.body_text()))
    }
}

/// Flatten validation errors into one line: `field: message; field: message`
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
