//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler. Wraps the core taxonomy and maps it
/// onto HTTP statuses.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Core(#[from] visage_core::Error),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    use visage_core::Error as Core;
    match self {
      ApiError::Core(Core::Validation(errors)) => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "invalid profile", "details": errors })),
      )
        .into_response(),
      ApiError::Core(e @ Core::MissingWebId(_)) => {
        (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() })))
          .into_response()
      }
      ApiError::Core(e @ Core::NotFound(_)) => {
        (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() })))
          .into_response()
      }
      ApiError::Core(e @ Core::InvalidDataUri) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
          .into_response()
      }
      ApiError::Core(e @ Core::Serialization(_)) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
          .into_response()
      }
      ApiError::Core(e) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
      )
        .into_response(),
    }
  }
}
