//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Domain(#[from] npa_core::Error),

  /// The request could not be decoded; the core was never invoked.
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("internal error")]
  Internal,
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    use npa_core::Error as E;
    match self {
      ApiError::Domain(E::BadTitle | E::BadType | E::BadDate | E::BadId) => {
        StatusCode::BAD_REQUEST
      }
      ApiError::Domain(E::NotFound) => StatusCode::NOT_FOUND,
      ApiError::Domain(E::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let message = match &self {
      ApiError::BadRequest(m) => m.clone(),
      // Never leak backend detail to clients.
      _ if status.is_server_error() => {
        error!(error = %self, "request failed");
        "internal".to_owned()
      }
      ApiError::Domain(npa_core::Error::BadId) => "bad id".to_owned(),
      ApiError::Domain(npa_core::Error::NotFound) => "not found".to_owned(),
      _ => self.to_string(),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
