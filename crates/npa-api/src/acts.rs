//! Handlers for `/acts` endpoints.
//!
//! | Method   | Path         | Notes |
//! |----------|--------------|-------|
//! | `GET`    | `/acts`      | Optional `?type=<tag>&q=<text>`; returns `{total, items}` |
//! | `POST`   | `/acts`      | Body: `{"title":"...","type":"decree","date":"2025-10-01"}`; 201 |
//! | `GET`    | `/acts/{id}` | 404 if not found |
//! | `DELETE` | `/acts/{id}` | 204 on success |

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use npa_core::{
  Error,
  act::{Act, ActId, ActQuery, CreateActRequest},
  store::ActStore,
  validate::parse_id,
};
use serde::Serialize;
use tracing::debug;

use crate::{AppState, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

/// List filters taken from the query string. A repeated key keeps its first
/// value; unknown keys are ignored.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListParams {
  pub act_type: Option<String>,
  pub q:        Option<String>,
}

impl ListParams {
  pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
    let mut params = Self::default();
    for (key, value) in pairs {
      let slot = match key.as_str() {
        "type" => &mut params.act_type,
        "q" => &mut params.q,
        _ => continue,
      };
      slot.get_or_insert(value);
    }
    params
  }
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
  pub total: usize,
  pub items: Vec<Act>,
}

/// `GET /acts[?type=<tag>][&q=<text>]`
pub async fn list<S: ActStore>(
  State(state): State<AppState<S>>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ListResponse>, ApiError> {
  let params = ListParams::from_pairs(pairs);
  let query = ActQuery::new(params.act_type, params.q);
  let items = state.service.list(&query).await?;
  Ok(Json(ListResponse { total: items.len(), items }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /acts`: returns 201 + the stored [`Act`].
pub async fn create<S: ActStore>(
  State(state): State<AppState<S>>,
  body: Result<Json<CreateActRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
  let Json(request) = body.map_err(|rejection| {
    debug!(%rejection, "rejected create body");
    ApiError::BadRequest("invalid JSON".to_owned())
  })?;
  let act = state.service.create(request).await?;
  Ok((StatusCode::CREATED, Json(act)))
}

/// Any segment that cannot even be extracted (e.g. invalid UTF-8) is a bad
/// id like any other.
fn path_id(
  segment: Result<Path<String>, PathRejection>,
) -> Result<ActId, Error> {
  let Path(text) = segment.map_err(|rejection| {
    debug!(%rejection, "rejected id segment");
    Error::BadId
  })?;
  parse_id(&text)
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /acts/{id}`
pub async fn get_one<S: ActStore>(
  State(state): State<AppState<S>>,
  id: Result<Path<String>, PathRejection>,
) -> Result<Json<Act>, ApiError> {
  let id = path_id(id)?;
  Ok(Json(state.service.get(id).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /acts/{id}`
pub async fn delete_one<S: ActStore>(
  State(state): State<AppState<S>>,
  id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
  let id = path_id(id)?;
  state.service.delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
