//! Liveness probe.

use axum::Json;
use serde_json::{Value, json};

/// `GET /ping`
pub async fn ping() -> Json<Value> { Json(json!({ "message": "pong" })) }
