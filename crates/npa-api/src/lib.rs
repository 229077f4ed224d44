//! JSON REST API for the legal-act registry.
//!
//! Exposes an axum [`Router`] backed by an [`ActService`] over any
//! [`ActStore`]. Binding, TLS, and process concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let service = ActService::new(MemoryStore::new());
//! let app = npa_api::api_router(service, Arc::new(RequestCounter::new()));
//! axum::serve(listener, app).await?;
//! ```

pub mod acts;
pub mod error;
pub mod health;
pub mod metrics;

use std::{any::Any, sync::Arc};

use axum::{
  Router,
  extract::FromRef,
  middleware,
  response::{IntoResponse, Response},
  routing::get,
};
use npa_core::{service::ActService, store::ActStore};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::error;

pub use error::ApiError;
pub use metrics::RequestCounter;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub service: ActService<S>,
  pub metrics: Arc<RequestCounter>,
}

impl<S: Clone> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      service: self.service.clone(),
      metrics: Arc::clone(&self.metrics),
    }
  }
}

impl<S> FromRef<AppState<S>> for Arc<RequestCounter> {
  fn from_ref(state: &AppState<S>) -> Self { Arc::clone(&state.metrics) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full API router for `service`.
///
/// Every inbound request bumps `counter` exactly once, before routing.
pub fn api_router<S>(
  service: ActService<S>,
  counter: Arc<RequestCounter>,
) -> Router<()>
where
  S: ActStore + Clone + 'static,
{
  let state = AppState { service, metrics: Arc::clone(&counter) };

  Router::new()
    .route("/ping", get(health::ping))
    .route("/metrics", get(metrics::handler))
    .route("/acts", get(acts::list::<S>).post(acts::create::<S>))
    .route(
      "/acts/{id}",
      get(acts::get_one::<S>).delete(acts::delete_one::<S>),
    )
    .with_state(state)
    .layer(TraceLayer::new_for_http())
    .layer(CatchPanicLayer::custom(panic_response))
    .layer(middleware::from_fn_with_state(
      counter,
      metrics::count_requests,
    ))
}

/// Turn a handler panic into an opaque 500.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
  let detail = payload
    .downcast_ref::<String>()
    .map(String::as_str)
    .or_else(|| payload.downcast_ref::<&str>().copied())
    .unwrap_or("non-string panic payload");
  error!(detail, "handler panicked");
  ApiError::Internal.into_response()
}

// ─── Integration tests ────────────────────────────────────────────────────────
