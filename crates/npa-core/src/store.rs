//! The `ActStore` trait.
//!
//! Implemented by storage backends (e.g. `npa-store-memory`). The
//! application service depends on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use crate::{
  Result,
  act::{Act, ActId, ActQuery, NewAct},
};

/// Abstraction over a legal-act store backend.
///
/// The backend owns id assignment: ids come from a counter that only moves
/// forward and are never reused, even after deletion.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ActStore: Send + Sync {
  /// Assign the next id to `candidate`, append it, and return the stored act.
  fn create(
    &self,
    candidate: NewAct,
  ) -> impl Future<Output = Result<Act>> + Send + '_;

  /// Return a copy of the act with `id`, or [`Error::NotFound`].
  ///
  /// [`Error::NotFound`]: crate::Error::NotFound
  fn get(&self, id: ActId) -> impl Future<Output = Result<Act>> + Send + '_;

  /// All acts matching `query`, in insertion order. Never fails for an
  /// empty result.
  fn list<'a>(
    &'a self,
    query: &'a ActQuery,
  ) -> impl Future<Output = Result<Vec<Act>>> + Send + 'a;

  /// Remove the act with `id`, preserving the order of the rest.
  fn delete(&self, id: ActId) -> impl Future<Output = Result<()>> + Send + '_;
}
