//! [`MemoryStore`]: the in-memory implementation of [`ActStore`].

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::trace;

use npa_core::{
  Error, Result,
  act::{Act, ActId, ActQuery, NewAct},
  store::ActStore,
};

// ─── Store ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Inner {
  /// Insertion order; ids are strictly increasing along the vector.
  acts:    Vec<Act>,
  last_id: ActId,
}

/// A legal-act store held entirely in process memory.
///
/// Cloning is cheap and shares state, since the inner collection is
/// reference-counted. Use [`MemoryStore::new`] for an independent instance.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Number of acts currently stored.
  pub async fn len(&self) -> usize { self.inner.read().await.acts.len() }

  pub async fn is_empty(&self) -> bool { self.len().await == 0 }
}

impl ActStore for MemoryStore {
  async fn create(&self, candidate: NewAct) -> Result<Act> {
    let mut inner = self.inner.write().await;
    inner.last_id += 1;
    let act = candidate.with_id(inner.last_id);
    inner.acts.push(act.clone());
    trace!(id = act.id, total = inner.acts.len(), "stored act");
    Ok(act)
  }

  async fn get(&self, id: ActId) -> Result<Act> {
    let inner = self.inner.read().await;
    inner
      .acts
      .iter()
      .find(|a| a.id == id)
      .cloned()
      .ok_or(Error::NotFound)
  }

  async fn list(&self, query: &ActQuery) -> Result<Vec<Act>> {
    let inner = self.inner.read().await;
    Ok(
      inner
        .acts
        .iter()
        .filter(|a| query.matches(a))
        .cloned()
        .collect(),
    )
  }

  async fn delete(&self, id: ActId) -> Result<()> {
    let mut inner = self.inner.write().await;
    let pos = inner
      .acts
      .iter()
      .position(|a| a.id == id)
      .ok_or(Error::NotFound)?;
    inner.acts.remove(pos);
    trace!(id, total = inner.acts.len(), "removed act");
    Ok(())
  }
}
