//! [`ActService`]: the use-case layer between transports and the store.

use tracing::{debug, info};

use crate::{
  Error, Result,
  act::{Act, ActId, ActQuery, ActType, CreateActRequest, NewAct},
  store::ActStore,
  validate::{parse_date, validate_create},
};

/// Validates input, enforces the positive-id rule, and delegates to an
/// injected [`ActStore`].
///
/// Cloning is as cheap as cloning the store, which backends keep
/// reference-counted.
#[derive(Debug, Clone)]
pub struct ActService<S> {
  store: S,
}

impl<S: ActStore> ActService<S> {
  pub fn new(store: S) -> Self { Self { store } }

  #[cfg(test)]
  pub(crate) fn store(&self) -> &S { &self.store }

  /// Validate `request` and store it. Validation errors are returned as-is.
  pub async fn create(&self, request: CreateActRequest) -> Result<Act> {
    validate_create(&request)?;

    let candidate = NewAct {
      title:    request.title.trim().to_owned(),
      act_type: request.act_type.parse::<ActType>()?,
      date:     parse_date(&request.date)?,
    };

    let act = self.store.create(candidate).await?;
    info!(id = act.id, act_type = %act.act_type, "act created");
    Ok(act)
  }

  pub async fn get(&self, id: ActId) -> Result<Act> {
    if id <= 0 {
      return Err(Error::BadId);
    }
    debug!(id, "fetching act");
    self.store.get(id).await
  }

  pub async fn list(&self, query: &ActQuery) -> Result<Vec<Act>> {
    let acts = self.store.list(query).await?;
    debug!(?query, count = acts.len(), "listed acts");
    Ok(acts)
  }

  pub async fn delete(&self, id: ActId) -> Result<()> {
    if id <= 0 {
      return Err(Error::BadId);
    }
    self.store.delete(id).await?;
    info!(id, "act deleted");
    Ok(())
  }
}
