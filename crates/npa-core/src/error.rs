//! Error types for `npa-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("title is required")]
  BadTitle,

  #[error("bad act type")]
  BadType,

  #[error("bad date format, want YYYY-MM-DD")]
  BadDate,

  #[error("bad ID")]
  BadId,

  #[error("act not found")]
  NotFound,

  /// A backend failure with no domain meaning.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
