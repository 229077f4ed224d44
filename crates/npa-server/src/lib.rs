//! Process wiring for the legal-act registry server.
//!
//! Loads [`ServerConfig`], builds the store → service → router stack, and
//! leaves binding and serving to the binary.

use std::{path::Path, sync::Arc};

use axum::Router;
use npa_api::RequestCounter;
use npa_core::service::ActService;
use npa_store_memory::MemoryStore;
use serde::Deserialize;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Sources, lowest priority first: built-in defaults, the TOML file (if it
/// exists), then `NPA_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

impl ServerConfig {
  pub const DEFAULT_HOST: &'static str = "0.0.0.0";
  pub const DEFAULT_PORT: u16 = 8080;

  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", Self::DEFAULT_HOST)?
      .set_default("port", i64::from(Self::DEFAULT_PORT))?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("NPA").try_parsing(true))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Build the HTTP app over a fresh, empty in-memory store.
pub fn build_app() -> Router {
  let service = ActService::new(MemoryStore::new());
  npa_api::api_router(service, Arc::new(RequestCounter::new()))
}
