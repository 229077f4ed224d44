//! In-memory backend for the legal-act store.
//!
//! Everything lives in a `Vec` behind a single [`tokio::sync::RwLock`]:
//! reads share the lock, `create` and `delete` take it exclusively. Nothing
//! survives a restart.

mod store;

pub use store::MemoryStore;
