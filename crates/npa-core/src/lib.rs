//! Core types and trait definitions for the legal-act registry.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! Backends implement [`store::ActStore`]; transports drive
//! [`service::ActService`].

pub mod act;
pub mod error;
pub mod service;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
