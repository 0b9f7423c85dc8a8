//! Folio Core - Shared domain types.
//!
//! This crate provides the portfolio document model used by the other Folio
//! components:
//! - `server` - HTTP API serving the public site and the admin editor
//! - `integration-tests` - End-to-end tests against a running server
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The `Portfolio` aggregate, its sub-records, and validated
//!   newtypes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
