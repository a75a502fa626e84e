//! HTTP layer for the `datagen` operations.
//!
//! ## Structure
//!
//! - [`config`] - CLI/env configuration.
//! - [`error`] - mapping of `datagen` errors onto HTTP responses.
//! - [`handler`] - axum router and request handlers.
//! - [`shutdown`] - signals that stop the server.
//! - [`telemetry`] - `tracing-subscriber` setup.

pub mod config;
pub mod error;
pub mod handler;
pub mod shutdown;
pub mod telemetry;
