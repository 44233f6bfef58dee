//! secretwatch core: directory model, expiry samples, and the shared error type.
//!
//! This crate defines the data contracts between the directory adapter, the
//! refresh engine and the metric registry. It carries no transport or runtime
//! dependencies so it can be reused by tests and tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed upstream data surfaces as `MonitorError` or as a placeholder,
//! never as a crash of the refresh task.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod directory;
pub mod error;

/// Shared result type.
pub use error::{ErrorClass, MonitorError, Result};
