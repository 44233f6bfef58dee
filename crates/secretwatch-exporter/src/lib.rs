//! secretwatch exporter library entry.
//!
//! This crate wires the directory adapter, the refresh engine, the expiry
//! registry and the `/metrics` endpoint into one exporter. It is consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod directory;
pub mod obs;
pub mod ops;
pub mod refresh;
pub mod router;
