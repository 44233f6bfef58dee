//! In-process metric registry and its Prometheus text rendering.
//!
//! Values are stored as atomics in a sharded map and rendered by the
//! `/metrics` handler; the refresh task is the only writer.

pub mod metrics;

pub use metrics::{ExpiryRegistry, EXPIRY_METRIC};
