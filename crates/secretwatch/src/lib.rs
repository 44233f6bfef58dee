//! Top-level facade crate for secretwatch.
//!
//! Re-exports the core model and the exporter library so users can depend on a single crate.

pub mod core {
    pub use secretwatch_core::*;
}

pub mod exporter {
    pub use secretwatch_exporter::*;
}
