//! Directory client adapter.
//!
//! The refresh engine only sees the `DirectoryClient` trait; the Microsoft
//! Graph implementation lives in `graph`, the client-credentials token cache
//! in `token`.

pub mod graph;
pub mod token;

use async_trait::async_trait;

use secretwatch_core::directory::Application;
use secretwatch_core::error::Result;

pub use graph::GraphDirectoryClient;

/// Source of application registrations.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// List applications with their password credentials (single page).
    async fn list_applications(&self) -> Result<Vec<Application>>;
}
