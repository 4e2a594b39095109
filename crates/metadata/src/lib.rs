//! Record store abstraction and implementations for corpus.
//!
//! This crate provides the persistence layer for analyzed strings:
//! - Conditional insert with atomic uniqueness on id and value
//! - Exact-value lookup and deletion
//! - Full scans in deterministic order for the filter engine

pub mod error;
pub mod models;
pub mod repos;
pub mod store;

pub use error::{MetadataError, MetadataResult};
pub use models::StringRow;
pub use repos::StringRepo;
pub use store::{MetadataStore, SqliteStore};

use corpus_core::config::MetadataConfig;
use std::sync::Arc;

/// Create a metadata store from configuration.
pub async fn from_config(config: &MetadataConfig) -> MetadataResult<Arc<dyn MetadataStore>> {
    match config {
        MetadataConfig::Sqlite { path } => {
            let store = SqliteStore::new(path).await?;
            Ok(Arc::new(store) as Arc<dyn MetadataStore>)
        }
    }
}
