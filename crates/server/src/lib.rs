//! HTTP API server for the corpus string analysis service.
//!
//! This crate provides the HTTP control plane:
//! - String creation with content-hash deduplication
//! - Exact-value lookup and deletion
//! - Structured filter queries
//! - Natural-language filter queries

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
