//! Search client module for Cinesearch
//!
//! This module contains the search client abstraction, the OMDb
//! implementation and an in-process fake used by tests.

pub mod base;
pub mod fake;
pub mod omdb;

pub use base::{MovieSummary, SearchClient, SearchResult};
pub use omdb::OmdbClient;

#[cfg(test)]
pub use base::MockSearchClient;

use crate::config::ApiConfig;
use crate::error::Result;
use std::sync::Arc;

/// Create the search client described by `config`
///
/// # Errors
///
/// Returns error if the HTTP client cannot be initialized
pub fn create_client(config: &ApiConfig) -> Result<Arc<dyn SearchClient>> {
    Ok(Arc::new(OmdbClient::new(config.clone())?))
}
