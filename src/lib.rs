//! Cinesearch - movie database search library
//!
//! This library provides the pieces behind the `cinesearch` CLI: a search
//! client for an OMDb-style API, the search/pagination session state, and
//! the controller that keeps the two consistent while requests race.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `client`: Search client trait, OMDb implementation and a test fake
//! - `session`: Search session state and its request-id guarded transitions
//! - `controller`: User intents, fetch dispatch and settle handling
//! - `view`: Terminal rendering of a session
//! - `commands`: CLI command handlers (browse, search)
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use cinesearch::client::create_client;
//! use cinesearch::controller::SearchController;
//! use cinesearch::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     let client = create_client(&config.api)?;
//!     let mut controller = SearchController::new(client, config.search.default_query.clone());
//!     controller.mount();
//!     controller.settle_latest().await;
//!     println!("{}", controller.session().heading(&config.search.default_label));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use client::{MovieSummary, SearchClient, SearchResult};
pub use config::Config;
pub use controller::{FetchOutcome, SearchController};
pub use error::{CinesearchError, Result, SearchClientError};
pub use session::{FetchStatus, RequestId, SearchSession};
