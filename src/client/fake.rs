//! In-process fake search client for controller tests
//!
//! This module provides [`FakeSearchClient`] and [`FakeSearchHandle`], an
//! in-process pair that replaces the network in tests. Every call to
//! [`SearchClient::search`] is parked until the test answers it, so the test
//! decides in which order requests complete.
//!
//! ```text
//! controller search() --> calls_tx --> calls_rx (handle.next_call())
//! handle call.respond() --> oneshot --> search() returns
//! ```
//!
//! # Example
//!
//! ```
//! use cinesearch::client::fake::FakeSearchClient;
//! use cinesearch::client::{SearchClient, SearchResult};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (client, mut handle) = FakeSearchClient::new();
//!
//! let pending = tokio::spawn(async move { client.search("dune", 1).await });
//!
//! let call = handle.next_call().await.unwrap();
//! assert_eq!(call.term, "dune");
//! call.respond(Ok(SearchResult::default()));
//!
//! assert!(pending.await.unwrap().is_ok());
//! # }
//! ```

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::client::{SearchClient, SearchResult};
use crate::error::SearchClientError;

/// Outcome a test hands back for a parked call
pub type FakeResponse = Result<SearchResult, SearchClientError>;

/// A search call waiting for the test to answer it
#[derive(Debug)]
pub struct PendingSearch {
    /// Term the client was asked for
    pub term: String,
    /// Page the client was asked for
    pub page: u32,
    responder: oneshot::Sender<FakeResponse>,
}

impl PendingSearch {
    /// Complete the call with `response`
    ///
    /// A caller that has already gone away is ignored.
    pub fn respond(self, response: FakeResponse) {
        if self.responder.send(response).is_err() {
            tracing::debug!(
                "Fake search caller for {:?} page {} is gone",
                self.term,
                self.page
            );
        }
    }

    /// Complete the call successfully
    pub fn succeed(self, result: SearchResult) {
        self.respond(Ok(result));
    }

    /// Complete the call with an error
    pub fn fail(self, error: SearchClientError) {
        self.respond(Err(error));
    }
}

/// Search client whose calls are answered by a [`FakeSearchHandle`]
#[derive(Debug, Clone)]
pub struct FakeSearchClient {
    calls_tx: mpsc::UnboundedSender<PendingSearch>,
}

/// Test-side end of a [`FakeSearchClient`]
#[derive(Debug)]
pub struct FakeSearchHandle {
    calls_rx: mpsc::UnboundedReceiver<PendingSearch>,
}

impl FakeSearchClient {
    /// Create a connected client/handle pair
    pub fn new() -> (Self, FakeSearchHandle) {
        let (calls_tx, calls_rx) = mpsc::unbounded_channel();
        (Self { calls_tx }, FakeSearchHandle { calls_rx })
    }
}

impl FakeSearchHandle {
    /// Wait for the next search call
    ///
    /// Returns `None` once every client clone has been dropped.
    pub async fn next_call(&mut self) -> Option<PendingSearch> {
        self.calls_rx.recv().await
    }

    /// Take the next search call if one has already been made
    pub fn try_next_call(&mut self) -> Option<PendingSearch> {
        self.calls_rx.try_recv().ok()
    }
}

#[async_trait]
impl SearchClient for FakeSearchClient {
    async fn search(&self, term: &str, page: u32) -> FakeResponse {
        let (responder, response_rx) = oneshot::channel();
        let call = PendingSearch {
            term: term.to_string(),
            page,
            responder,
        };

        if self.calls_tx.send(call).is_err() {
            return Err(SearchClientError::Transport(
                "fake search handle dropped".to_string(),
            ));
        }

        response_rx.await.unwrap_or_else(|_| {
            Err(SearchClientError::Transport(
                "fake search call dropped without a response".to_string(),
            ))
        })
    }
}
