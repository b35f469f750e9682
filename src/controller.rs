//! Search controller: user intents in, guarded commits out
//!
//! The controller owns the [`SearchSession`] and is the only thing that
//! mutates it. Each intent runs synchronously against the session and, when
//! it needs data, spawns one fetch on the Tokio runtime. Fetches report back
//! through a channel as [`FetchOutcome`]s; the owner of the controller feeds
//! them to [`SearchController::apply`] (or uses one of the `settle_*`
//! helpers), which commits them through the session's request-id check.
//!
//! ```text
//! on_submit / on_next_page / on_prev_page
//!        │ session.begin_search / go_to_page  -> RequestId
//!        ▼
//!   tokio::spawn(client.search(term, page))
//!        │
//!        ▼ FetchOutcome { request_id, .. }  (completion order)
//!   apply() -> session.commit_success / commit_failure
//!              (dropped unless request_id is the latest)
//! ```
//!
//! Several fetches can be in flight at once. None is ever cancelled: a
//! superseded fetch completes and its outcome is discarded. The last issued
//! request wins, whatever order the network answers in.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::{SearchClient, SearchResult};
use crate::error::SearchClientError;
use crate::session::{RequestId, SearchSession};

/// Settled fetch, tagged with the request it answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Request id allocated when the fetch was issued
    pub request_id: RequestId,
    /// Term that was sent to the client
    pub term: String,
    /// Page that was requested
    pub page: u32,
    /// What the client returned
    pub result: Result<SearchResult, SearchClientError>,
}

/// Bridges user intents to session transitions and search client calls
///
/// Intent methods spawn tasks and must be called from within a Tokio
/// runtime.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use cinesearch::client::fake::FakeSearchClient;
/// use cinesearch::client::SearchResult;
/// use cinesearch::controller::SearchController;
/// use cinesearch::session::FetchStatus;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (client, mut handle) = FakeSearchClient::new();
/// let mut controller = SearchController::new(Arc::new(client), "star-wars");
///
/// controller.on_submit("dune");
/// let call = handle.next_call().await.unwrap();
/// assert_eq!((call.term.as_str(), call.page), ("dune", 1));
/// call.succeed(SearchResult::default());
///
/// assert!(controller.settle_next().await);
/// assert_eq!(controller.session().status(), FetchStatus::Succeeded);
/// # }
/// ```
pub struct SearchController {
    client: Arc<dyn SearchClient>,
    session: SearchSession,
    default_query: String,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl SearchController {
    /// Create a controller with a fresh idle session
    ///
    /// `default_query` is searched on [`mount`](Self::mount) and whenever a
    /// blank term is submitted.
    pub fn new(client: Arc<dyn SearchClient>, default_query: impl Into<String>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            client,
            session: SearchSession::new(),
            default_query: default_query.into(),
            outcome_tx,
            outcome_rx,
        }
    }

    /// Read-only view of the session for rendering
    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn default_query(&self) -> &str {
        &self.default_query
    }

    /// Issue the initial fetch: page 1 of the default query
    pub fn mount(&mut self) -> RequestId {
        let request_id = self.session.begin_search(String::new());
        self.dispatch(request_id, self.default_query.clone(), 1);
        request_id
    }

    /// Record typed text; never fetches
    pub fn on_draft_change(&mut self, text: &str) {
        self.session.set_draft_term(text);
    }

    /// Start a new search for `term` on page 1
    ///
    /// A blank term searches the default query. The draft is cleared.
    pub fn on_submit(&mut self, term: &str) -> RequestId {
        let term = term.trim();
        let request_id = self.session.begin_search(term);
        self.session.set_draft_term(String::new());

        let effective = self.session.active_term(&self.default_query).to_string();
        self.dispatch(request_id, effective, 1);
        request_id
    }

    /// Fetch the page after the current one
    pub fn on_next_page(&mut self) -> RequestId {
        let new_page = self.session.page().saturating_add(1);
        self.change_page(new_page)
    }

    /// Fetch the page before the current one
    ///
    /// On page 1 this does nothing and returns `None`.
    pub fn on_prev_page(&mut self) -> Option<RequestId> {
        let current = self.session.page();
        if current <= 1 {
            tracing::debug!("Already on the first page, ignoring previous-page intent");
            return None;
        }
        Some(self.change_page(current - 1))
    }

    fn change_page(&mut self, new_page: u32) -> RequestId {
        let request_id = self.session.go_to_page(new_page);
        let term = self.session.active_term(&self.default_query).to_string();
        self.dispatch(request_id, term, new_page);
        request_id
    }

    fn dispatch(&self, request_id: RequestId, term: String, page: u32) {
        tracing::info!("Fetching {:?} page {} as request {}", term, page, request_id);

        let client = Arc::clone(&self.client);
        let outcome_tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            // A panicking client still settles its request as a failure
            let fetch_term = term.clone();
            let fetch = tokio::spawn(async move { client.search(&fetch_term, page).await });
            let result = match fetch.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("Fetch task for request {} failed: {}", request_id, e);
                    Err(SearchClientError::Transport(format!("fetch task failed: {}", e)))
                }
            };
            let outcome = FetchOutcome {
                request_id,
                term,
                page,
                result,
            };
            if outcome_tx.send(outcome).is_err() {
                tracing::debug!("Controller gone before request {} settled", request_id);
            }
        });
    }

    /// Commit a settled fetch through the request-id check
    ///
    /// Returns true if the outcome was applied, false if it was stale.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        let FetchOutcome {
            request_id,
            term,
            page,
            result,
        } = outcome;

        let applied = match result {
            Ok(result) => {
                let count = result.movies.len();
                let applied = self.session.commit_success(request_id, result);
                if applied {
                    tracing::debug!(
                        "Request {} committed: {} movies for {:?} page {}",
                        request_id,
                        count,
                        term,
                        page
                    );
                }
                applied
            }
            Err(err) => {
                let applied = self.session.commit_failure(request_id, err.to_string());
                if applied {
                    tracing::warn!("Search for {:?} page {} failed: {}", term, page, err);
                }
                applied
            }
        };

        if !applied {
            tracing::debug!(
                "Dropping stale response {} for {:?} page {} (latest is {})",
                request_id,
                term,
                page,
                self.session.request_id()
            );
        }
        applied
    }

    /// Wait for the next fetch to settle, in completion order
    ///
    /// Every dispatched fetch sends exactly one outcome, panics included.
    /// The controller holds a sender itself, so this never yields `None`
    /// while the controller is alive; the `Option` mirrors the channel API.
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        self.outcome_rx.recv().await
    }

    /// Wait for the next fetch to settle and commit it
    ///
    /// Returns whether that outcome was applied. With no fetch in flight
    /// this waits until one is dispatched.
    pub async fn settle_next(&mut self) -> bool {
        match self.next_outcome().await {
            Some(outcome) => self.apply(outcome),
            None => false,
        }
    }

    /// Commit settled fetches until the latest request has been applied
    ///
    /// Returns immediately if nothing is loading. Otherwise it waits until
    /// the latest request settles, which every fetch eventually does.
    pub async fn settle_latest(&mut self) {
        while self.session.is_loading() {
            match self.next_outcome().await {
                Some(outcome) => {
                    self.apply(outcome);
                }
                None => break,
            }
        }
    }
}
