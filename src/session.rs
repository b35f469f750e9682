//! Search session state and its transitions
//!
//! [`SearchSession`] is the single source of truth for one search view: the
//! submitted term, the text being typed, the current page, the fetch status
//! and the movies currently on screen. It is a plain state container. It
//! performs no I/O and every transition is synchronous and total.
//!
//! # Request ids
//!
//! Each transition that starts a fetch bumps the session's [`RequestId`] and
//! returns it. The caller tags the in-flight fetch with that id and hands it
//! back to [`SearchSession::commit_success`] or
//! [`SearchSession::commit_failure`] when the fetch settles. A commit whose
//! id is not the latest one is ignored, so a slow response can never
//! overwrite the state of a request issued after it.
//!
//! ```text
//! Idle ──▶ Loading ──▶ Succeeded
//!             ▲   └──▶ Failed
//!             └──────────┘ (any new search or page)
//! ```
//!
//! # Example
//!
//! ```
//! use cinesearch::client::SearchResult;
//! use cinesearch::session::{FetchStatus, SearchSession};
//!
//! let mut session = SearchSession::new();
//! let first = session.begin_search("alien");
//! let second = session.begin_search("dune");
//!
//! assert!(!session.commit_success(first, SearchResult::default()));
//! assert_eq!(session.status(), FetchStatus::Loading);
//!
//! assert!(session.commit_success(second, SearchResult::default()));
//! assert_eq!(session.status(), FetchStatus::Succeeded);
//! assert_eq!(session.search_term(), "dune");
//! ```

use crate::client::{MovieSummary, SearchResult};
use std::fmt;

/// Number of results the remote returns per page
pub const RESULTS_PER_PAGE: u64 = 10;

/// Identifier of an issued fetch, strictly increasing within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(u64);

impl RequestId {
    /// Raw counter value
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fetch status of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// No fetch has been issued yet
    #[default]
    Idle,
    /// The latest fetch is in flight
    Loading,
    /// The latest fetch succeeded
    Succeeded,
    /// The latest fetch failed; see [`SearchSession::error`]
    Failed,
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// State of one search/pagination view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    search_term: String,
    draft_term: String,
    page: u32,
    status: FetchStatus,
    error: Option<String>,
    movies: Vec<MovieSummary>,
    total_results: u64,
    request_id: RequestId,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    /// Create an idle session on page 1
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            draft_term: String::new(),
            page: 1,
            status: FetchStatus::Idle,
            error: None,
            movies: Vec::new(),
            total_results: 0,
            request_id: RequestId::default(),
        }
    }

    /// Last submitted term; empty means the default query is active
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Text typed but not yet submitted
    pub fn draft_term(&self) -> &str {
        &self.draft_term
    }

    /// Current 1-based page
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Error message of the latest fetch, only set while `Failed`
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Movies of the last successful fetch
    pub fn movies(&self) -> &[MovieSummary] {
        &self.movies
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    /// Id of the most recently issued fetch
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Term to send to the remote: the submitted one, or `default_query`
    /// when nothing (or only whitespace) was submitted
    pub fn active_term<'a>(&'a self, default_query: &'a str) -> &'a str {
        if self.search_term.trim().is_empty() {
            default_query
        } else {
            &self.search_term
        }
    }

    /// Number of pages implied by `total_results`
    pub fn total_pages(&self) -> u64 {
        self.total_results.div_ceil(RESULTS_PER_PAGE)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// Whether the last known total suggests another page exists
    pub fn has_next_page(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    /// Results caption for the rendering layer
    ///
    /// Empty while an error is shown, the default label while no term has
    /// been submitted, and a result summary otherwise.
    pub fn heading(&self, default_label: &str) -> String {
        if self.error.is_some() {
            String::new()
        } else if self.search_term.trim().is_empty() {
            default_label.to_string()
        } else {
            format!(
                "Results of search for {}, {} total results",
                self.search_term, self.total_results
            )
        }
    }

    /// Start a new search for `term` on page 1
    ///
    /// Returns the id the caller must tag the fetch with.
    pub fn begin_search(&mut self, term: impl Into<String>) -> RequestId {
        self.search_term = term.into();
        self.page = 1;
        self.start_request()
    }

    /// Move to `new_page` of the current search
    ///
    /// Page 0 is not representable; it is raised to 1. Returns the id the
    /// caller must tag the fetch with.
    pub fn go_to_page(&mut self, new_page: u32) -> RequestId {
        self.page = new_page.max(1);
        self.start_request()
    }

    fn start_request(&mut self) -> RequestId {
        self.request_id = self.request_id.next();
        self.status = FetchStatus::Loading;
        tracing::debug!(
            "Session request {} started: term={:?}, page={}",
            self.request_id,
            self.search_term,
            self.page
        );
        self.request_id
    }

    /// Apply a successful fetch if it belongs to the latest request
    ///
    /// Returns false (and changes nothing) for stale responses.
    pub fn commit_success(&mut self, request_id: RequestId, result: SearchResult) -> bool {
        if request_id != self.request_id {
            return false;
        }
        self.movies = result.movies;
        self.total_results = result.total_results;
        self.status = FetchStatus::Succeeded;
        self.error = None;
        true
    }

    /// Apply a failed fetch if it belongs to the latest request
    ///
    /// The movies of the previous successful page stay in place. Returns
    /// false (and changes nothing) for stale responses.
    pub fn commit_failure(&mut self, request_id: RequestId, message: impl Into<String>) -> bool {
        if request_id != self.request_id {
            return false;
        }
        let message = message.into();
        self.status = FetchStatus::Failed;
        self.error = Some(if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        });
        true
    }

    /// Record text typed into the search box
    pub fn set_draft_term(&mut self, text: impl Into<String>) {
        self.draft_term = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(prefix: &str, count: usize, total: u64) -> SearchResult {
        let movies = (0..count)
            .map(|i| {
                MovieSummary::new(
                    format!("{}{}", prefix, i),
                    format!("{} {}", prefix, i),
                    "2000",
                    "",
                )
            })
            .collect();
        SearchResult::new(movies, total)
    }

    #[test]
    fn test_new_session_is_idle_on_page_one() {
        let session = SearchSession::new();
        assert_eq!(session.page(), 1);
        assert_eq!(session.status(), FetchStatus::Idle);
        assert_eq!(session.request_id().value(), 0);
        assert!(session.movies().is_empty());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_begin_search_resets_page_and_bumps_request() {
        let mut session = SearchSession::new();
        session.go_to_page(4);
        let id = session.begin_search("dune");
        assert_eq!(session.search_term(), "dune");
        assert_eq!(session.page(), 1);
        assert_eq!(session.status(), FetchStatus::Loading);
        assert_eq!(id, session.request_id());
        assert_eq!(id.value(), 2);
    }

    #[test]
    fn test_go_to_page_keeps_term() {
        let mut session = SearchSession::new();
        session.begin_search("alien");
        let id = session.go_to_page(3);
        assert_eq!(session.search_term(), "alien");
        assert_eq!(session.page(), 3);
        assert_eq!(id, session.request_id());
    }

    #[test]
    fn test_go_to_page_zero_is_raised_to_one() {
        let mut session = SearchSession::new();
        session.go_to_page(0);
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn test_request_ids_strictly_increase() {
        let mut session = SearchSession::new();
        let a = session.begin_search("a");
        let b = session.go_to_page(2);
        let c = session.begin_search("c");
        assert!(a < b && b < c);
    }

    #[test]
    fn test_commit_success_applies_latest() {
        let mut session = SearchSession::new();
        let id = session.begin_search("dune");
        assert!(session.commit_success(id, page_of("d", 10, 42)));
        assert_eq!(session.status(), FetchStatus::Succeeded);
        assert_eq!(session.movies().len(), 10);
        assert_eq!(session.total_results(), 42);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_commit_success_ignores_stale_request() {
        let mut session = SearchSession::new();
        let stale = session.begin_search("a");
        let latest = session.begin_search("b");
        assert!(session.commit_success(latest, page_of("b", 2, 2)));
        let before = session.clone();

        assert!(!session.commit_success(stale, page_of("a", 5, 5)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_commit_failure_keeps_previous_movies() {
        let mut session = SearchSession::new();
        let first = session.begin_search("dune");
        session.commit_success(first, page_of("d", 2, 20));
        let movies = session.movies().to_vec();

        let second = session.go_to_page(2);
        assert!(session.commit_failure(second, "Transport error: timeout"));
        assert_eq!(session.status(), FetchStatus::Failed);
        assert_eq!(session.error(), Some("Transport error: timeout"));
        assert_eq!(session.movies(), movies.as_slice());
        assert_eq!(session.total_results(), 20);
    }

    #[test]
    fn test_commit_failure_ignores_stale_request() {
        let mut session = SearchSession::new();
        let stale = session.begin_search("a");
        session.begin_search("b");
        assert!(!session.commit_failure(stale, "boom"));
        assert_eq!(session.status(), FetchStatus::Loading);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_commit_failure_with_blank_message_still_sets_error() {
        let mut session = SearchSession::new();
        let id = session.begin_search("a");
        session.commit_failure(id, "  ");
        assert_eq!(session.error(), Some("Unknown error"));
    }

    #[test]
    fn test_success_after_failure_clears_error() {
        let mut session = SearchSession::new();
        let id = session.begin_search("a");
        session.commit_failure(id, "Movie not found!");
        let retry = session.begin_search("a");
        session.commit_success(retry, page_of("a", 1, 1));
        assert!(session.error().is_none());
        assert_eq!(session.status(), FetchStatus::Succeeded);
    }

    #[test]
    fn test_set_draft_term_touches_only_draft() {
        let mut session = SearchSession::new();
        let id = session.begin_search("dune");
        session.go_to_page(2);
        let before_id = session.request_id();
        for text in ["a", "al", "ali", "alien"] {
            session.set_draft_term(text);
        }
        assert_eq!(session.draft_term(), "alien");
        assert_eq!(session.search_term(), "dune");
        assert_eq!(session.page(), 2);
        assert_eq!(session.request_id(), before_id);
        assert!(id < before_id);
    }

    #[test]
    fn test_active_term_falls_back_to_default() {
        let mut session = SearchSession::new();
        assert_eq!(session.active_term("star-wars"), "star-wars");
        session.begin_search("   ");
        assert_eq!(session.active_term("star-wars"), "star-wars");
        session.begin_search("dune");
        assert_eq!(session.active_term("star-wars"), "dune");
    }

    #[test]
    fn test_page_bounds_helpers() {
        let mut session = SearchSession::new();
        let id = session.begin_search("dune");
        session.commit_success(id, page_of("d", 10, 25));
        assert_eq!(session.total_pages(), 3);
        assert!(!session.has_previous_page());
        assert!(session.has_next_page());

        let id = session.go_to_page(3);
        session.commit_success(id, page_of("d", 5, 25));
        assert!(session.has_previous_page());
        assert!(!session.has_next_page());
    }

    #[test]
    fn test_heading_variants() {
        let mut session = SearchSession::new();
        assert_eq!(session.heading("Star Wars franchise"), "Star Wars franchise");

        let id = session.begin_search("dune");
        session.commit_success(id, page_of("d", 10, 50));
        assert_eq!(
            session.heading("Star Wars franchise"),
            "Results of search for dune, 50 total results"
        );

        let id = session.go_to_page(2);
        session.commit_failure(id, "Movie not found!");
        assert_eq!(session.heading("Star Wars franchise"), "");
    }

    #[test]
    fn test_display_impls() {
        assert_eq!(RequestId(7).to_string(), "#7");
        assert_eq!(FetchStatus::Loading.to_string(), "loading");
        assert_eq!(FetchStatus::default(), FetchStatus::Idle);
    }
}
