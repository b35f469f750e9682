//! Base search client trait and result types
//!
//! Every movie database backend implements [`SearchClient`]. The controller
//! only ever talks to this trait, which keeps the real HTTP client and the
//! in-process fake interchangeable.

use crate::error::SearchClientError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One movie as listed on a search results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Unique identifier (the IMDb id for OMDb)
    pub id: String,
    /// Display title
    pub title: String,
    /// Release year as reported by the remote, e.g. `1977` or `2019–2023`
    pub year: String,
    /// Poster image URL, empty when the remote has none
    pub poster_url: String,
    /// Result kind reported by the remote (`movie`, `series`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl MovieSummary {
    /// Create a movie summary without a result kind
    ///
    /// # Examples
    ///
    /// ```
    /// use cinesearch::client::MovieSummary;
    ///
    /// let movie = MovieSummary::new("tt0076759", "Star Wars", "1977", "");
    /// assert_eq!(movie.title, "Star Wars");
    /// assert!(!movie.has_poster());
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
        poster_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            poster_url: poster_url.into(),
            kind: None,
        }
    }

    /// Returns true if a poster URL is available
    pub fn has_poster(&self) -> bool {
        !self.poster_url.is_empty()
    }
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Movies on the requested page, in the order the remote returned them
    pub movies: Vec<MovieSummary>,
    /// Total number of matches across all pages
    pub total_results: u64,
}

impl SearchResult {
    /// Create a search result page
    pub fn new(movies: Vec<MovieSummary>, total_results: u64) -> Self {
        Self {
            movies,
            total_results,
        }
    }
}

/// Search client trait
///
/// Implementations issue exactly one request per call and never retry or
/// cache. Retrying is left to the user: a new intent allocates a new
/// request.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use cinesearch::client::{SearchClient, SearchResult};
/// use cinesearch::error::SearchClientError;
///
/// struct EmptyClient;
///
/// #[async_trait]
/// impl SearchClient for EmptyClient {
///     async fn search(&self, _term: &str, _page: u32) -> Result<SearchResult, SearchClientError> {
///         Err(SearchClientError::NoResults("Movie not found!".to_string()))
///     }
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Fetch one page of results for `term`
    ///
    /// # Arguments
    ///
    /// * `term` - Search text; callers substitute the default query for blanks
    /// * `page` - 1-based page number
    ///
    /// # Errors
    ///
    /// Returns `SearchClientError::Transport` for network, status or decoding
    /// failures and `SearchClientError::NoResults` when the remote reports
    /// no matches.
    async fn search(&self, term: &str, page: u32) -> Result<SearchResult, SearchClientError>;
}
