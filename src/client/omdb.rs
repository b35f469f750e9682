//! OMDb search client implementation for Cinesearch
//!
//! This module implements the [`SearchClient`] trait against the OMDb API
//! (or any server speaking the same JSON dialect). One call maps to one
//! `GET {base_url}/?apikey=..&s=..&page=..` request.

use crate::client::{MovieSummary, SearchClient, SearchResult};
use crate::config::ApiConfig;
use crate::error::{CinesearchError, Result, SearchClientError};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Value OMDb uses for missing fields such as `Poster`
const NOT_AVAILABLE: &str = "N/A";

/// OMDb API client
///
/// # Examples
///
/// ```
/// use cinesearch::client::OmdbClient;
/// use cinesearch::config::ApiConfig;
///
/// let config = ApiConfig {
///     api_key: "secret".to_string(),
///     ..Default::default()
/// };
/// let client = OmdbClient::new(config).unwrap();
/// assert_eq!(client.endpoint(), "https://www.omdbapi.com/");
/// ```
pub struct OmdbClient {
    client: Client,
    config: ApiConfig,
    endpoint: String,
}

/// Search response envelope from OMDb
///
/// `Response` is the string `"True"` or `"False"`; on `"False"` only
/// `Error` is present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbSearchResponse {
    #[serde(default)]
    search: Vec<OmdbMovie>,
    #[serde(default, rename = "totalResults")]
    total_results: Option<String>,
    response: String,
    #[serde(default)]
    error: Option<String>,
}

/// Search hit from OMDb
#[derive(Debug, Deserialize)]
struct OmdbMovie {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
    #[serde(rename = "Type", default)]
    kind: Option<String>,
}

impl From<OmdbMovie> for MovieSummary {
    fn from(movie: OmdbMovie) -> Self {
        let poster_url = if movie.poster == NOT_AVAILABLE {
            String::new()
        } else {
            movie.poster
        };
        Self {
            id: movie.imdb_id,
            title: movie.title,
            year: movie.year,
            poster_url,
            kind: movie.kind,
        }
    }
}

impl OmdbClient {
    /// Create a new OMDb client
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("cinesearch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CinesearchError::Http)?;

        let endpoint = format!("{}/", config.base_url.trim_end_matches('/'));

        tracing::info!(
            "Initialized OMDb client: endpoint={}, timeout={}s",
            endpoint,
            config.timeout_seconds
        );

        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    /// Get the URL every search request is sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn query_params(&self, term: &str, page: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("apikey", self.config.api_key.clone()),
            ("s", term.to_string()),
            ("page", page.to_string()),
        ];
        if let Some(kind) = &self.config.result_type {
            params.push(("type", kind.clone()));
        }
        params
    }
}

/// Turn a decoded OMDb envelope into a result page
fn parse_search_response(
    response: OmdbSearchResponse,
) -> std::result::Result<SearchResult, SearchClientError> {
    if !response.response.eq_ignore_ascii_case("true") {
        let message = response
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| "No results found".to_string());
        return Err(SearchClientError::NoResults(message));
    }

    let movies: Vec<MovieSummary> = response.search.into_iter().map(Into::into).collect();

    let total_results = match response.total_results {
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            SearchClientError::Transport(format!("Invalid totalResults value: {}", raw))
        })?,
        None => movies.len() as u64,
    };

    Ok(SearchResult::new(movies, total_results))
}

#[async_trait]
impl SearchClient for OmdbClient {
    async fn search(
        &self,
        term: &str,
        page: u32,
    ) -> std::result::Result<SearchResult, SearchClientError> {
        tracing::debug!("Searching OMDb: term={:?}, page={}", term, page);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&self.query_params(term, page))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("OMDb request failed: {}", e);
                SearchClientError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::warn!("Failed to read OMDb response body: {}", e);
            SearchClientError::from(e)
        })?;

        if !status.is_success() {
            // OMDb explains most rejections (bad key, limit reached) in the body
            let detail = serde_json::from_str::<OmdbSearchResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            tracing::error!("OMDb returned error {}: {}", status, detail);
            return Err(SearchClientError::Transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                detail
            )));
        }

        let decoded: OmdbSearchResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse OMDb response: {}", e);
            SearchClientError::Transport(format!("Failed to parse search response: {}", e))
        })?;

        let result = parse_search_response(decoded)?;
        tracing::debug!(
            "OMDb returned {} movies ({} total) for {:?} page {}",
            result.movies.len(),
            result.total_results,
            term,
            page
        );
        Ok(result)
    }
}
