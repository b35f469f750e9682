//! OMDb client integration tests
//!
//! Tests `OmdbClient` against a `wiremock` mock server standing in for the
//! OMDb API.

use serde_json::json;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cinesearch::client::{OmdbClient, SearchClient};
use cinesearch::config::ApiConfig;
use cinesearch::error::SearchClientError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_client(base_url: &str) -> OmdbClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        timeout_seconds: 5,
        result_type: None,
    };
    OmdbClient::new(config).expect("client builds")
}

fn dune_page() -> serde_json::Value {
    json!({
        "Search": [
            {"Title": "Dune", "Year": "2021", "imdbID": "tt1160419", "Type": "movie", "Poster": "https://img/dune-2021.jpg"},
            {"Title": "Dune", "Year": "1984", "imdbID": "tt0087182", "Type": "movie", "Poster": "N/A"},
            {"Title": "Dune: Part Two", "Year": "2024", "imdbID": "tt15239678", "Type": "movie", "Poster": "https://img/dune-2.jpg"}
        ],
        "totalResults": "53",
        "Response": "True"
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// The request carries the key, term and page as query parameters and the
/// movies come back in remote order.
#[tokio::test]
async fn test_search_sends_query_and_parses_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("s", "dune"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dune_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let result = client.search("dune", 2).await.expect("search succeeds");

    assert_eq!(result.total_results, 53);
    let ids: Vec<&str> = result.movies.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["tt1160419", "tt0087182", "tt15239678"]);
    assert_eq!(result.movies[0].poster_url, "https://img/dune-2021.jpg");
    assert_eq!(result.movies[1].poster_url, "");
}

/// A configured result type is forwarded as the `type` parameter.
#[tokio::test]
async fn test_search_forwards_result_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("type", "series"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dune_page()))
        .expect(1)
        .mount(&server)
        .await;

    let config = ApiConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        timeout_seconds: 5,
        result_type: Some("series".to_string()),
    };
    let client = OmdbClient::new(config).unwrap();
    assert!(client.search("dune", 1).await.is_ok());
}

/// `Response: "False"` is a no-results error carrying the remote message.
#[tokio::test]
async fn test_not_found_maps_to_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Movie not found!"
        })))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let err = client.search("qwertyuiop", 1).await.unwrap_err();
    assert_eq!(err, SearchClientError::NoResults("Movie not found!".to_string()));
}

/// Non-2xx responses are transport errors; the remote message is kept.
#[tokio::test]
async fn test_unauthorized_maps_to_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "Response": "False",
            "Error": "Invalid API key!"
        })))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let err = client.search("dune", 1).await.unwrap_err();
    assert_eq!(
        err,
        SearchClientError::Transport("HTTP 401: Invalid API key!".to_string())
    );
}

#[tokio::test]
async fn test_server_error_maps_to_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let err = client.search("dune", 1).await.unwrap_err();
    assert_eq!(
        err,
        SearchClientError::Transport("HTTP 500: Internal Server Error".to_string())
    );
}

#[tokio::test]
async fn test_malformed_body_maps_to_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let err = client.search("dune", 1).await.unwrap_err();
    match err {
        SearchClientError::Transport(message) => {
            assert!(message.starts_with("Failed to parse search response"))
        }
        other => panic!("expected transport error, got {:?}", other),
    }
}

/// An unreachable server is a transport error, not a panic or a hang.
#[tokio::test]
async fn test_unreachable_server_maps_to_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = make_client(&uri);
    let err = client.search("dune", 1).await.unwrap_err();
    assert!(matches!(err, SearchClientError::Transport(_)));
}

/// One call, one request: nothing is cached between identical searches.
#[tokio::test]
async fn test_each_search_issues_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("s", "dune"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dune_page()))
        .expect(2)
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    client.search("dune", 1).await.unwrap();
    client.search("dune", 1).await.unwrap();
}
