//! One-shot search command
//!
//! Fetches a single page straight from the search client, without a
//! controller or session, and prints it as a table or as JSON.

use crate::client::{create_client, SearchClient, SearchResult};
use crate::config::Config;
use crate::error::{CinesearchError, Result};
use crate::view;
use colored::Colorize;

/// Run one search and print the page
///
/// A missing or blank `term` searches the configured default query. A
/// "no results" answer is printed and is not an error; transport failures
/// are.
///
/// # Examples
///
/// ```no_run
/// use cinesearch::config::Config;
/// use cinesearch::commands::search::run_search;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::default();
/// run_search(&config, Some("dune".to_string()), 1, false).await?;
/// # Ok(())
/// # }
/// ```
pub async fn run_search(config: &Config, term: Option<String>, page: u32, json: bool) -> Result<()> {
    let client = create_client(&config.api)?;
    let term = resolve_term(term, &config.search.default_query);

    tracing::info!("Searching for {:?} page {}", term, page);

    match fetch_page(client.as_ref(), &term, page).await? {
        Some(result) if json => output_json(&result),
        Some(result) => {
            output_table(&result, &term, page);
            Ok(())
        }
        None if json => output_json(&SearchResult::default()),
        None => {
            println!("{}", format!("No results for '{}'.", term).yellow());
            Ok(())
        }
    }
}

/// Blank or missing terms fall back to the default query
fn resolve_term(term: Option<String>, default_query: &str) -> String {
    term.map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| default_query.to_string())
}

/// Fetch one page, mapping "no results" to `None`
///
/// # Errors
///
/// Returns `CinesearchError::Client` for transport failures
pub async fn fetch_page(
    client: &dyn SearchClient,
    term: &str,
    page: u32,
) -> Result<Option<SearchResult>> {
    match client.search(term, page).await {
        Ok(result) => Ok(Some(result)),
        Err(err) if err.is_no_results() => {
            tracing::debug!("No results for {:?} page {}: {}", term, page, err);
            Ok(None)
        }
        Err(err) => Err(CinesearchError::Client(err).into()),
    }
}

fn output_json(result: &SearchResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).map_err(CinesearchError::Serialization)?;
    println!("{}", json);
    Ok(())
}

fn output_table(result: &SearchResult, term: &str, page: u32) {
    println!(
        "\nResults of search for {}, {} total results (page {}):\n",
        term, result.total_results, page
    );
    view::movies_table(&result.movies).printstd();
}
