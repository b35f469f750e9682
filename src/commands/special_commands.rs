//! Input parser for the interactive browser
//!
//! Anything typed at the browse prompt is either a paging/control command or
//! a search term. Commands are case-insensitive and may have aliases:
//!
//! - `n`, `next`, `/next` - next page
//! - `p`, `prev`, `/prev` - previous page
//! - `/status` - show the session state
//! - `/help`, `/?` - show help
//! - `exit`, `quit`, `/quit` - leave the browser
//!
//! Everything else is submitted as a search. Lines starting with `/` that
//! are not known commands are rejected instead of being searched for.

use thiserror::Error;

/// Errors that can occur when parsing browser input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown slash command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),
}

/// What a line of browser input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Fetch the next page
    NextPage,
    /// Fetch the previous page
    PrevPage,
    /// Print the session state
    ShowStatus,
    /// Print help
    Help,
    /// Leave the browser
    Exit,
    /// Submit the text as a new search
    Search(String),
    /// Blank input
    None,
}

/// Parse one line of browser input
///
/// # Errors
///
/// Returns `CommandError::UnknownCommand` for unrecognized `/` commands
///
/// # Examples
///
/// ```
/// use cinesearch::commands::special_commands::{parse_browse_command, BrowseCommand};
///
/// assert_eq!(parse_browse_command("n").unwrap(), BrowseCommand::NextPage);
/// assert_eq!(
///     parse_browse_command("blade runner").unwrap(),
///     BrowseCommand::Search("blade runner".to_string())
/// );
/// assert!(parse_browse_command("/foo").is_err());
/// ```
pub fn parse_browse_command(input: &str) -> Result<BrowseCommand, CommandError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(BrowseCommand::None);
    }

    let lower = trimmed.to_lowercase();
    match lower.as_str() {
        "n" | "next" | "/next" => Ok(BrowseCommand::NextPage),
        "p" | "prev" | "/prev" => Ok(BrowseCommand::PrevPage),
        "/status" => Ok(BrowseCommand::ShowStatus),
        "/help" | "/?" => Ok(BrowseCommand::Help),
        "exit" | "quit" | "/quit" | "/exit" => Ok(BrowseCommand::Exit),
        other if other.starts_with('/') => Err(CommandError::UnknownCommand(trimmed.to_string())),
        _ => Ok(BrowseCommand::Search(trimmed.to_string())),
    }
}

/// Print browser help
pub fn print_help() {
    println!(
        r#"
Interactive Movie Browser
=========================

SEARCHING:
  <title>         - Search for a title (blank searches reset to the default)

PAGING:
  n, next         - Show the next page of results
  p, prev         - Show the previous page of results

SESSION:
  /status         - Show the current search, page and fetch status
  /help           - Show this help
  exit, quit      - Leave the browser
"#
    );
}
