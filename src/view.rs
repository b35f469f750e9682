//! Terminal rendering of a search session
//!
//! Turns a read-only [`SearchSession`] into the pieces the interactive
//! browser prints: a results caption, a loading or error line, the movie
//! table and the page controls.

use crate::client::MovieSummary;
use crate::session::{FetchStatus, SearchSession};
use colored::Colorize;
use prettytable::{format, row, Table};

/// Loading indicator or error banner for the current status
pub fn status_line(session: &SearchSession) -> Option<String> {
    match session.status() {
        FetchStatus::Loading => Some("Loading...".yellow().to_string()),
        FetchStatus::Failed => {
            let message = session.error().unwrap_or("Unknown error");
            Some(format!("Error: {}", message).red().bold().to_string())
        }
        FetchStatus::Idle | FetchStatus::Succeeded => None,
    }
}

/// Page position and the controls that apply to it
pub fn page_controls(session: &SearchSession) -> String {
    let position = match session.total_pages() {
        0 => format!("Page {}", session.page()),
        total => format!("Page {} of {}", session.page(), total),
    };

    let mut controls = Vec::new();
    if session.has_previous_page() {
        controls.push("[p] previous");
    }
    if session.has_next_page() {
        controls.push("[n] next");
    }

    if controls.is_empty() {
        position
    } else {
        format!("{}  {}", position, controls.join("  "))
    }
}

/// Table of movies on the current page
pub fn movies_table(movies: &[MovieSummary]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.set_titles(row!["Title", "Year", "Type", "IMDb ID"]);

    for movie in movies {
        table.add_row(row![
            movie.title,
            movie.year,
            movie.kind.as_deref().unwrap_or("-"),
            movie.id
        ]);
    }
    table
}

/// Print the whole session view to stdout
pub fn print_session(session: &SearchSession, default_label: &str) {
    println!();
    if let Some(line) = status_line(session) {
        println!("{}", line);
    }

    let heading = session.heading(default_label);
    if !heading.is_empty() {
        println!("{}", heading.bold());
    }

    if !session.movies().is_empty() {
        movies_table(session.movies()).printstd();
    }

    println!("{}", page_controls(session).dimmed());
}
