/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

- `browse` - Interactive search and paging loop
- `search` - One-shot search printing a single page

The handlers stay small: they wire the configured search client into the
controller (or call it directly) and print what comes back.
*/

use crate::client::create_client;
use crate::config::Config;
use crate::controller::SearchController;
use crate::error::{CinesearchError, Result};
use crate::session::SearchSession;
use crate::view;

// Browser input parsing
pub mod special_commands;

// One-shot search command
pub mod search;

// Interactive browse command handler
pub mod browse {
    //! Interactive browse mode handler.
    //!
    //! Creates the search client and controller, fetches the default query,
    //! then runs a readline loop that turns each line into a controller
    //! intent and prints the session once the latest request has settled.

    use super::*;
    use crate::commands::special_commands::{parse_browse_command, print_help, BrowseCommand};
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Start the interactive browser
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    ///
    /// # Errors
    ///
    /// Returns error if the client or the line editor cannot be created
    pub async fn run_browse(config: Config) -> Result<()> {
        tracing::info!("Starting interactive browser");

        let client = create_client(&config.api)?;
        let mut controller = SearchController::new(client, config.search.default_query.clone());
        let label = config.search.default_label;

        let mut rl = DefaultEditor::new().map_err(CinesearchError::Readline)?;

        print_welcome_banner(controller.default_query());

        controller.mount();
        controller.settle_latest().await;
        view::print_session(controller.session(), &label);

        loop {
            // An unrecognized command stays in the draft and is offered again
            let draft = controller.session().draft_term().to_string();
            let line = match rl.readline_with_initial("search> ", (draft.as_str(), "")) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("Goodbye!");
                    break;
                }
                Err(e) => {
                    tracing::error!("Readline error: {}", e);
                    return Err(CinesearchError::Readline(e).into());
                }
            };
            controller.on_draft_change(&line);

            let command = match parse_browse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    eprintln!("{}", e.to_string().red());
                    continue;
                }
            };

            match command {
                BrowseCommand::None => {
                    controller.on_draft_change("");
                    continue;
                }
                BrowseCommand::Search(term) => {
                    rl.add_history_entry(term.as_str())
                        .map_err(CinesearchError::Readline)?;
                    controller.on_submit(&term);
                }
                BrowseCommand::NextPage => {
                    controller.on_draft_change("");
                    controller.on_next_page();
                }
                BrowseCommand::PrevPage => {
                    controller.on_draft_change("");
                    if controller.on_prev_page().is_none() {
                        println!("{}", "Already on the first page.".yellow());
                        continue;
                    }
                }
                BrowseCommand::ShowStatus => {
                    controller.on_draft_change("");
                    print_status(controller.session(), controller.default_query());
                    continue;
                }
                BrowseCommand::Help => {
                    controller.on_draft_change("");
                    print_help();
                    continue;
                }
                BrowseCommand::Exit => {
                    println!("Goodbye!");
                    break;
                }
            }

            controller.settle_latest().await;
            view::print_session(controller.session(), &label);
        }

        Ok(())
    }

    fn print_welcome_banner(default_query: &str) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║               Cinesearch Movie Browser - Welcome!            ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Default query: {}", default_query.cyan());
        println!("Type a title to search, 'n'/'p' to page, '/help' for help, 'exit' to quit\n");
    }
}

/// Print the session state for `/status`
fn print_status(session: &SearchSession, default_query: &str) {
    use colored::Colorize;

    println!("\n{}", "Session".bold());
    println!(
        "  Query:    {}",
        session.active_term(default_query).cyan()
    );
    println!("  Page:     {}", session.page());
    println!("  Status:   {}", session.status());
    println!("  Results:  {}", session.total_results());
    println!("  Request:  {}", session.request_id());
    if let Some(error) = session.error() {
        println!("  Error:    {}", error.red());
    }
    println!();
}
