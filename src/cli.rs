//! Command-line interface definition for Cinesearch
//!
//! This module defines the CLI structure using clap's derive API,
//! providing an interactive browser and a one-shot search command.

use clap::{Parser, Subcommand};

/// Cinesearch - search a movie database and page through the results
#[derive(Parser, Debug, Clone)]
#[command(name = "cinesearch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// API key for the movie database (overrides config and environment)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Cinesearch
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Browse results interactively: type a title to search, `n`/`p` to page
    Browse,

    /// Run a single search and print one page of results
    Search {
        /// Title to search for (the configured default query when omitted)
        term: Option<String>,

        /// Page number to fetch
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            api_key: None,
            verbose: false,
            command: Commands::Browse,
        }
    }
}
