//! Cinesearch - movie database search CLI
//!
#![doc = "Cinesearch - movie database search CLI"]
#![doc = "Main entry point for the Cinesearch application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cinesearch::cli::{Cli, Commands};
use cinesearch::commands;
use cinesearch::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Browse => {
            tracing::info!("Starting browse mode");
            commands::browse::run_browse(config).await?;
            Ok(())
        }
        Commands::Search { term, page, json } => {
            tracing::info!("Starting one-shot search");
            if let Some(t) = &term {
                tracing::debug!("Search term: {}", t);
            }
            commands::search::run_search(&config, term, page, json).await?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr so they never mix with printed results.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "cinesearch=debug"
    } else {
        "cinesearch=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
