//! Met Explorer - search and browse artworks from the Met Collection API
//!
//! A command-line front end that searches the collection, fetches the
//! matching records and renders them as a grid plus a detail view.

mod collection;
mod commands;
mod config;
mod error;
mod logging;
mod query;
mod render;
mod utils;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use collection::MetClient;
use commands::search::{InspectChoice, SearchOptions};
use commands::OutputFormat;
use config::{FetchFailurePolicy, Settings, SettingsOverrides};
use error::ExploreError;
use query::SearchQuery;

/// Search and browse artworks from the Met Collection API.
#[derive(Parser)]
#[command(name = "met-explorer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Collection API base URL
    #[arg(long, global = true, env = "MET_EXPLORER_BASE_URL")]
    base_url: Option<String>,

    /// Per-request deadline in seconds
    #[arg(long, global = true, env = "MET_EXPLORER_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// What the grid does with objects that fail to load
    #[arg(long, global = true, value_enum)]
    on_fetch_error: Option<FetchFailurePolicy>,

    /// Settings file (default: settings.json in the user config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log to stderr at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the collection and show a grid of results
    Search {
        /// Search text (e.g. flower, Monet, sculpture)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// How many results to show (1-12)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
        limit: Option<u8>,

        /// Include objects without images
        #[arg(long)]
        all_objects: bool,

        /// Object ID from the results to show in detail (default: the first)
        #[arg(long, conflicts_with = "no_inspect")]
        inspect: Option<u64>,

        /// Do not show a detail view
        #[arg(long)]
        no_inspect: bool,
    },
    /// Show one object in detail
    Show {
        /// Object ID
        id: u64,
    },
    /// Interactive session: type searches and commands line by line
    Browse,
}

async fn run(cli: Cli) -> Result<(), ExploreError> {
    let overrides = SettingsOverrides {
        base_url: cli.base_url,
        timeout_secs: cli.timeout,
        on_fetch_error: cli.on_fetch_error,
        verbose: cli.verbose,
    };
    let settings = Settings::load(cli.settings.as_deref())?.with_overrides(&overrides)?;

    if settings.developer_mode {
        logging::enable_developer_mode();
        log_info!("main", "Developer mode enabled, logging to stderr at DEBUG");
    }

    let client = MetClient::from_settings(&settings)?;
    log_info!("main", "Collection API: {}", client.base_url());
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Search {
            query,
            limit,
            all_objects,
            inspect,
            no_inspect,
        } => {
            let query = SearchQuery::new(
                &query.join(" "),
                settings.images_only && !all_objects,
                limit.unwrap_or(settings.default_limit),
            )?;
            let inspect = match (no_inspect, inspect) {
                (true, _) => InspectChoice::Skip,
                (false, Some(id)) => InspectChoice::Id(id),
                (false, None) => InspectChoice::First,
            };
            let options = SearchOptions {
                inspect,
                policy: settings.on_fetch_error,
                format,
            };
            commands::search::run_search(&client, &query, &options, &mut out).await?;
        }
        Commands::Show { id } => {
            commands::inspect::run_inspect(&client, id, format, &mut out).await?;
        }
        Commands::Browse => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            commands::browse::run_browse(&client, &settings, stdin, &mut out).await?;
        }
    }

    out.flush()?;
    log_info!(
        "main",
        "Done ({} distinct API calls cached)",
        client.cached_calls()
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    log_info!("main", "=== {} Starting ===", config::app::DISPLAY_NAME);
    log_info!("main", "Version: {}", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error!("main", "{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::try_parse_from([
            "met-explorer",
            "search",
            "van",
            "gogh",
            "--limit",
            "12",
            "--all-objects",
            "--on-fetch-error",
            "placeholder",
        ])
        .unwrap();

        assert_eq!(cli.on_fetch_error, Some(FetchFailurePolicy::Placeholder));
        match cli.command {
            Commands::Search {
                query,
                limit,
                all_objects,
                ..
            } => {
                assert_eq!(query.join(" "), "van gogh");
                assert_eq!(limit, Some(12));
                assert!(all_objects);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_limit_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["met-explorer", "search", "flower", "--limit", "13"]).is_err());
        assert!(Cli::try_parse_from(["met-explorer", "search", "flower", "--limit", "0"]).is_err());
    }

    #[test]
    fn test_inspect_conflicts_with_no_inspect() {
        assert!(Cli::try_parse_from([
            "met-explorer",
            "search",
            "flower",
            "--inspect",
            "2",
            "--no-inspect"
        ])
        .is_err());
    }
}
