//! fundfeed CLI
//!
//! Local execution entry point: runs one pipeline per invocation and
//! exits non-zero when a primary fetch fails, leaving the previous
//! snapshot in place.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fundfeed::{error::Result, models::Config, pipeline, storage::LocalStorage};

/// fundfeed - EU funding call and event crawler
#[derive(Parser, Debug)]
#[command(
    name = "fundfeed",
    version,
    about = "EU funding call and event feed crawler"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Directory where JSON snapshots are written
    #[arg(short, long, default_value = "data")]
    output_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Update the funding-opportunities snapshot
    Opportunities,

    /// Update the events snapshot
    Events {
        /// Read the events RSS feed instead of scraping the homepage
        #[arg(long)]
        rss: bool,
    },

    /// Run both pipelines
    All,

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = run(cli).await {
        log::error!("Run failed: {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<()> {
    log::info!("fundfeed starting...");

    let config = Config::load_or_default(&cli.config);
    let storage = LocalStorage::new(&cli.output_dir);

    match cli.command {
        Command::Opportunities => {
            let summary = pipeline::opportunities::run(&config, &storage).await?;
            log::info!(
                "Opportunities updated: {} written ({} fetched, enrichment {}/{})",
                summary.written,
                summary.fetched,
                summary.enrich_found,
                summary.enrich_attempted
            );
        }

        Command::Events { rss } => {
            let summary = if rss {
                pipeline::events::run_rss(&config, &storage).await?
            } else {
                pipeline::events::run(&config, &storage).await?
            };
            log::info!(
                "Events updated: {} written ({} extracted)",
                summary.written,
                summary.extracted
            );
        }

        Command::All => {
            let opportunities = pipeline::opportunities::run(&config, &storage).await?;
            log::info!("Opportunities updated: {} written", opportunities.written);

            let events = pipeline::events::run(&config, &storage).await?;
            log::info!("Events updated: {} written", events.written);
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            config.validate()?;
            log::info!("✓ Config OK");
        }
    }

    log::info!("Done!");
    Ok(())
}
