//! Urban-Scrape main entry point
//!
//! This is the command-line interface for the Urban-Scrape word list crawler.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use urban_scrape::config::{load_config_with_hash, Config};
use urban_scrape::crawler::crawl;
use urban_scrape::output::{create_output, print_summary, write_entries};

/// Urban-Scrape: a dictionary browse-index crawler
///
/// Walks the site's browse index letter by letter and page by page and writes
/// every word found to OUTPUT, one per line.
#[derive(Parser, Debug)]
#[command(name = "urban-scrape")]
#[command(version)]
#[command(about = "Scrapes the word list of a dictionary website", long_about = None)]
struct Cli {
    /// File to write the words to (created, or truncated if it exists)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Also fetch each word's definitions, appended after ':::'
    #[arg(short, long, visible_alias = "gd")]
    definitions: bool,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print a per-letter statistics table when done
    #[arg(long)]
    stats: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            eprintln!("System terminated abnormally.");
            ExitCode::from(1)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("urban_scrape=info,warn"),
            1 => EnvFilter::new("urban_scrape=debug,info"),
            2 => EnvFilter::new("urban_scrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file if one was given, defaults otherwise
fn load_configuration(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            Ok(config)
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Ok(Config::default())
        }
    }
}

/// Opens the output, runs the crawl and writes the results
async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_configuration(cli.config.as_deref())?;

    // Open the output before crawling so a bad path fails fast
    let mut writer = create_output(&cli.output).with_context(|| {
        format!(
            "Unable to create/open file for writing: {}",
            cli.output.display()
        )
    })?;
    tracing::info!("Opened file at: {}", cli.output.display());

    let result = crawl(&config, cli.definitions)
        .await
        .context("Failed to set up the crawler")?;

    let written = write_entries(&mut writer, &result)
        .with_context(|| format!("Failed to write to {}", cli.output.display()))?;
    drop(writer);

    tracing::info!("Closed file at: {}", cli.output.display());
    tracing::info!("Total words: {}", written);

    if cli.stats {
        print_summary(&result);
    }

    Ok(())
}
