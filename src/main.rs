//! Motospec main entry point
//!
//! This is the command-line interface for the motorcycle catalog crawler.

use anyhow::Context;
use clap::Parser;
use motospec::config::{load_config_with_hash, Config};
use motospec::crawler;
use motospec::output::{self, OutputPaths};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Motospec: a motorcycle catalog crawler
///
/// Motospec walks a manufacturer's catalog from product lines to model
/// variants to specification sheets, and writes the flattened specifications
/// as JSON and CSV.
#[derive(Parser, Debug)]
#[command(name = "motospec")]
#[command(version)]
#[command(about = "A motorcycle specification crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Discover lines and models and write the catalog, without scraping specs
    #[arg(long, conflicts_with = "dry_run")]
    catalog_only: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.catalog_only {
        handle_catalog_only(&config).await?;
    } else {
        handle_crawl(&config, &config_hash).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("motospec=info,warn"),
            1 => EnvFilter::new("motospec=debug,info"),
            2 => EnvFilter::new("motospec=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Motospec Dry Run ===\n");

    println!("Scraping:");
    println!("  Base URL: {}", config.scraping.base_url);
    println!("  Catalog path: {}", config.scraping.catalog_path);
    println!("  User agent: {}", config.scraping.user_agent);
    println!("  Request delay: {}s", config.scraping.request_delay_seconds);
    println!("  Max retries: {}", config.scraping.max_retries);
    println!("  Timeout: {}s", config.scraping.timeout_seconds);

    println!("\nPacing:");
    println!("  After each variant: {}s", config.pacing.variant_delay_seconds);
    println!("  After each line: {}s", config.pacing.line_delay_seconds);

    let paths = OutputPaths::new(Path::new(&config.output.output_directory), &config.manufacturer.name);
    println!("\nOutput:");
    println!("  Catalog: {}", paths.catalog_json.display());
    println!("  Specs: {}", paths.specs_json.display());
    println!("  Summary: {}", paths.summary_md.display());

    println!(
        "\nLine Panels for {} ({}):",
        config.manufacturer.name,
        config.manufacturer.line_panels.len()
    );
    for (line, panel) in &config.manufacturer.line_panels {
        println!("  - {} -> {}", line, panel);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the --catalog-only mode: discovery without spec scraping
async fn handle_catalog_only(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Discovering catalog for {}", config.manufacturer.name);

    let catalog = crawler::discover(config).await.context("Catalog discovery failed")?;

    let paths = OutputPaths::new(Path::new(&config.output.output_directory), &config.manufacturer.name);
    output::write_catalog(&paths, &catalog).context("Failed to write catalog")?;

    println!("✓ Catalog written to: {}", paths.catalog_json.display());
    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, config_hash: &str) -> anyhow::Result<()> {
    tracing::info!(
        "Starting crawl of {} ({})",
        config.manufacturer.name,
        config.scraping.base_url
    );

    let (catalog, result) = crawler::crawl(config).await.context("Crawl failed")?;

    let paths = OutputPaths::new(Path::new(&config.output.output_directory), &config.manufacturer.name);
    let summary = output::write_run(
        &paths,
        &config.manufacturer.name,
        config_hash,
        &catalog,
        &result,
    )
    .context("Failed to write results")?;

    output::print_summary(&summary);
    Ok(())
}
