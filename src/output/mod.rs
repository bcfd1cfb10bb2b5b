//! Output module for persisting crawl results
//!
//! This module handles:
//! - Writing the discovered catalog as JSON and CSV
//! - Writing scraped specification records as JSON and CSV
//! - Generating console and markdown summaries of a run

pub mod csv;
pub mod json;
mod summary;
mod traits;

pub use summary::{format_markdown_summary, generate_markdown_summary, print_summary};
pub use traits::{OutputError, OutputResult, RunSummary};

use crate::crawler::CrawlResult;
use crate::model::Catalog;
use crate::normalize::normalize_key;
use std::path::{Path, PathBuf};

/// File locations for one manufacturer's output
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub catalog_json: PathBuf,
    pub catalog_csv: PathBuf,
    pub specs_json: PathBuf,
    pub specs_csv: PathBuf,
    pub summary_md: PathBuf,
}

impl OutputPaths {
    /// Derives `<make>_*` file names inside `dir`
    pub fn new(dir: &Path, make: &str) -> Self {
        let prefix = normalize_key(make);
        let file = |suffix: &str| dir.join(format!("{}_{}", prefix, suffix));

        Self {
            catalog_json: file("catalog.json"),
            catalog_csv: file("catalog.csv"),
            specs_json: file("full_specs.json"),
            specs_csv: file("full_specs.csv"),
            summary_md: file("summary.md"),
        }
    }
}

/// Writes the catalog files, creating the output directory if needed
pub fn write_catalog(paths: &OutputPaths, catalog: &Catalog) -> OutputResult<()> {
    ensure_parent(&paths.catalog_json)?;

    json::write_catalog_json(catalog, &paths.catalog_json)?;
    csv::write_catalog_csv(catalog, &paths.catalog_csv)?;

    tracing::info!(
        "Saved catalog with {} models to {}",
        catalog.total_variants(),
        paths.catalog_json.display()
    );
    Ok(())
}

/// Writes every output of a finished crawl
///
/// Spec files are skipped when no record was scraped.
///
/// # Returns
///
/// * `Ok(RunSummary)` - The summary that was written
/// * `Err(OutputError)` - A file could not be written
pub fn write_run(
    paths: &OutputPaths,
    make: &str,
    config_hash: &str,
    catalog: &Catalog,
    result: &CrawlResult,
) -> OutputResult<RunSummary> {
    write_catalog(paths, catalog)?;

    if result.records.is_empty() {
        tracing::warn!("No specifications were scraped");
    } else {
        json::write_specs_json(&result.records, &paths.specs_json)?;
        csv::write_specs_csv(&result.records, &paths.specs_csv)?;
        tracing::info!(
            "Saved {} specification records to {}",
            result.records.len(),
            paths.specs_json.display()
        );
    }

    let summary = RunSummary::new(make, config_hash, catalog, result);
    generate_markdown_summary(&summary, &paths.summary_md)?;

    Ok(summary)
}

fn ensure_parent(path: &Path) -> OutputResult<()> {
    let parent = path
        .parent()
        .ok_or_else(|| OutputError::Write(format!("No parent directory for {}", path.display())))?;
    std::fs::create_dir_all(parent)?;
    Ok(())
}
