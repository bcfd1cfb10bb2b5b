//! Output errors and the run summary data structure
//!
//! This module defines the error type shared by every writer and the
//! summary assembled from a finished crawl.

use crate::crawler::CrawlResult;
use crate::model::Catalog;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Summary statistics for a crawl
#[derive(Debug, Clone)]
pub struct RunSummary {
    // Run metadata
    pub make: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_seconds: i64,
    pub config_hash: String,

    // Discovery
    pub lines: Vec<(String, usize)>,

    // Scraping
    pub total: usize,
    pub successes: usize,
    pub failures: usize,
}

impl RunSummary {
    /// Builds a summary from the catalog and the crawl outcome
    pub fn new(make: &str, config_hash: &str, catalog: &Catalog, result: &CrawlResult) -> Self {
        Self {
            make: make.to_string(),
            started_at: result.started_at,
            finished_at: result.finished_at,
            duration_seconds: result.duration_seconds(),
            config_hash: config_hash.to_string(),
            lines: catalog
                .lines()
                .iter()
                .map(|l| (l.name.clone(), l.models.len()))
                .collect(),
            total: result.total,
            successes: result.successes,
            failures: result.failures,
        }
    }

    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.successes as f64 / self.total as f64) * 100.0
    }
}
