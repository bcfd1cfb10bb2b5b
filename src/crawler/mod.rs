//! Crawler module for catalog traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with retry logic
//! - Crawl phase tracking
//! - Record aggregation and counters
//! - Overall crawl coordination

mod aggregator;
mod coordinator;
mod fetcher;
mod phase;

pub use aggregator::{CrawlResult, RecordAggregator};
pub use coordinator::CatalogCrawler;
pub use fetcher::{build_http_client, fetch_url, FetchResult, Fetcher};
pub use phase::CrawlPhase;

use crate::config::Config;
use crate::extract::KawasakiExtractor;
use crate::model::Catalog;
use crate::ScrapeError;

/// Runs a complete crawl against the configured site
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client and extractor
/// 2. Discover lines and their model variants
/// 3. Scrape one specification page per variant
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok((Catalog, CrawlResult))` - Crawl completed (possibly with failures)
/// * `Err(ScrapeError)` - No lines were found, or setup failed
pub async fn crawl(config: &Config) -> Result<(Catalog, CrawlResult), ScrapeError> {
    let extractor = KawasakiExtractor::new(config)?;
    CatalogCrawler::new(extractor, &config.pacing).run().await
}

/// Runs only the discovery phases against the configured site
pub async fn discover(config: &Config) -> Result<Catalog, ScrapeError> {
    let extractor = KawasakiExtractor::new(config)?;
    CatalogCrawler::new(extractor, &config.pacing)
        .discover_catalog()
        .await
}
