//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the traversal that coordinates the whole run:
//! - Discovering lines, then the model variants of every line
//! - Scraping one specification page per variant
//! - Absorbing per-line and per-variant failures into counters
//! - Pacing between variants and between lines

use crate::config::PacingConfig;
use crate::crawler::aggregator::{CrawlResult, RecordAggregator};
use crate::crawler::phase::CrawlPhase;
use crate::extract::Extractor;
use crate::model::Catalog;
use crate::ScrapeError;
use std::collections::HashSet;
use std::time::Duration;

/// Manufacturer-agnostic catalog crawler
///
/// The crawler walks `DiscoveringLines → DiscoveringModels → FetchingSpecs →
/// Done` once. Only an empty line list aborts the run; every other failure is
/// logged and counted at the line or variant where it happened.
pub struct CatalogCrawler<E: Extractor> {
    extractor: E,
    variant_delay: Duration,
    line_delay: Duration,
    phase: CrawlPhase,
}

impl<E: Extractor> CatalogCrawler<E> {
    /// Creates a new crawler around an extractor
    ///
    /// # Arguments
    ///
    /// * `extractor` - Site-specific discovery and extraction
    /// * `pacing` - Delays applied after each variant and each line
    pub fn new(extractor: E, pacing: &PacingConfig) -> Self {
        Self {
            extractor,
            variant_delay: pacing.variant_delay(),
            line_delay: pacing.line_delay(),
            phase: CrawlPhase::DiscoveringLines,
        }
    }

    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    /// Runs the discovery phases only and returns the catalog
    ///
    /// # Returns
    ///
    /// * `Ok(Catalog)` - Lines with their variants (lines without variants omitted)
    /// * `Err(ScrapeError::NoLinesFound)` - The catalog navigation yielded nothing
    pub async fn discover_catalog(mut self) -> Result<Catalog, ScrapeError> {
        let catalog = self.discover().await?;
        self.advance(CrawlPhase::Done)?;
        Ok(catalog)
    }

    /// Runs the full traversal
    ///
    /// # Returns
    ///
    /// * `Ok((Catalog, CrawlResult))` - The discovered catalog and scrape outcome
    /// * `Err(ScrapeError::NoLinesFound)` - The catalog navigation yielded nothing
    pub async fn run(mut self) -> Result<(Catalog, CrawlResult), ScrapeError> {
        let mut aggregator = RecordAggregator::new();

        let catalog = self.discover().await?;
        aggregator.add_discovered(catalog.total_variants());

        self.advance(CrawlPhase::FetchingSpecs)?;
        self.fetch_specs(&catalog, &mut aggregator).await;

        self.advance(CrawlPhase::Done)?;
        let result = aggregator.finish();

        tracing::info!(
            "Crawl completed: {} variants, {} scraped, {} failed ({:.2}% success) in {}s",
            result.total,
            result.successes,
            result.failures,
            result.success_rate(),
            result.duration_seconds()
        );

        Ok((catalog, result))
    }

    /// DiscoveringLines and DiscoveringModels
    async fn discover(&mut self) -> Result<Catalog, ScrapeError> {
        let lines = self.extractor.discover_lines().await;
        if lines.is_empty() {
            tracing::error!("No motorcycle lines found!");
            return Err(ScrapeError::NoLinesFound {
                url: self.extractor.entry_point(),
            });
        }

        self.advance(CrawlPhase::DiscoveringModels)?;

        let mut catalog = Catalog::new();
        let mut claimed = HashSet::new();

        for line in &lines {
            tracing::info!("Processing line: {}", line);
            let models = self.extractor.discover_models(line).await;

            // Paths are unique per line already; keep them unique across lines too
            let models: Vec<_> = models
                .into_iter()
                .filter(|m| {
                    let fresh = claimed.insert(m.full_path.clone());
                    if !fresh {
                        tracing::debug!("Skipping {} already listed by an earlier line", m.full_path);
                    }
                    fresh
                })
                .collect();

            if models.is_empty() {
                tracing::warn!("No models found for {}", line);
                continue;
            }

            tracing::info!("Found {} models for {}", models.len(), line);
            catalog.push_line(line.name(), models);
        }

        tracing::info!(
            "Discovery complete. Total lines: {}, Total models: {}",
            lines.len(),
            catalog.total_variants()
        );
        Ok(catalog)
    }

    /// FetchingSpecs: one spec page per variant, paced
    async fn fetch_specs(&self, catalog: &Catalog, aggregator: &mut RecordAggregator) {
        for line in catalog.lines() {
            tracing::info!("Scraping {} models for line {}", line.models.len(), line.name);

            for variant in &line.models {
                tracing::info!("Scraping specs for: {}", variant.name);

                match self.extractor.extract_specs(variant).await {
                    Ok(record) => {
                        aggregator.record_success(record);
                        tracing::info!("Successfully scraped specifications for {}", variant.name);
                    }
                    Err(e) => {
                        aggregator.record_failure();
                        tracing::error!("Failed to scrape specifications for {}: {}", variant.name, e);
                    }
                }

                pause(self.variant_delay).await;
            }

            tracing::info!("Completed processing {} line", line.name);
            pause(self.line_delay).await;
        }
    }

    fn advance(&mut self, to: CrawlPhase) -> Result<(), ScrapeError> {
        if !self.phase.can_transition_to(to) {
            return Err(ScrapeError::InvalidTransition {
                from: self.phase,
                to,
            });
        }

        tracing::debug!("Crawl phase {} -> {}", self.phase, to);
        self.phase = to;
        Ok(())
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
