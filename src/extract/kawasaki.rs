//! Extractor for the Kawasaki US catalog
//!
//! Page layout, as the crawler sees it:
//! - `<catalog-path>`: navigation listing the motorcycle lines
//! - `<catalog-path>/<line>`: tab panels of product containers, one panel per line
//! - model page: one "VIEW SPECS & DETAILS" link per year/edition
//! - spec page: accordion sections of label/value tables

use crate::config::{Config, ManufacturerConfig};
use crate::crawler::Fetcher;
use crate::extract::parser::{self, ProductLink};
use crate::extract::Extractor;
use crate::model::{ModelVariant, MotorcycleLine, SpecificationRecord};
use crate::ScrapeError;
use async_trait::async_trait;
use scraper::Html;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Extractor for kawasaki.com
pub struct KawasakiExtractor {
    fetcher: Fetcher,
    base_url: Url,
    catalog_path: String,
    manufacturer: ManufacturerConfig,
    container_delay: Duration,
}

impl KawasakiExtractor {
    /// Creates an extractor with a fetcher built from the configuration
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let fetcher = Fetcher::new(&config.scraping)?;
        Self::with_fetcher(config, fetcher)
    }

    /// Creates an extractor around an existing fetcher
    pub fn with_fetcher(config: &Config, fetcher: Fetcher) -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher,
            base_url: Url::parse(&config.scraping.base_url)?,
            catalog_path: config.scraping.catalog_path.clone(),
            manufacturer: config.manufacturer.clone(),
            container_delay: config.scraping.request_delay(),
        })
    }

    /// URL of the catalog page listing every line
    pub fn catalog_url(&self) -> Result<Url, url::ParseError> {
        self.base_url.join(&self.catalog_path)
    }

    /// URL of the page holding a line's tab panel
    pub fn line_url(&self, line: &MotorcycleLine) -> Result<Url, url::ParseError> {
        let path = format!("{}/{}", self.catalog_path.trim_end_matches('/'), line.name());
        self.base_url.join(&path)
    }

    /// Fetches one model page and turns its spec links into variants
    ///
    /// Spec paths already in `seen` are skipped; new ones are added.
    async fn variants_for_product(
        &self,
        product: &ProductLink,
        seen: &mut HashSet<String>,
    ) -> Vec<ModelVariant> {
        let model_url = match self.base_url.join(&product.href) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Invalid model href {}: {}", product.href, e);
                return Vec::new();
            }
        };

        tracing::debug!("Fetching model page: {}", model_url);
        let Some(body) = self.fetcher.fetch(model_url.as_str()).await else {
            tracing::error!("Failed to get model page for: {}", product.model_name);
            return Vec::new();
        };

        let spec_links = {
            let document = Html::parse_document(&body);
            parser::extract_spec_links(&document)
        };
        tracing::debug!(
            "Found {} spec links for model: {}",
            spec_links.len(),
            product.model_name
        );

        let mut variants = Vec::new();
        for href in spec_links {
            if seen.contains(&href) {
                continue;
            }

            match ModelVariant::from_spec_link(&product.model_name, &href, &self.base_url) {
                Ok(variant) => {
                    tracing::debug!("Added model: {} ({})", variant.name, variant.edition);
                    seen.insert(href);
                    variants.push(variant);
                }
                Err(e) => tracing::warn!("Invalid spec href {}: {}", href, e),
            }
        }

        variants
    }

    async fn pause(&self) {
        if !self.container_delay.is_zero() {
            tokio::time::sleep(self.container_delay).await;
        }
    }
}

#[async_trait]
impl Extractor for KawasakiExtractor {
    fn manufacturer(&self) -> &str {
        &self.manufacturer.name
    }

    fn entry_point(&self) -> String {
        self.catalog_url()
            .map(String::from)
            .unwrap_or_else(|_| self.catalog_path.clone())
    }

    async fn discover_lines(&self) -> Vec<MotorcycleLine> {
        let catalog_url = match self.catalog_url() {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Invalid catalog path {}: {}", self.catalog_path, e);
                return Vec::new();
            }
        };

        let Some(body) = self.fetcher.fetch(catalog_url.as_str()).await else {
            tracing::error!("Failed to get motorcycle lines");
            return Vec::new();
        };

        let names = {
            let document = Html::parse_document(&body);
            parser::extract_lines(&document)
        };

        tracing::info!(
            "Found {} motorcycle lines: {}",
            names.len(),
            names.join(", ")
        );
        names.into_iter().map(MotorcycleLine::new).collect()
    }

    async fn discover_models(&self, line: &MotorcycleLine) -> Vec<ModelVariant> {
        // The panel map is a fixed fact about the site; no request can fix a miss
        let Some(panel_id) = self.manufacturer.panel_for(line.name()) else {
            tracing::error!("No tab ID mapping found for line: {}", line);
            return Vec::new();
        };

        let line_url = match self.line_url(line) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Invalid URL for line {}: {}", line, e);
                return Vec::new();
            }
        };

        tracing::debug!("Fetching URL: {}", line_url);
        let Some(body) = self.fetcher.fetch(line_url.as_str()).await else {
            tracing::error!("Failed to get models for line: {}", line);
            return Vec::new();
        };

        let products = {
            let document = Html::parse_document(&body);
            parser::extract_product_links(&document, panel_id)
        };

        let Some(products) = products else {
            tracing::error!(
                "Could not find tab panel with ID {} for line: {}",
                panel_id,
                line
            );
            return Vec::new();
        };
        tracing::debug!(
            "Found {} product containers for line: {}",
            products.len(),
            line
        );

        let mut seen = HashSet::new();
        let mut visited_pages = HashSet::new();
        let mut models = Vec::new();

        for product in &products {
            if !visited_pages.insert(product.href.clone()) {
                continue;
            }

            models.extend(self.variants_for_product(product, &mut seen).await);
            self.pause().await;
        }

        tracing::info!(
            "Found {} models with specification URLs for line {}",
            models.len(),
            line
        );
        models
    }

    async fn extract_specs(
        &self,
        variant: &ModelVariant,
    ) -> Result<SpecificationRecord, ScrapeError> {
        let url = Url::parse(&variant.url)?;

        let body = self
            .fetcher
            .fetch(url.as_str())
            .await
            .ok_or_else(|| ScrapeError::FetchFailed {
                url: variant.url.clone(),
                attempts: self.fetcher.max_attempts(),
            })?;

        let document = Html::parse_document(&body);
        let record = parser::extract_specs(&document, &url, self.manufacturer())?;

        tracing::info!(
            "Successfully scraped {} specs for {} {}",
            record.spec_count(),
            variant.year,
            variant.base_model
        );
        Ok(record)
    }
}
