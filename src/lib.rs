//! Motospec: a motorcycle catalog crawler
//!
//! This crate walks a manufacturer's public catalog (lines → model variants →
//! specification sheets) and flattens every specification page into a
//! key/value record, tolerating failures at the smallest possible granularity.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod output;

use thiserror::Error;

/// Main error type for Motospec operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("All {attempts} attempts failed for {url}")]
    FetchFailed { url: String, attempts: u32 },

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },

    #[error("No motorcycle lines found in catalog at {url}")]
    NoLinesFound { url: String },

    #[error("Invalid crawl phase transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: crawler::CrawlPhase,
        to: crawler::CrawlPhase,
    },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Motospec operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CatalogCrawler, CrawlPhase, CrawlResult, Fetcher};
pub use extract::{Extractor, KawasakiExtractor};
pub use model::{Catalog, ModelVariant, MotorcycleLine, SpecificationRecord};
pub use normalize::normalize_key;
