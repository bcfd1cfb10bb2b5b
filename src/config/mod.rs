//! Configuration module for Motospec
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use motospec::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawling {} with {} retries", config.scraping.base_url, config.scraping.max_retries);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    default_line_panels, Config, ManufacturerConfig, OutputConfig, PacingConfig, ScrapingConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
