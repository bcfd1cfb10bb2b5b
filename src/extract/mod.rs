//! Catalog extraction
//!
//! This module contains everything that knows about a manufacturer's markup:
//! - The `Extractor` capability the crawler is written against
//! - Pure HTML extraction functions for the Kawasaki catalog
//! - The `KawasakiExtractor`, which pairs those functions with a fetcher
//! - A strict parser for the list literals found in data attributes

mod kawasaki;
mod literal;
mod parser;

pub use kawasaki::KawasakiExtractor;
pub use literal::{model_name_from_data_content, parse_literal_list};
pub use parser::{
    clean_line_name, extract_lines, extract_product_links, extract_spec_links, extract_specs,
    ProductLink,
};

use crate::model::{ModelVariant, MotorcycleLine, SpecificationRecord};
use crate::ScrapeError;
use async_trait::async_trait;

/// Site-specific discovery and extraction for one manufacturer
///
/// The crawler drives the traversal and owns failure accounting; an
/// extractor only answers the three questions below. Discovery methods report
/// missing structure or failed requests as empty results.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Manufacturer name written into every record
    fn manufacturer(&self) -> &str;

    /// Location of the catalog page, for error reporting
    fn entry_point(&self) -> String;

    /// Lists the product lines named in the catalog navigation
    async fn discover_lines(&self) -> Vec<MotorcycleLine>;

    /// Lists the model variants of one line, unique by relative path
    async fn discover_models(&self, line: &MotorcycleLine) -> Vec<ModelVariant>;

    /// Fetches and flattens one variant's specification page
    async fn extract_specs(&self, variant: &ModelVariant) -> Result<SpecificationRecord, ScrapeError>;
}
