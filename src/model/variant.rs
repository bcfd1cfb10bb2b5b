use serde::Serialize;
use std::fmt;
use url::Url;

/// Edition label used when a spec path carries only a year
pub const BASE_EDITION: &str = "base";

/// A product family shown in the top-level catalog navigation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MotorcycleLine(String);

impl MotorcycleLine {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MotorcycleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One year/edition combination of a line, with its own specification page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelVariant {
    /// Display name, `"<base model> <year>"`
    pub name: String,

    /// Canonical model name shared by every year/edition
    pub base_model: String,

    /// Model year as printed in the URL (not necessarily numeric)
    pub year: String,

    /// Edition label, `"base"` when the URL has none
    pub edition: String,

    /// Absolute URL of the specification page
    pub url: String,

    /// The href exactly as found on the page; unique within one crawl
    pub full_path: String,
}

impl ModelVariant {
    /// Builds a variant from a spec link found on a model page
    ///
    /// # Arguments
    ///
    /// * `base_model` - Canonical model name
    /// * `href` - The link's href as it appears in the markup
    /// * `base_url` - Site root used to resolve the href
    ///
    /// # Returns
    ///
    /// * `Ok(ModelVariant)` - The variant
    /// * `Err(url::ParseError)` - The href cannot be resolved
    pub fn from_spec_link(
        base_model: &str,
        href: &str,
        base_url: &Url,
    ) -> Result<Self, url::ParseError> {
        let url = base_url.join(href)?;
        let (year, edition) = split_year_edition(last_segment(&url));

        Ok(Self {
            name: format!("{} {}", base_model, year),
            base_model: base_model.to_string(),
            year,
            edition,
            url: url.to_string(),
            full_path: href.to_string(),
        })
    }
}

/// Splits a `<year>[-<edition>]` path segment
///
/// The text before the first hyphen is the year; everything after it is the
/// edition, hyphens included. A missing or empty remainder becomes `"base"`.
///
/// # Examples
///
/// ```
/// use motospec::model::split_year_edition;
///
/// assert_eq!(
///     split_year_edition("2024-se-performance"),
///     ("2024".to_string(), "se-performance".to_string())
/// );
/// assert_eq!(split_year_edition("2024"), ("2024".to_string(), "base".to_string()));
/// ```
pub fn split_year_edition(segment: &str) -> (String, String) {
    match segment.split_once('-') {
        Some((year, edition)) if !edition.is_empty() => (year.to_string(), edition.to_string()),
        Some((year, _)) => (year.to_string(), BASE_EDITION.to_string()),
        None => (segment.to_string(), BASE_EDITION.to_string()),
    }
}

/// Last non-empty path segment, read the same way as a record's identity
fn last_segment(url: &Url) -> &str {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or_default()
}
