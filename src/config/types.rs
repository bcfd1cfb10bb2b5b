use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Main configuration structure for Motospec
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub scraping: ScrapingConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
    pub output: OutputConfig,
    pub manufacturer: ManufacturerConfig,
}

/// Request behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapingConfig {
    /// Site root, e.g. "https://www.kawasaki.com"
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Entry path for line discovery, relative to the base URL
    #[serde(rename = "catalog-path")]
    pub catalog_path: String,

    /// Value of the User-Agent request header
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Fixed sleep before every request attempt (seconds)
    #[serde(rename = "request-delay-seconds")]
    pub request_delay_seconds: f64,

    /// Attempts per request before giving up
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Timeout applied to every individual request (seconds)
    #[serde(rename = "timeout-seconds", default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ScrapingConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_secs_f64(self.request_delay_seconds)
    }
}

/// Pacing applied by the crawler between branches of the traversal
#[derive(Debug, Clone, Deserialize)]
pub struct PacingConfig {
    /// Sleep after every scraped variant (seconds)
    #[serde(rename = "variant-delay-seconds", default = "default_variant_delay")]
    pub variant_delay_seconds: f64,

    /// Sleep after every completed line (seconds)
    #[serde(rename = "line-delay-seconds", default = "default_line_delay")]
    pub line_delay_seconds: f64,
}

impl PacingConfig {
    pub fn variant_delay(&self) -> Duration {
        Duration::from_secs_f64(self.variant_delay_seconds)
    }

    pub fn line_delay(&self) -> Duration {
        Duration::from_secs_f64(self.line_delay_seconds)
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            variant_delay_seconds: default_variant_delay(),
            line_delay_seconds: default_line_delay(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving catalog, spec and summary files
    #[serde(rename = "output-directory")]
    pub output_directory: String,
}

/// Manufacturer identity and site structure facts
#[derive(Debug, Clone, Deserialize)]
pub struct ManufacturerConfig {
    /// Value written into every record's `make` field
    pub name: String,

    /// Lower-cased line name → id of the tab panel listing that line's products
    #[serde(rename = "line-panels", default = "default_line_panels")]
    pub line_panels: BTreeMap<String, String>,
}

impl ManufacturerConfig {
    /// Looks up the tab panel for a line, ignoring case
    pub fn panel_for(&self, line: &str) -> Option<&str> {
        self.line_panels
            .get(&line.to_lowercase())
            .map(String::as_str)
    }
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_variant_delay() -> f64 {
    2.0
}

fn default_line_delay() -> f64 {
    3.0
}

/// Panel ids of the Kawasaki US motorcycle catalog
pub fn default_line_panels() -> BTreeMap<String, String> {
    [
        ("ninja", "nav-tab-content-1"),
        ("z", "nav-tab-content-16"),
        ("versys", "nav-tab-content-4"),
        ("w", "nav-tab-content-26"),
        ("eliminator", "nav-tab-content-1004"),
        ("vulcan", "nav-tab-content-14"),
        ("klr", "nav-tab-content-1002"),
        ("klx", "nav-tab-content-22"),
        ("kx", "nav-tab-content-23"),
    ]
    .into_iter()
    .map(|(line, panel)| (line.to_string(), panel.to_string()))
    .collect()
}
