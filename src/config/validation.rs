use crate::config::types::{Config, ManufacturerConfig, OutputConfig, PacingConfig, ScrapingConfig};
use crate::ConfigError;
use std::time::Duration;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraping_config(&config.scraping)?;
    validate_pacing_config(&config.pacing)?;
    validate_output_config(&config.output)?;
    validate_manufacturer_config(&config.manufacturer)?;
    Ok(())
}

/// Validates request behavior configuration
fn validate_scraping_config(config: &ScrapingConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must use http or https, got '{}'",
            config.base_url
        )));
    }

    if config.catalog_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "catalog-path cannot be empty".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    validate_delay("request-delay-seconds", config.request_delay_seconds)?;

    if config.max_retries < 1 || config.max_retries > 10 {
        return Err(ConfigError::Validation(format!(
            "max-retries must be between 1 and 10, got {}",
            config.max_retries
        )));
    }

    if config.timeout_seconds < 1 {
        return Err(ConfigError::Validation(
            "timeout-seconds must be >= 1".to_string(),
        ));
    }

    Ok(())
}

fn validate_pacing_config(config: &PacingConfig) -> Result<(), ConfigError> {
    validate_delay("variant-delay-seconds", config.variant_delay_seconds)?;
    validate_delay("line-delay-seconds", config.line_delay_seconds)
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.output_directory.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output-directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_manufacturer_config(config: &ManufacturerConfig) -> Result<(), ConfigError> {
    if config.name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "manufacturer name cannot be empty".to_string(),
        ));
    }

    // Lookups lower-case the line name, so upper-case keys would never match
    for (line, panel) in &config.line_panels {
        if line.is_empty() || *line != line.to_lowercase() {
            return Err(ConfigError::Validation(format!(
                "line-panels key '{}' must be non-empty and lower-case",
                line
            )));
        }

        if panel.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "line-panels entry for '{}' has an empty panel id",
                line
            )));
        }
    }

    Ok(())
}

/// Delays must convert to a `Duration`: finite, non-negative, and in range
fn validate_delay(name: &str, seconds: f64) -> Result<(), ConfigError> {
    Duration::try_from_secs_f64(seconds).map_err(|_| {
        ConfigError::Validation(format!(
            "{} must be a non-negative number of seconds within range, got {}",
            name, seconds
        ))
    })?;

    Ok(())
}
