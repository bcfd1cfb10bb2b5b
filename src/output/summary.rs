//! Run summary rendering
//!
//! This module prints the end-of-run summary to stdout and generates a
//! markdown report of the same numbers.

use crate::output::traits::{OutputResult, RunSummary};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Prints the summary to stdout in a formatted manner
pub fn print_summary(summary: &RunSummary) {
    println!("\n=== Scraping Summary ===\n");

    println!("Lines:");
    for (line, count) in &summary.lines {
        println!("  {}: {} models", line, count);
    }
    println!();

    println!("Total models found: {}", summary.total);
    println!("Successfully scraped: {}", summary.successes);
    println!("Failed: {}", summary.failures);
    println!("Success rate: {:.2}%", summary.success_rate());
    println!("Duration: {} seconds", summary.duration_seconds);
}

/// Generates a markdown summary file
///
/// # Arguments
///
/// * `summary` - The run summary data
/// * `output_path` - Path where the markdown file should be written
pub fn generate_markdown_summary(summary: &RunSummary, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(summary);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a run summary as markdown
pub fn format_markdown_summary(summary: &RunSummary) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {} Catalog Crawl Summary\n\n", summary.make));

    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Started**: {}\n", summary.started_at.to_rfc3339()));
    md.push_str(&format!("- **Finished**: {}\n", summary.finished_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Duration**: {} seconds ({:.2} minutes)\n",
        summary.duration_seconds,
        summary.duration_seconds as f64 / 60.0
    ));
    md.push_str(&format!("- **Config Hash**: {}\n\n", summary.config_hash));

    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Models Found**: {}\n", summary.total));
    md.push_str(&format!("- **Scraped**: {}\n", summary.successes));
    md.push_str(&format!("- **Failed**: {}\n", summary.failures));
    md.push_str(&format!(
        "- **Success Rate**: {:.2}%\n\n",
        summary.success_rate()
    ));

    if !summary.lines.is_empty() {
        md.push_str("## Lines\n\n");
        md.push_str("| Line | Models |\n");
        md.push_str("|------|--------|\n");
        for (line, count) in &summary.lines {
            md.push_str(&format!("| {} | {} |\n", line, count));
        }
        md.push('\n');
    }

    md
}
