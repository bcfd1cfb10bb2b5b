//! Tabular (CSV) writers for catalogs and specification records

use crate::model::{Catalog, SpecificationRecord, IDENTITY_FIELDS};
use crate::output::traits::OutputResult;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header of the flattened catalog table
pub const CATALOG_HEADER: [&str; 4] = ["line", "model_name", "model_url", "full_path"];

/// Column order for a set of records
///
/// Identity fields come first, then every other key seen in any record,
/// sorted.
pub fn spec_columns(records: &[SpecificationRecord]) -> Vec<String> {
    let extra: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.keys())
        .filter(|k| !IDENTITY_FIELDS.contains(k))
        .collect();

    IDENTITY_FIELDS
        .iter()
        .copied()
        .chain(extra)
        .map(str::to_string)
        .collect()
}

/// Writes specification records as a table; missing keys are empty cells
pub fn write_specs<W: Write>(w: W, records: &[SpecificationRecord]) -> OutputResult<()> {
    let mut writer = csv::Writer::from_writer(w);
    let columns = spec_columns(records);
    writer.write_record(&columns)?;

    for record in records {
        writer.write_record(columns.iter().map(|c| record.get(c).unwrap_or("")))?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the catalog flattened to one row per variant
pub fn write_catalog<W: Write>(w: W, catalog: &Catalog) -> OutputResult<()> {
    let mut writer = csv::Writer::from_writer(w);
    writer.write_record(CATALOG_HEADER)?;

    for (line, variant) in catalog.variants() {
        writer.write_record([
            line,
            variant.name.as_str(),
            variant.url.as_str(),
            variant.full_path.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes specification records to a CSV file
pub fn write_specs_csv(records: &[SpecificationRecord], path: &Path) -> OutputResult<()> {
    write_specs(File::create(path)?, records)
}

/// Writes the flattened catalog to a CSV file
pub fn write_catalog_csv(catalog: &Catalog, path: &Path) -> OutputResult<()> {
    write_catalog(File::create(path)?, catalog)
}
