//! JSON writers for catalogs and specification records

use crate::model::{Catalog, SpecificationRecord};
use crate::output::traits::OutputResult;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn write_pretty<T: Serialize + ?Sized>(value: &T, path: &Path) -> OutputResult<()> {
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, value)?;
    w.flush()?;
    Ok(())
}

/// Writes the catalog as an object keyed by line name, in discovery order
pub fn write_catalog_json(catalog: &Catalog, path: &Path) -> OutputResult<()> {
    write_pretty(catalog, path)
}

/// Writes specification records as an array of flat objects
pub fn write_specs_json(records: &[SpecificationRecord], path: &Path) -> OutputResult<()> {
    write_pretty(records, path)
}
