use serde::ser::{Serialize, SerializeMap, Serializer};

use super::variant::ModelVariant;

/// Variants discovered for one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLine {
    pub name: String,
    pub models: Vec<ModelVariant>,
}

/// Discovery-only view of a manufacturer catalog: line → model variants
///
/// Lines keep discovery order. Serializes as a JSON object keyed by line name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    lines: Vec<CatalogLine>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line with its variants; lines without variants are not kept
    pub fn push_line(&mut self, name: impl Into<String>, models: Vec<ModelVariant>) {
        if models.is_empty() {
            return;
        }
        self.lines.push(CatalogLine {
            name: name.into(),
            models,
        });
    }

    pub fn lines(&self) -> &[CatalogLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of variants across all lines
    pub fn total_variants(&self) -> usize {
        self.lines.iter().map(|l| l.models.len()).sum()
    }

    /// Iterates `(line name, variant)` pairs in discovery order
    pub fn variants(&self) -> impl Iterator<Item = (&str, &ModelVariant)> {
        self.lines
            .iter()
            .flat_map(|l| l.models.iter().map(move |m| (l.name.as_str(), m)))
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.lines.len()))?;
        for line in &self.lines {
            map.serialize_entry(&line.name, &line.models)?;
        }
        map.end()
    }
}
