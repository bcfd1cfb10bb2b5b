use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

use super::variant::split_year_edition;

/// Fields present in every record, in column order
pub const IDENTITY_FIELDS: [&str; 6] = ["make", "line", "style", "model", "year", "edition"];

/// Identity of a spec page, derived from its URL path alone
///
/// A spec URL ends in `/<line>/<style>/<model>/<year>[-<edition>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecIdentity {
    pub line: String,
    pub style: String,
    pub model: String,
    pub year: String,
    pub edition: String,
}

impl SpecIdentity {
    /// Reads the identity from the last four non-empty path segments
    ///
    /// Returns None if the path has fewer than four segments.
    pub fn from_url(url: &Url) -> Option<Self> {
        let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();

        let [line, style, model, last] = segments.get(segments.len().checked_sub(4)?..)? else {
            return None;
        };

        let (year, edition) = split_year_edition(last);

        Some(Self {
            line: line.to_string(),
            style: style.to_string(),
            model: model.to_string(),
            year,
            edition,
        })
    }
}

/// The flattened contents of one model variant's specification page
///
/// Keys other than the identity fields have the form
/// `<category>_<normalized label>`. Values are kept verbatim, unit suffixes
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SpecificationRecord {
    fields: BTreeMap<String, String>,
}

impl SpecificationRecord {
    /// Creates a record holding only the make and the URL-derived identity
    pub fn with_identity(make: &str, identity: SpecIdentity) -> Self {
        let mut record = Self::default();
        record.insert("make", make);
        record.insert("line", identity.line);
        record.insert("style", identity.style);
        record.insert("model", identity.model);
        record.insert("year", identity.year);
        record.insert("edition", identity.edition);
        record
    }

    /// Sets a field, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields beyond the identity fields
    pub fn spec_count(&self) -> usize {
        self.fields
            .keys()
            .filter(|k| !IDENTITY_FIELDS.contains(&k.as_str()))
            .count()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
