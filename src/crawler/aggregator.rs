//! Accumulation of specification records and crawl counters
//!
//! The aggregator is owned by a single sequential traversal and handed
//! around by `&mut`; it is frozen into a [`CrawlResult`] once the crawl ends.

use crate::model::SpecificationRecord;
use chrono::{DateTime, Utc};

/// Final, read-only outcome of a crawl
#[derive(Debug, Clone)]
pub struct CrawlResult {
    /// Scraped records in traversal order
    pub records: Vec<SpecificationRecord>,

    /// Number of model variants discovered
    pub total: usize,

    /// Variants whose spec page was scraped
    pub successes: usize,

    /// Variants whose spec page could not be fetched or parsed
    pub failures: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlResult {
    /// Share of discovered variants that were scraped, in percent
    ///
    /// A run that discovered nothing counts as a total failure.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.successes as f64 / self.total as f64 * 100.0
    }

    /// Wall-clock duration of the run in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Append-only collector for one crawl run
#[derive(Debug)]
pub struct RecordAggregator {
    records: Vec<SpecificationRecord>,
    total: usize,
    successes: usize,
    failures: usize,
    started_at: DateTime<Utc>,
}

impl RecordAggregator {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            successes: 0,
            failures: 0,
            started_at: Utc::now(),
        }
    }

    /// Adds newly discovered variants to the total
    pub fn add_discovered(&mut self, count: usize) {
        self.total += count;
    }

    pub fn record_success(&mut self, record: SpecificationRecord) {
        self.records.push(record);
        self.successes += 1;
    }

    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Freezes the collected state into a result
    pub fn finish(self) -> CrawlResult {
        CrawlResult {
            records: self.records,
            total: self.total,
            successes: self.successes,
            failures: self.failures,
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }
}

impl Default for RecordAggregator {
    fn default() -> Self {
        Self::new()
    }
}
