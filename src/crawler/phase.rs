//! Crawl phase definitions for tracking traversal progress
//!
//! A run moves through the phases exactly once, in order.

use std::fmt;

/// Represents the current phase of a catalog crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CrawlPhase {
    /// Reading the catalog navigation for product lines
    DiscoveringLines,

    /// Enumerating model variants for each line
    DiscoveringModels,

    /// Scraping one specification page per variant
    FetchingSpecs,

    /// Result finalized
    Done,
}

impl CrawlPhase {
    /// Returns the phase that follows this one, or None for Done
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::DiscoveringLines => Some(Self::DiscoveringModels),
            Self::DiscoveringModels => Some(Self::FetchingSpecs),
            Self::FetchingSpecs => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Returns true if `to` is a legal transition from this phase
    ///
    /// Discovery-only runs finish straight after model discovery, so
    /// DiscoveringModels may also move to Done.
    pub fn can_transition_to(&self, to: Self) -> bool {
        self.next() == Some(to) || (*self == Self::DiscoveringModels && to == Self::Done)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DiscoveringLines => "discovering_lines",
            Self::DiscoveringModels => "discovering_models",
            Self::FetchingSpecs => "fetching_specs",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
