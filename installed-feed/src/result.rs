use depot_metadata::PackageMetadata;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Readiness reported for one search source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadingStatus {
    /// The page filled up and further matches remain
    Ready,

    /// The page returned the final matches
    NoMoreItems,

    /// Nothing matched on this page
    NoItemsFound,
}

/// One page of resolved search results with per-source readiness
///
/// `items` order is significant: the caller advances its continuation token
/// by the number of items it consumed, so the page must stay ascending by
/// package id across repeated calls with the same token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Resolved metadata, ascending by package id
    pub items: Vec<PackageMetadata>,

    /// Readiness keyed by source name
    pub source_status: HashMap<String, LoadingStatus>,
}

impl SearchResult {
    /// Create a result from resolved items and one source's status
    pub fn from_items(items: Vec<PackageMetadata>, source: &str, status: LoadingStatus) -> Self {
        let mut source_status = HashMap::new();
        source_status.insert(source.to_string(), status);

        Self {
            items,
            source_status,
        }
    }

    /// Status reported by `source`, if that source contributed
    pub fn status(&self, source: &str) -> Option<LoadingStatus> {
        self.source_status.get(source).copied()
    }

    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
