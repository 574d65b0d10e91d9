use serde::{Deserialize, Serialize};

/// Cursor state for one paged search: predicate plus page offset
///
/// Immutable once constructed. The caller owns the cursor: it mints the
/// first-page token, and after consuming a page it derives the next token
/// with [`SearchToken::advanced`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchToken {
    /// Case-insensitive substring the package id must contain
    ///
    /// An empty string matches every candidate.
    pub search_string: String,

    /// Number of already-consumed matches to skip
    pub start_index: usize,

    /// Whether prerelease versions are eligible during resolution
    pub include_prerelease: bool,
}

impl SearchToken {
    /// Token selecting the first page of a fresh search
    pub fn new(search_string: impl Into<String>, include_prerelease: bool) -> Self {
        Self {
            search_string: search_string.into(),
            start_index: 0,
            include_prerelease,
        }
    }

    /// Token for the page following `consumed` further items
    pub fn advanced(&self, consumed: usize) -> Self {
        Self {
            search_string: self.search_string.clone(),
            start_index: self.start_index + consumed,
            include_prerelease: self.include_prerelease,
        }
    }
}

/// Continuation token callers pass back between successive feed calls
///
/// Each feed family mints its own variant and accepts only that variant;
/// handing a feed a token minted by a different family is a caller error,
/// not something a feed recovers from. Tokens are opaque to callers but
/// serialize as tagged data so they survive a round trip through the UI
/// layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "feed", content = "token", rename_all = "snake_case")]
pub enum ContinuationToken {
    /// Cursor over the locally installed candidate set
    Installed(SearchToken),

    /// Cursor minted by the registry-backed browse feed
    Browse(SearchToken),
}
