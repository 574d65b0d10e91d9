use crate::error::Result;
use crate::identity::PackageIdentity;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// Rich package record resolved through a [`MetadataProvider`]
///
/// Always carries the identity it describes; every other field depends on
/// what the resolving source knows about the package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Identity this record describes
    pub identity: PackageIdentity,

    /// Short human-readable description
    pub description: Option<String>,

    /// Comma-separated author list
    pub authors: Option<String>,

    /// Total download count reported by the source
    pub download_count: Option<u64>,

    /// Publication timestamp of this version
    pub published: Option<DateTime<Utc>>,

    /// Whether this version is a prerelease
    pub prerelease: bool,
}

impl PackageMetadata {
    /// Create metadata carrying only the identity
    pub fn new(identity: PackageIdentity) -> Self {
        Self {
            identity,
            description: None,
            authors: None,
            download_count: None,
            published: None,
            prerelease: false,
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set authors
    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = Some(authors.into());
        self
    }

    /// Set download count
    pub fn with_download_count(mut self, count: u64) -> Self {
        self.download_count = Some(count);
        self
    }

    /// Set publication timestamp
    pub fn with_published(mut self, published: DateTime<Utc>) -> Self {
        self.published = Some(published);
        self
    }

    /// Set prerelease flag
    pub fn with_prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }
}

/// Two-tier metadata resolution seam
///
/// Local lookups are assumed cheap and offline; remote lookups are networked
/// and expensive. Consumers consult the local tier first and fall back to the
/// remote tier only when the local tier has no record. Both lookups observe
/// the caller's cancellation token, and both leave retry policy to the
/// implementation.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Resolve metadata from the local store
    ///
    /// `Ok(None)` means the package is not known locally, not a failure.
    async fn local_metadata(
        &self,
        identity: &PackageIdentity,
        include_prerelease: bool,
        cancel: &CancellationToken,
    ) -> Result<Option<PackageMetadata>>;

    /// Resolve metadata from the remote source
    async fn remote_metadata(
        &self,
        identity: &PackageIdentity,
        include_prerelease: bool,
        cancel: &CancellationToken,
    ) -> Result<PackageMetadata>;
}
