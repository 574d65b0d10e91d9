use crate::config::FeedConfig;
use crate::error::{FeedError, Result};
use crate::result::{LoadingStatus, SearchResult};
use crate::token::{ContinuationToken, SearchToken};
use async_trait::async_trait;
use depot_metadata::{MetadataProvider, PackageIdentity, PackageMetadata};
use log::{debug, info};
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

/// Source name the installed feed reports its status under
pub const INSTALLED_SOURCE: &str = "Installed";

/// A paged, tokenized search surface over one package source
#[async_trait]
pub trait PackageFeed: Send + Sync {
    /// Token selecting the first page of a fresh search on this feed
    fn first_page_token(&self, search_string: &str, include_prerelease: bool) -> ContinuationToken;

    /// Resolve the page of results the token points at
    async fn continue_search(
        &self,
        token: &ContinuationToken,
        cancel: &CancellationToken,
    ) -> Result<SearchResult>;

    /// Run the first page of a fresh search
    async fn search(
        &self,
        search_string: &str,
        include_prerelease: bool,
        cancel: &CancellationToken,
    ) -> Result<SearchResult> {
        let token = self.first_page_token(search_string, include_prerelease);
        self.continue_search(&token, cancel).await
    }
}

/// Search feed enumerating the locally installed package set
///
/// Stateless across calls: every page is reconstructed from the continuation
/// token and the candidate set the feed was built with. Metadata is resolved
/// per page through the two-tier provider, local store first.
pub struct InstalledFeed {
    candidates: Vec<PackageIdentity>,
    provider: Arc<dyn MetadataProvider>,
    config: FeedConfig,
}

impl InstalledFeed {
    /// Create a feed over an already-deduplicated candidate set
    ///
    /// `candidates` must hold one entry per package id; callers keep the
    /// latest version per id before constructing the feed.
    pub fn new(
        candidates: Vec<PackageIdentity>,
        provider: Arc<dyn MetadataProvider>,
        config: FeedConfig,
    ) -> Result<Self> {
        config.validate().map_err(FeedError::InvalidConfig)?;

        Ok(Self {
            candidates,
            provider,
            config,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Resolve metadata for each identity on the page, at most
    /// `max_concurrent_resolves` lookups in flight at once
    ///
    /// The first failed resolution cancels the rest of the batch and fails
    /// the call; a cancelled call never yields a partial page.
    async fn resolve_page(
        &self,
        page: Vec<PackageIdentity>,
        include_prerelease: bool,
        cancel: &CancellationToken,
    ) -> Result<Vec<PackageMetadata>> {
        if cancel.is_cancelled() {
            return Err(FeedError::Cancelled);
        }

        let batch_cancel = cancel.child_token();
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_resolves));

        let mut tasks = Vec::with_capacity(page.len());

        for identity in page {
            let permit = tokio::select! {
                permit = semaphore.clone().acquire_owned() => {
                    permit.map_err(|_| FeedError::Cancelled)?
                }
                _ = batch_cancel.cancelled() => return Err(FeedError::Cancelled),
            };

            let provider = self.provider.clone();
            let task_cancel = batch_cancel.clone();

            tasks.push(tokio::spawn(async move {
                let result = tokio::select! {
                    result = resolve_metadata(
                        provider.as_ref(),
                        &identity,
                        include_prerelease,
                        &task_cancel,
                    ) => result,
                    _ = task_cancel.cancelled() => Err(FeedError::Cancelled),
                };
                drop(permit);
                result
            }));
        }

        let mut resolved = Vec::with_capacity(tasks.len());
        for task in tasks {
            match task.await? {
                Ok(metadata) => resolved.push(metadata),
                Err(err) => {
                    batch_cancel.cancel();
                    return Err(err);
                }
            }
        }

        if cancel.is_cancelled() {
            return Err(FeedError::Cancelled);
        }

        Ok(resolved)
    }
}

#[async_trait]
impl PackageFeed for InstalledFeed {
    fn first_page_token(&self, search_string: &str, include_prerelease: bool) -> ContinuationToken {
        ContinuationToken::Installed(SearchToken::new(search_string, include_prerelease))
    }

    async fn continue_search(
        &self,
        token: &ContinuationToken,
        cancel: &CancellationToken,
    ) -> Result<SearchResult> {
        let ContinuationToken::Installed(search_token) = token else {
            return Err(FeedError::InvalidContinuation);
        };

        debug!(
            "installed feed search '{}' from index {}",
            search_token.search_string, search_token.start_index
        );

        let mut page = perform_lookup(&self.candidates, search_token);
        let has_more = page.len() > self.config.page_size;
        page.truncate(self.config.page_size);
        debug!("{} candidates on this page (more: {has_more})", page.len());

        let items = self
            .resolve_page(page, search_token.include_prerelease, cancel)
            .await?;
        debug!("resolved {} metadata records", items.len());

        let result = assemble_result(items, has_more);
        info!(
            "installed feed returned {} items with status {:?}",
            result.len(),
            result.status(INSTALLED_SOURCE)
        );

        Ok(result)
    }
}

/// Filter, order, and skip the candidate set for one token
///
/// Pure function of its inputs: keeps ids containing the search string
/// case-insensitively (an empty string keeps everything), orders them
/// ascending by id, and skips the part earlier pages already consumed.
fn perform_lookup(candidates: &[PackageIdentity], token: &SearchToken) -> Vec<PackageIdentity> {
    let needle = token.search_string.to_lowercase();

    let mut matches: Vec<PackageIdentity> = candidates
        .iter()
        .filter(|candidate| candidate.id.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    matches.sort_by(|a, b| compare_ids(&a.id, &b.id));

    matches.into_iter().skip(token.start_index).collect()
}

/// Case-insensitive id ordering with the raw id as tiebreaker, so the
/// candidate order stays total even for ids differing only in case
fn compare_ids(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Local tier first; the remote source is consulted only when the local
/// store has no record for the identity
async fn resolve_metadata(
    provider: &dyn MetadataProvider,
    identity: &PackageIdentity,
    include_prerelease: bool,
    cancel: &CancellationToken,
) -> Result<PackageMetadata> {
    let local = provider
        .local_metadata(identity, include_prerelease, cancel)
        .await?;
    if let Some(metadata) = local {
        return Ok(metadata);
    }

    let metadata = provider
        .remote_metadata(identity, include_prerelease, cancel)
        .await?;
    Ok(metadata)
}

/// Re-sort the resolved page and attach the per-source status
///
/// Concurrent resolution finishes in arbitrary order, and the caller's next
/// start index is only meaningful against the lookup order, so the page is
/// sorted by package id again before it leaves the feed.
fn assemble_result(mut items: Vec<PackageMetadata>, has_more: bool) -> SearchResult {
    items.sort_by(|a, b| compare_ids(&a.identity.id, &b.identity.id));

    let status = if items.is_empty() {
        LoadingStatus::NoItemsFound
    } else if has_more {
        LoadingStatus::Ready
    } else {
        LoadingStatus::NoMoreItems
    };

    SearchResult::from_items(items, INSTALLED_SOURCE, status)
}
