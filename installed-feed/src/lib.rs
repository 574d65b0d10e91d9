/*!
# Installed Package Feed

Paginated, filterable search feed over the locally installed package set,
resolving rich per-package metadata through a two-tier (local, then remote)
provider with bounded-concurrency fetch.

## Features

- **Token-driven paging**: callers own the cursor; every page is
  reconstructed from the continuation token plus the live candidate set, so
  the feed keeps no server-side cursor state
- **Deterministic ordering**: candidates filter and sort case-insensitively
  by package id before paging, and pages re-sort after resolution so
  concurrent completion order never leaks to the caller
- **Bounded fan-out**: per-page metadata lookups run under a semaphore of
  configurable width, all sharing one cancellation token
- **Local-first resolution**: the remote source is only consulted for
  packages the local store does not know

## Architecture

```text
ContinuationToken
  └─> validate (Installed variant only)
        └─> filter + sort + skip (pure lookup)
              └─> bounded concurrent resolve (local tier, then remote)
                    └─> re-sort by package id
                          └─> SearchResult + per-source status
```

## Example

```rust,no_run
use async_trait::async_trait;
use depot_installed_feed::{FeedConfig, InstalledFeed, PackageFeed};
use depot_metadata::{MetadataProvider, PackageIdentity, PackageMetadata};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

struct LocalStore;

#[async_trait]
impl MetadataProvider for LocalStore {
    async fn local_metadata(
        &self,
        identity: &PackageIdentity,
        _include_prerelease: bool,
        _cancel: &CancellationToken,
    ) -> depot_metadata::Result<Option<PackageMetadata>> {
        Ok(Some(PackageMetadata::new(identity.clone())))
    }

    async fn remote_metadata(
        &self,
        identity: &PackageIdentity,
        _include_prerelease: bool,
        _cancel: &CancellationToken,
    ) -> depot_metadata::Result<PackageMetadata> {
        Ok(PackageMetadata::new(identity.clone()))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let installed = vec![
        PackageIdentity::new("serde", "1.0.219"),
        PackageIdentity::new("serde_json", "1.0.143"),
        PackageIdentity::new("tokio", "1.47.1"),
    ];

    let feed = InstalledFeed::new(installed, Arc::new(LocalStore), FeedConfig::default())?;
    let result = feed.search("serde", false, &CancellationToken::new()).await?;

    for item in &result.items {
        println!("{}", item.identity);
    }

    Ok(())
}
```

## Paging Contract

The caller advances the token by the number of items it consumed:

```text
token(search, 0)  ──continue_search──>  items[0..n],  Ready
token(search, n)  ──continue_search──>  items[n..m],  NoMoreItems
```

Order is ascending by package id on every page, so the next start index is
always meaningful against the same candidate set.
*/

mod config;
mod error;
mod feed;
mod result;
mod token;

pub use config::FeedConfig;
pub use error::{FeedError, Result};
pub use feed::{INSTALLED_SOURCE, InstalledFeed, PackageFeed};
pub use result::{LoadingStatus, SearchResult};
pub use token::{ContinuationToken, SearchToken};
