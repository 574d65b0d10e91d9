/*!
# Depot Metadata

Shared package identity and metadata types for depot feeds, plus the
[`MetadataProvider`] seam feeds resolve rich package records through.

Resolution is two-tier: a cheap local store consulted first, and a networked
remote source consulted only when the local store has no record. The provider
owns everything behind that seam — caching, retry, backoff — so consumers stay
free of transport concerns.

## Example

```rust
use depot_metadata::{PackageIdentity, PackageMetadata};

let identity = PackageIdentity::new("serde", "1.0.219");
let metadata = PackageMetadata::new(identity)
    .with_description("A generic serialization/deserialization framework")
    .with_download_count(400_000_000);

assert!(!metadata.prerelease);
```
*/

mod error;
mod identity;
mod provider;

pub use error::{MetadataError, Result};
pub use identity::PackageIdentity;
pub use provider::{MetadataProvider, PackageMetadata};
