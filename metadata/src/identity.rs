use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique (name, version) key of one resolvable package
///
/// Within one search invocation's candidate set the `id` must be unique;
/// callers deduplicate to one version per id (typically the latest) before
/// handing candidates to a feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageIdentity {
    /// Package name
    pub id: String,

    /// Version string, opaque to feeds
    pub version: String,
}

impl PackageIdentity {
    /// Create new identity
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identity_display() {
        let identity = PackageIdentity::new("tokio", "1.47.1");
        assert_eq!(identity.to_string(), "tokio 1.47.1");
    }

    #[test]
    fn test_identity_equality_includes_version() {
        let a = PackageIdentity::new("serde", "1.0.218");
        let b = PackageIdentity::new("serde", "1.0.219");
        assert!(a != b);
        assert_eq!(a, PackageIdentity::new("serde", "1.0.218"));
    }
}
