use serde::{Deserialize, Serialize};

/// Configuration for the installed-package feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Maximum number of items returned per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Maximum concurrent metadata resolutions per page
    #[serde(default = "default_max_concurrent_resolves")]
    pub max_concurrent_resolves: usize,
}

fn default_page_size() -> usize {
    128
}

fn default_max_concurrent_resolves() -> usize {
    num_cpus::get()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_concurrent_resolves: default_max_concurrent_resolves(),
        }
    }
}

impl FeedConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("page_size must be > 0".to_string());
        }

        if self.max_concurrent_resolves == 0 {
            return Err("max_concurrent_resolves must be > 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_valid() {
        let config = FeedConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.page_size > 0);
        assert!(config.max_concurrent_resolves > 0);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = FeedConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = FeedConfig {
            max_concurrent_resolves: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: FeedConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.page_size, FeedConfig::default().page_size);
        assert!(config.max_concurrent_resolves > 0);
    }
}
