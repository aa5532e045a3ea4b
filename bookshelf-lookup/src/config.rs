use std::time::Duration;

/// Google Books volume search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// Request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection options for [`GoogleBooksClient`](crate::GoogleBooksClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub api_key: Option<String>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            api_key: None,
        }
    }
}

impl LookupConfig {
    /// Apply optional overrides on top of the defaults.
    pub fn with_overrides(
        mut self,
        endpoint: Option<String>,
        timeout_secs: Option<u64>,
        api_key: Option<String>,
    ) -> Self {
        if let Some(url) = endpoint.filter(|u| !u.is_empty()) {
            self.endpoint = url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(key) = api_key {
            self.api_key = Some(key);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let c = LookupConfig::default().with_overrides(None, None, None);
        assert_eq!(c, LookupConfig::default());

        let c = LookupConfig::default().with_overrides(
            Some("http://localhost/v".to_string()),
            Some(0),
            Some("k".to_string()),
        );
        assert_eq!(c.endpoint, "http://localhost/v");
        assert_eq!(c.timeout, Duration::from_secs(1));
        assert_eq!(c.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_empty_endpoint_ignored() {
        let c = LookupConfig::default().with_overrides(Some(String::new()), None, None);
        assert_eq!(c.endpoint, DEFAULT_ENDPOINT);
    }
}
