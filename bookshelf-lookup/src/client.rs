use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::config::LookupConfig;
use crate::error::LookupError;
use crate::types::{BookDetails, parse_volumes};

/// Anything that can turn a title query into at most one candidate.
///
/// Failures of any kind are reported as `None`; implementations log the
/// cause instead of returning it.
pub trait BookLookup: Send + Sync {
    fn lookup(&self, title: &str) -> Option<BookDetails>;
}

/// Blocking HTTP client for the Google Books volumes API.
pub struct GoogleBooksClient {
    http: Client,
    config: LookupConfig,
}

impl GoogleBooksClient {
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Search by title and return the first candidate.
    ///
    /// `Ok(None)` is a successful search with no matches. Any status other
    /// than 200 is an error.
    pub fn fetch(&self, title: &str) -> Result<Option<BookDetails>, LookupError> {
        let query = title.trim();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let mut params = vec![("q", format!("intitle:{query}"))];
        if let Some(ref key) = self.config.api_key {
            params.push(("key", key.clone()));
        }

        log::debug!("GET {} q=intitle:{query}", self.config.endpoint);
        let resp = self
            .http
            .get(&self.config.endpoint)
            .query(&params)
            .send()?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(LookupError::Status(status.as_u16()));
        }

        let text = resp.text()?;
        parse_volumes(&text, query)
    }
}

impl BookLookup for GoogleBooksClient {
    fn lookup(&self, title: &str) -> Option<BookDetails> {
        match self.fetch(title) {
            Ok(Some(details)) => Some(details),
            Ok(None) => {
                log::debug!("No volumes matched '{title}'");
                None
            }
            Err(e) => {
                log::warn!("Metadata lookup for '{title}' failed: {e}");
                None
            }
        }
    }
}
