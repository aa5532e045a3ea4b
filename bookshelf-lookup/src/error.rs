/// Errors that can occur during a metadata lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned HTTP {0}")]
    Status(u16),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty title query")]
    EmptyQuery,
}
