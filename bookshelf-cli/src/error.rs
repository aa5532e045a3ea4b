use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog load/save failed
    #[error("{0}")]
    Catalog(#[from] bookshelf_core::CatalogError),

    /// Lookup client could not be built
    #[error("Lookup error: {0}")]
    Lookup(#[from] bookshelf_lookup::LookupError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
