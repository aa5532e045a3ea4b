use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading, saving, or configuring the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error on the backing file (anything other than "not found" on load)
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV reader or writer rejected the data
    #[error("CSV error in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    /// A persisted record does not have exactly six fields
    #[error(
        "malformed record in {} at line {line}: expected {expected} fields, found {found}",
        path.display()
    )]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The settings file could not be read or written
    #[error("Settings error: {0}")]
    Settings(String),
}

impl CatalogError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn csv(path: impl AsRef<Path>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
