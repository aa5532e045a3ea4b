//! Book metadata lookup against the Google Books volumes API.
//!
//! The lookup is best-effort: callers that only care about "a candidate or
//! nothing" use the [`BookLookup`] trait, which logs and swallows failures.
//! [`GoogleBooksClient::fetch`] keeps the error for callers that want it.

pub mod background;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use background::{LookupPoll, PendingLookup, spawn_lookup};
pub use client::{BookLookup, GoogleBooksClient};
pub use config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, LookupConfig};
pub use error::LookupError;
pub use types::{BookDetails, UNKNOWN, parse_volumes};
