use std::sync::Arc;
use std::time::Duration;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_core::Settings;
use bookshelf_lookup::{BookDetails, GoogleBooksClient, LookupConfig, spawn_lookup};

use crate::error::CliError;
use crate::spinner::wait_with_spinner;

/// Build the lookup configuration from settings and the environment.
pub(crate) fn lookup_config(settings: &Settings) -> LookupConfig {
    let (api_key, _) = settings.api_key();
    LookupConfig::default().with_overrides(
        settings.lookup.endpoint.clone(),
        settings.lookup.timeout_secs,
        api_key,
    )
}

/// Look a title up on a worker thread, waiting at most `timeout`.
///
/// Only a failure to build the HTTP client is an error; every lookup
/// failure is logged and reported as `None`.
pub(crate) fn lookup_title(
    settings: &Settings,
    title: &str,
    timeout: Duration,
    quiet: bool,
) -> Result<Option<BookDetails>, CliError> {
    let client = GoogleBooksClient::new(lookup_config(settings))?;
    let pending = spawn_lookup(Arc::new(client), title);
    Ok(wait_with_spinner(pending, timeout, quiet))
}

pub(crate) fn run_fetch(
    settings: &Settings,
    title: &str,
    timeout: Duration,
    quiet: bool,
) -> Result<(), CliError> {
    match lookup_title(settings, title, timeout, quiet)? {
        Some(details) => print_details(&details),
        None => log::info!(
            "{}",
            format!("No details found for '{title}'.").if_supports_color(Stdout, |t| t.dimmed())
        ),
    }
    Ok(())
}

fn print_details(details: &BookDetails) {
    let rows = [
        ("Title", details.title.as_str()),
        ("Author", details.author.as_str()),
        ("Genre", details.genre.as_str()),
        ("Published", details.published.as_str()),
    ];
    for (label, value) in rows {
        log::info!(
            "  {} {}",
            format!("{:<10}", format!("{label}:")).if_supports_color(Stdout, |t| t.bold()),
            value
        );
    }
}
