use std::time::Duration;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_core::{CatalogStore, Entry, Settings, SortKey};
use bookshelf_lookup::BookDetails;

use crate::cli_types::EntryArgs;
use crate::commands::fetch;
use crate::display::print_entries;
use crate::error::CliError;

pub(crate) fn run_list(store: &CatalogStore) {
    let entries: Vec<&Entry> = store.entries().iter().collect();
    print_entries(&entries, "The catalog is empty.");
}

/// Add an entry, optionally pre-filling blanks from an online lookup.
pub(crate) fn run_add(
    store: &mut CatalogStore,
    settings: &Settings,
    args: EntryArgs,
    fetch_details: bool,
    fetch_timeout: Duration,
    quiet: bool,
) -> Result<(), CliError> {
    let details = if fetch_details {
        let found = fetch::lookup_title(settings, &args.title, fetch_timeout, quiet)?;
        if found.is_none() {
            log::warn!("No details found for '{}'; adding as entered", args.title);
        }
        found
    } else {
        None
    };

    let entry = build_entry(args, details.as_ref());
    let title = entry.title.clone();
    store.add(entry)?;

    log::info!(
        "Added {} ({} in catalog)",
        title.if_supports_color(Stdout, |t| t.green()),
        store.len()
    );
    run_list(store);
    Ok(())
}

/// Merge typed arguments with lookup details. Anything the user typed wins;
/// the lookup only fills author, genre and year when they were left blank.
pub(crate) fn build_entry(args: EntryArgs, details: Option<&BookDetails>) -> Entry {
    let typed = |v: Option<String>| v.filter(|s| !s.is_empty());

    let author = typed(args.author).or_else(|| details.map(|d| d.author.clone()));
    let genre = typed(args.genre).or_else(|| details.map(|d| d.genre.clone()));
    let year = typed(args.year).or_else(|| {
        details.map(|d| d.year().map(str::to_string).unwrap_or_else(|| d.published.clone()))
    });

    Entry::new(
        args.title,
        author.unwrap_or_default(),
        genre.unwrap_or_default(),
        year.unwrap_or_default(),
    )
    .with_rating(args.rating.unwrap_or_default())
    .with_review(args.review.unwrap_or_default())
}

pub(crate) fn run_remove(store: &mut CatalogStore, title: &str) -> Result<(), CliError> {
    let removed = store.remove(title)?;
    if removed == 0 {
        log::info!(
            "No book titled {} in the catalog",
            title.if_supports_color(Stdout, |t| t.yellow())
        );
    } else {
        log::info!(
            "Removed {} {} titled {}",
            removed,
            if removed == 1 { "entry" } else { "entries" },
            title.if_supports_color(Stdout, |t| t.green())
        );
    }
    run_list(store);
    Ok(())
}

pub(crate) fn run_search(store: &CatalogStore, title: Option<&str>, author: Option<&str>) {
    match store.search(title, author) {
        Some(hits) => print_entries(&hits, "No matching books."),
        None => log::warn!("Nothing to search for: give --title or --author"),
    }
}

pub(crate) fn run_sort(store: &mut CatalogStore, key: SortKey) -> Result<(), CliError> {
    store.sort(key)?;
    log::info!(
        "Sorted by {}",
        key.as_str().if_supports_color(Stdout, |t| t.cyan())
    );
    run_list(store);
    Ok(())
}

pub(crate) fn run_recommend(store: &CatalogStore, genre: &str) {
    let recs = store.recommend(genre);
    print_entries(&recs, &format!("No books in genre '{genre}'."));
}
