//! The catalog store: in-memory entries plus their backing file.
//!
//! Every mutation rewrites the whole file before returning. If that write
//! fails the in-memory catalog is restored to what it was before the call,
//! so memory and disk never drift apart.

use std::path::{Path, PathBuf};

use crate::entry::{Entry, SortKey};
use crate::error::CatalogError;
use crate::record;

/// Owner of the catalog and its backing CSV file.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl CatalogStore {
    /// Open the catalog at `path`, loading whatever it already holds.
    ///
    /// A missing file gives an empty catalog; the file is created on the
    /// first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let entries = record::read_entries(&path)?;
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in current catalog order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `entry` and persist. No validation or deduplication.
    pub fn add(&mut self, entry: Entry) -> Result<(), CatalogError> {
        log::debug!("add: '{}'", entry.title);
        self.mutate(|entries| entries.push(entry))
    }

    /// Remove every entry whose title equals `title` exactly, then persist.
    ///
    /// Returns how many entries were removed. The file is rewritten even when
    /// that number is zero.
    pub fn remove(&mut self, title: &str) -> Result<usize, CatalogError> {
        let before = self.entries.len();
        self.mutate(|entries| entries.retain(|e| e.title != title))?;
        let removed = before - self.entries.len();
        log::debug!("remove: '{title}' matched {removed}");
        Ok(removed)
    }

    /// Case-insensitive substring search.
    ///
    /// A non-empty `title` takes priority; otherwise a non-empty `author` is
    /// used. With neither, there is no query to run and `None` is returned,
    /// which is different from `Some` of an empty list.
    pub fn search(&self, title: Option<&str>, author: Option<&str>) -> Option<Vec<&Entry>> {
        let title = title.filter(|t| !t.is_empty());
        let author = author.filter(|a| !a.is_empty());

        if let Some(query) = title {
            return Some(self.filter_contains(query, |e| &e.title));
        }
        if let Some(query) = author {
            return Some(self.filter_contains(query, |e| &e.author));
        }
        None
    }

    fn filter_contains(&self, query: &str, field: impl Fn(&Entry) -> &str) -> Vec<&Entry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| field(e).to_lowercase().contains(&needle))
            .collect()
    }

    /// Reorder ascending by `key` and persist. Ties keep their prior order.
    pub fn sort(&mut self, key: SortKey) -> Result<(), CatalogError> {
        log::debug!("sort: by {key}");
        self.mutate(|entries| entries.sort_by(|a, b| key.field(a).cmp(key.field(b))))
    }

    /// Sort by a field name. An unknown name leaves the catalog untouched and
    /// returns `Ok(false)`.
    pub fn sort_by_name(&mut self, name: &str) -> Result<bool, CatalogError> {
        match name.parse::<SortKey>() {
            Ok(key) => self.sort(key).map(|()| true),
            Err(e) => {
                log::debug!("sort: {e}, catalog unchanged");
                Ok(false)
            }
        }
    }

    /// Entries whose genre equals `genre` exactly (case-sensitive).
    pub fn recommend(&self, genre: &str) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.genre == genre).collect()
    }

    /// Rewrite the backing file from the current catalog.
    pub fn save(&self) -> Result<(), CatalogError> {
        record::write_entries(&self.path, &self.entries)
    }

    /// Discard in-memory state and load the backing file again.
    pub fn reload(&mut self) -> Result<(), CatalogError> {
        self.entries = record::read_entries(&self.path)?;
        Ok(())
    }

    fn mutate(&mut self, f: impl FnOnce(&mut Vec<Entry>)) -> Result<(), CatalogError> {
        let snapshot = self.entries.clone();
        f(&mut self.entries);
        if let Err(e) = self.save() {
            self.entries = snapshot;
            return Err(e);
        }
        Ok(())
    }
}
