//! CSV codec for the backing file.
//!
//! One record per line, no header row, exactly [`FIELD_COUNT`] fields in the
//! order `title, author, genre, year, rating, review`. Quoting follows the
//! `csv` crate (RFC 4180), so commas, quotes and newlines inside a field
//! survive a round trip.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::entry::{Entry, non_empty};
use crate::error::CatalogError;

/// Number of fields in every persisted record.
pub const FIELD_COUNT: usize = 6;

/// Read every entry from `path` in file order.
///
/// A missing file is an empty catalog. Any other I/O failure, and any record
/// without exactly six fields, is an error.
pub fn read_entries(path: &Path) -> Result<Vec<Entry>, CatalogError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No catalog at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(CatalogError::io(path, e)),
    };

    let entries = parse_records(file, path)?;
    log::debug!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse CSV records from any reader. `source` is only used in error messages.
pub fn parse_records<R: Read>(reader: R, source: &Path) -> Result<Vec<Entry>, CatalogError> {
    // flexible so a short row reaches our own check and gets a line number
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| CatalogError::csv(source, e))?;

        if record.len() != FIELD_COUNT {
            return Err(CatalogError::MalformedRecord {
                path: source.to_path_buf(),
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: FIELD_COUNT,
                found: record.len(),
            });
        }

        let get = |i: usize| record.get(i).unwrap_or("").to_string();
        entries.push(Entry {
            title: get(0),
            author: get(1),
            genre: get(2),
            year: get(3),
            rating: non_empty(get(4)),
            review: non_empty(get(5)),
        });
    }

    Ok(entries)
}

/// Serialize entries to any writer, one record each, in slice order.
pub fn write_records<W: Write>(writer: W, entries: &[Entry]) -> csv::Result<W> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for entry in entries {
        writer.write_record(entry.fields())?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Replace the file at `path` with `entries`.
///
/// The data goes to a sibling temp file first and is renamed over the target,
/// so a crash mid-write leaves the previous catalog intact.
pub fn write_entries(path: &Path, entries: &[Entry]) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
        }
    }

    let tmp = tmp_path(path);
    let result = write_tmp(&tmp, entries).and_then(|()| {
        fs::rename(&tmp, path).map_err(|e| CatalogError::io(path, e))
    });

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    } else {
        log::debug!("Saved {} entries to {}", entries.len(), path.display());
    }
    result
}

fn write_tmp(tmp: &Path, entries: &[Entry]) -> Result<(), CatalogError> {
    let file = File::create(tmp).map_err(|e| CatalogError::io(tmp, e))?;
    let file = write_records(file, entries).map_err(|e| CatalogError::csv(tmp, e))?;
    file.sync_all().map_err(|e| CatalogError::io(tmp, e))
}

/// `library.csv` -> `library.csv.tmp`, in the same directory.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
