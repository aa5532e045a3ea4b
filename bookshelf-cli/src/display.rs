//! Table rendering for catalog entries.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_core::Entry;

pub(crate) const HEADERS: [&str; 6] = ["Title", "Author", "Genre", "Year", "Rating", "Review"];

/// Widest a column may grow before its cells are truncated.
const MAX_COLUMN_WIDTH: usize = 40;

/// Lay out a header line and one line per entry. Columns are separated by
/// two spaces and trailing padding is trimmed.
pub(crate) fn render_table(entries: &[&Entry]) -> (String, Vec<String>) {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for entry in entries {
        for (w, field) in widths.iter_mut().zip(entry.fields()) {
            *w = (*w).max(cell(field).chars().count());
        }
    }

    let header = join_padded(HEADERS.map(String::from), &widths);
    let rows = entries
        .iter()
        .map(|e| join_padded(e.fields().map(cell), &widths))
        .collect();
    (header, rows)
}

/// Flatten newlines and clip to [`MAX_COLUMN_WIDTH`].
fn cell(field: &str) -> String {
    let flat: String = field
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= MAX_COLUMN_WIDTH {
        return flat;
    }
    let mut clipped: String = flat.chars().take(MAX_COLUMN_WIDTH - 1).collect();
    clipped.push('…');
    clipped
}

fn join_padded(cells: [String; 6], widths: &[usize; 6]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{c:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

/// Print entries as a table, or a note when there are none.
pub(crate) fn print_entries(entries: &[&Entry], empty_message: &str) {
    if entries.is_empty() {
        log::info!("{}", empty_message.if_supports_color(Stdout, |t| t.dimmed()));
        return;
    }
    let (header, rows) = render_table(entries);
    log::info!("{}", header.if_supports_color(Stdout, |t| t.bold()));
    for row in rows {
        log::info!("{row}");
    }
}
