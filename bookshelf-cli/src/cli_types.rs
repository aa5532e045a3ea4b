//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use bookshelf_core::SortKey;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Keep a personal catalog of books", long_about = None)]
pub(crate) struct Cli {
    /// Catalog file (defaults to the configured library, then ./library.csv)
    #[arg(short, long, global = true)]
    pub library: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Fields for a new entry. Everything but the title may be left empty.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct EntryArgs {
    /// Book title
    pub title: String,

    #[arg(short, long)]
    pub author: Option<String>,

    #[arg(short, long)]
    pub genre: Option<String>,

    /// Publication year (free text)
    #[arg(short, long)]
    pub year: Option<String>,

    #[arg(short, long)]
    pub rating: Option<String>,

    #[arg(long)]
    pub review: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show every book in the catalog
    List,

    /// Add a book to the catalog
    Add {
        #[command(flatten)]
        entry: EntryArgs,

        /// Fill author, genre and year from an online lookup of the title
        #[arg(long)]
        fetch: bool,

        /// Seconds to wait for the lookup before adding without it
        #[arg(long, default_value_t = 15)]
        fetch_timeout: u64,
    },

    /// Remove every book with exactly this title
    Remove {
        title: String,
    },

    /// Search by title, or by author when no title is given (case-insensitive)
    Search {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        author: Option<String>,
    },

    /// Reorder the catalog and save the new order
    Sort {
        #[arg(value_enum)]
        by: SortField,
    },

    /// Show books in exactly this genre (case-sensitive)
    Recommend {
        genre: String,
    },

    /// Look up details for a title online without changing the catalog
    Fetch {
        title: String,

        /// Seconds to wait for a response
        #[arg(long, default_value_t = 15)]
        timeout: u64,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortField {
    Title,
    Author,
    Genre,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Title => SortKey::Title,
            SortField::Author => SortKey::Author,
            SortField::Genre => SortKey::Genre,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where each value comes from
    Show,

    /// Print the settings file path
    Path,

    /// Remember a catalog file as the default library
    SetLibrary {
        path: PathBuf,
    },

    /// Forget the default library
    ClearLibrary,
}
