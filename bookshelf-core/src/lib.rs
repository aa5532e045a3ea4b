//! Book catalog data model, CSV persistence, and shared settings.
//!
//! This crate owns the catalog and its backing file. It has no knowledge of
//! the metadata lookup or of any frontend; the CLI drives it through
//! [`CatalogStore`].

pub mod entry;
pub mod error;
pub mod record;
pub mod settings;
pub mod store;

pub use entry::{Entry, SortKey, UnknownSortKey};
pub use error::CatalogError;
pub use record::{parse_records, read_entries, write_entries, FIELD_COUNT};
pub use settings::{
    load_settings_string, load_settings_string_from, resolve_library_path, save_library_path,
    save_library_path_to, settings_path, LibrarySettings, LookupSettings, SettingSource, Settings,
    API_KEY_ENV, DEFAULT_LIBRARY_FILE,
};
pub use store::CatalogStore;
