//! Shared application settings (library path, metadata lookup options).
//!
//! The settings file lives at `~/.config/bookshelf/settings.toml`:
//!
//! ```toml
//! [library]
//! path = "/home/me/books/library.csv"
//!
//! [lookup]
//! endpoint = "https://www.googleapis.com/books/v1/volumes"
//! timeout_secs = 10
//! api_key = "..."
//! ```
//!
//! Every field is optional; a missing or unparsable file means defaults.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// File name used when no library path is configured anywhere.
pub const DEFAULT_LIBRARY_FILE: &str = "library.csv";

/// Environment variable that overrides `lookup.api_key`.
pub const API_KEY_ENV: &str = "BOOKSHELF_GOOGLE_API_KEY";

/// Canonical path to the settings file: `~/.config/bookshelf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("bookshelf").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub library: LibrarySettings,
    #[serde(default)]
    pub lookup: LookupSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySettings {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Raw lookup options. Defaults are applied by the lookup client, so
/// unset fields stay `None` here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupSettings {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Where a resolved setting came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// Given on the command line.
    CommandLine,
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the settings file.
    SettingsFile,
    /// Built-in default.
    Default,
    /// Not set anywhere.
    Missing,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandLine => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${var}"),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

impl Settings {
    /// Load from [`settings_path`], falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Load from an explicit file, falling back to defaults when it is
    /// missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Resolve the lookup API key: environment variable first, then the
    /// settings file.
    pub fn api_key(&self) -> (Option<String>, SettingSource) {
        resolve_api_key(std::env::var(API_KEY_ENV).ok(), self)
    }
}

fn resolve_api_key(env: Option<String>, settings: &Settings) -> (Option<String>, SettingSource) {
    if let Some(key) = env.filter(|k| !k.is_empty()) {
        return (Some(key), SettingSource::EnvVar(API_KEY_ENV));
    }
    match settings.lookup.api_key.as_ref().filter(|k| !k.is_empty()) {
        Some(key) => (Some(key.clone()), SettingSource::SettingsFile),
        None => (None, SettingSource::Missing),
    }
}

/// Resolve the catalog file using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `library.path` in `settings.toml`
/// 3. `library.csv` in the current working directory
pub fn resolve_library_path(
    cli_override: Option<PathBuf>,
    settings: &Settings,
) -> (PathBuf, SettingSource) {
    if let Some(p) = cli_override {
        return (p, SettingSource::CommandLine);
    }
    if let Some(p) = settings.library.path.as_ref().filter(|p| !p.as_os_str().is_empty()) {
        return (p.clone(), SettingSource::SettingsFile);
    }
    (PathBuf::from(DEFAULT_LIBRARY_FILE), SettingSource::Default)
}

/// Save (or clear) the library path in the default settings file.
pub fn save_library_path(path: Option<&Path>) -> Result<(), CatalogError> {
    save_library_path_to(&settings_path(), path)
}

/// Save (or clear) `library.path` in `settings`.
///
/// Uses `toml::Value` for a surgical update so unrelated tables such as
/// `[lookup]` are preserved.
pub fn save_library_path_to(settings: &Path, path: Option<&Path>) -> Result<(), CatalogError> {
    let mut doc: toml::Value = match fs::read_to_string(settings) {
        Ok(contents) => contents.parse().map_err(|e| {
            CatalogError::settings(format!(
                "Refusing to overwrite malformed settings file {}: {e}",
                settings.display()
            ))
        })?,
        Err(_) => toml::Value::Table(Default::default()),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| CatalogError::settings("settings.toml root is not a table"))?;
    let library = table
        .entry("library")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let lib_table = library
        .as_table_mut()
        .ok_or_else(|| CatalogError::settings("[library] is not a table"))?;

    match path {
        Some(p) => {
            lib_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            lib_table.remove("path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
    }
    let serialized = toml::to_string_pretty(&doc)
        .map_err(|e| CatalogError::settings(format!("Failed to serialize settings: {e}")))?;
    let tmp = settings.with_extension("toml.tmp");
    fs::write(&tmp, &serialized).map_err(|e| CatalogError::io(&tmp, e))?;
    fs::rename(&tmp, settings).map_err(|e| CatalogError::io(settings, e))?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    load_settings_string_from(&settings_path())
}

/// Pretty-print `path` for display with `lookup.api_key` masked.
pub fn load_settings_string_from(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let mut doc: toml::Value = contents.parse().ok()?;
    if let Some(key) = doc
        .get_mut("lookup")
        .and_then(|lookup| lookup.get_mut("api_key"))
    {
        *key = toml::Value::String("****".to_string());
    }
    toml::to_string_pretty(&doc).ok()
}
