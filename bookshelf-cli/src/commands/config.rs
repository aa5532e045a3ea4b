use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_core::{
    SettingSource, Settings, load_settings_string, resolve_library_path, save_library_path,
    settings_path,
};

use crate::commands::fetch::lookup_config;
use crate::error::CliError;

fn mask_value(s: &str) -> String {
    if s.chars().count() <= 2 {
        "****".to_string()
    } else {
        format!("{}****", s.chars().take(2).collect::<String>())
    }
}

/// Show resolved settings and their sources.
pub(crate) fn run_config_show(settings: &Settings, cli_library: Option<PathBuf>) {
    let path = settings_path();

    log::info!(
        "{}",
        "Bookshelf Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let (library, library_source) = resolve_library_path(cli_library, settings);
    print_field("library", Some(library.display().to_string()), &library_source);

    let lookup = lookup_config(settings);
    let endpoint_source = if settings.lookup.endpoint.is_some() {
        SettingSource::SettingsFile
    } else {
        SettingSource::Default
    };
    print_field("endpoint", Some(lookup.endpoint), &endpoint_source);

    let timeout_source = if settings.lookup.timeout_secs.is_some() {
        SettingSource::SettingsFile
    } else {
        SettingSource::Default
    };
    print_field(
        "timeout",
        Some(format!("{}s", lookup.timeout.as_secs())),
        &timeout_source,
    );

    let (api_key, key_source) = settings.api_key();
    print_field("api_key", api_key.as_deref().map(mask_value), &key_source);

    if let Some(contents) = load_settings_string() {
        log::info!("");
        log::info!("{}", "settings.toml:".if_supports_color(Stdout, |t| t.bold()));
        for line in contents.lines() {
            log::info!("  {line}");
        }
    }
}

fn print_field(name: &str, value: Option<String>, source: &SettingSource) {
    let source_str = format!("({source})");
    match value {
        Some(v) => log::info!(
            "  {:<10} {} {}",
            name,
            v,
            source_str.if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => log::info!(
            "  {:<10} {}",
            name,
            "not set".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Remember `path` as the default library.
pub(crate) fn run_config_set_library(path: &Path) -> Result<(), CliError> {
    // store an absolute path so later runs from other directories agree
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| CliError::config(format!("Cannot resolve current directory: {e}")))?
            .join(path)
    };
    save_library_path(Some(&absolute))?;
    log::info!(
        "Default library set to {}",
        absolute.display().if_supports_color(Stdout, |t| t.cyan())
    );
    Ok(())
}

pub(crate) fn run_config_clear_library() -> Result<(), CliError> {
    save_library_path(None)?;
    log::info!("Default library cleared");
    Ok(())
}
