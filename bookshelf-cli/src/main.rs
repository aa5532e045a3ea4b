//! bookshelf CLI
//!
//! Command-line interface for a personal book catalog stored as CSV.

mod cli_types;
mod commands;
mod display;
mod error;
mod logging;
mod spinner;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use bookshelf_core::{CatalogStore, Settings, resolve_library_path};

use cli_types::{Cli, Commands, ConfigAction};
use commands::catalog::{run_add, run_list, run_recommend, run_remove, run_search, run_sort};
use commands::config::{
    run_config_clear_library, run_config_path, run_config_set_library, run_config_show,
};
use commands::fetch::run_fetch;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load();
    let quiet = cli.quiet;

    match cli.command {
        Commands::List => {
            let store = open_store(cli.library, &settings)?;
            run_list(&store);
        }
        Commands::Add {
            entry,
            fetch,
            fetch_timeout,
        } => {
            let mut store = open_store(cli.library, &settings)?;
            run_add(
                &mut store,
                &settings,
                entry,
                fetch,
                Duration::from_secs(fetch_timeout),
                quiet,
            )?;
        }
        Commands::Remove { title } => {
            let mut store = open_store(cli.library, &settings)?;
            run_remove(&mut store, &title)?;
        }
        Commands::Search { title, author } => {
            let store = open_store(cli.library, &settings)?;
            run_search(&store, title.as_deref(), author.as_deref());
        }
        Commands::Sort { by } => {
            let mut store = open_store(cli.library, &settings)?;
            run_sort(&mut store, by.into())?;
        }
        Commands::Recommend { genre } => {
            let store = open_store(cli.library, &settings)?;
            run_recommend(&store, &genre);
        }
        Commands::Fetch { title, timeout } => {
            run_fetch(&settings, &title, Duration::from_secs(timeout), quiet)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(&settings, cli.library),
            ConfigAction::Path => run_config_path(),
            ConfigAction::SetLibrary { path } => run_config_set_library(&path)?,
            ConfigAction::ClearLibrary => run_config_clear_library()?,
        },
    }

    Ok(())
}

/// Resolve the catalog file and load it.
fn open_store(cli_library: Option<PathBuf>, settings: &Settings) -> Result<CatalogStore, CliError> {
    let (path, source) = resolve_library_path(cli_library, settings);
    log::debug!("Using catalog {} ({source})", path.display());
    Ok(CatalogStore::open(path)?)
}
