//! Logger setup.
//!
//! All user-facing output goes through the `log` macros. Info records are
//! printed bare; warnings and errors get a coloured level prefix. Verbose
//! mode adds timestamps and debug records from the bookshelf crates.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        // HTTP internals are noise even in verbose mode
        .filter_module("reqwest", LevelFilter::Warn)
        .filter_module("hyper_util", LevelFilter::Warn)
        .filter_module("rustls", LevelFilter::Warn)
        .target(env_logger::Target::Stdout);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.format(move |buf, record| {
        let prefix = match record.level() {
            Level::Error => Some(format!(
                "{} ",
                "error:".if_supports_color(Stdout, |t| t.red())
            )),
            Level::Warn => Some(format!(
                "{} ",
                "warning:".if_supports_color(Stdout, |t| t.yellow())
            )),
            Level::Info => None,
            Level::Debug | Level::Trace => Some(format!(
                "{} ",
                "debug:".if_supports_color(Stdout, |t| t.dimmed())
            )),
        };

        if verbose {
            let ts = buf.timestamp_millis();
            write!(buf, "[{ts}] ")?;
        }
        writeln!(buf, "{}{}", prefix.unwrap_or_default(), record.args())
    });

    if let Err(e) = builder.try_init() {
        eprintln!("Failed to initialise logger: {e}");
    }
}
