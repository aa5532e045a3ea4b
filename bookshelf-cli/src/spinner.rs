//! Spinner shown while a metadata lookup is in flight.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use bookshelf_lookup::{BookDetails, PendingLookup};

/// Wait for `pending` while ticking a spinner. Hidden when `quiet`.
pub(crate) fn wait_with_spinner(
    pending: PendingLookup,
    timeout: Duration,
    quiet: bool,
) -> Option<BookDetails> {
    let pb = if quiet {
        ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden())
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(format!("Looking up '{}'...", pending.title()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = pending.wait(timeout);

    pb.disable_steady_tick();
    pb.finish_and_clear();
    result
}
