//! Run a lookup on a worker thread so the caller can keep responding and
//! give up after a deadline.
//!
//! Dropping a [`PendingLookup`] abandons the request: the worker finishes its
//! HTTP call (bounded by the client timeout) and its result is discarded.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::client::BookLookup;
use crate::types::BookDetails;

/// State of a background lookup when polled.
#[derive(Debug, PartialEq, Eq)]
pub enum LookupPoll {
    Pending,
    Ready(Option<BookDetails>),
}

/// Handle to a lookup running on another thread.
pub struct PendingLookup {
    title: String,
    rx: Receiver<Option<BookDetails>>,
}

/// Start `lookup.lookup(title)` on a new thread.
pub fn spawn_lookup(lookup: Arc<dyn BookLookup>, title: impl Into<String>) -> PendingLookup {
    let title = title.into();
    let (tx, rx) = mpsc::channel();

    let query = title.clone();
    let spawned = thread::Builder::new()
        .name("book-lookup".to_string())
        .spawn(move || {
            let result = lookup.lookup(&query);
            // receiver gone means the caller stopped waiting
            let _ = tx.send(result);
        });
    if let Err(e) = spawned {
        // tx was moved into the closure and dropped, so waits see a disconnect
        log::warn!("Could not start lookup thread: {e}");
    }

    PendingLookup { title, rx }
}

impl PendingLookup {
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Block for at most `timeout`. Timing out, or the worker dying, yields
    /// `None` just like a failed lookup.
    pub fn wait(self, timeout: Duration) -> Option<BookDetails> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                log::warn!(
                    "Lookup for '{}' did not finish within {:.1}s",
                    self.title,
                    timeout.as_secs_f64()
                );
                None
            }
            Err(RecvTimeoutError::Disconnected) => {
                log::debug!("Lookup worker for '{}' exited without a result", self.title);
                None
            }
        }
    }

    /// Non-blocking check. Once this returns `Ready` the result has been
    /// taken and later polls report `Ready(None)`.
    pub fn poll(&self) -> LookupPoll {
        match self.rx.try_recv() {
            Ok(result) => LookupPoll::Ready(result),
            Err(TryRecvError::Empty) => LookupPoll::Pending,
            Err(TryRecvError::Disconnected) => LookupPoll::Ready(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::mpsc::Sender;

    struct Fixed(Option<BookDetails>);

    impl BookLookup for Fixed {
        fn lookup(&self, _title: &str) -> Option<BookDetails> {
            self.0.clone()
        }
    }

    /// Blocks until the test releases it.
    struct Gated(Mutex<Receiver<()>>);

    impl BookLookup for Gated {
        fn lookup(&self, _title: &str) -> Option<BookDetails> {
            let _ = self.0.lock().unwrap().recv();
            None
        }
    }

    fn details() -> BookDetails {
        BookDetails {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: "Fiction".to_string(),
            published: "1965".to_string(),
        }
    }

    #[test]
    fn test_wait_returns_result() {
        let pending = spawn_lookup(Arc::new(Fixed(Some(details()))), "dune");
        assert_eq!(pending.title(), "dune");
        assert_eq!(pending.wait(Duration::from_secs(5)), Some(details()));
    }

    #[test]
    fn test_wait_no_match() {
        let pending = spawn_lookup(Arc::new(Fixed(None)), "nothing");
        assert_eq!(pending.wait(Duration::from_secs(5)), None);
    }

    #[test]
    fn test_wait_times_out() {
        let (release, gate): (Sender<()>, Receiver<()>) = mpsc::channel();
        let pending = spawn_lookup(Arc::new(Gated(Mutex::new(gate))), "slow");
        assert_eq!(pending.poll(), LookupPoll::Pending);
        assert_eq!(pending.wait(Duration::from_millis(50)), None);
        release.send(()).unwrap();
    }
}
