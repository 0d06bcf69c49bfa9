// src/fetch.rs
//! Fetch controller: owns the loaded collection and the loading flag.
//!
//! Each `select` spawns one worker thread that runs the fetcher and sends
//! its completion back over a channel; the UI thread applies completions in
//! `poll` (once per frame) or `wait` (CLI, tests). Nothing is cancelled:
//! when selections overlap, every request completes and the last completion
//! applied wins, even if it belongs to an older selection.

use std::{
    panic::{self, AssertUnwindSafe},
    sync::{mpsc::{self, Receiver, Sender}, Arc},
    thread,
};

use tracing::{debug, error, info, warn};

use crate::{
    config::consts::FETCH_FAILED_MSG,
    error::FetchError,
    net::Fetcher,
    record::Record,
    source::Source,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Empty,
    Failed,
}

/// What the main panel shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Loading,
    Empty,
    Table,
}

/// Result of applying one completion, for callers that want to react.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchEvent {
    Loaded { source: Source, rows: usize },
    Failed { source: Source },
}

struct Completion {
    source: Source,
    seq: u64,
    result: Result<Vec<Record>, FetchError>,
}

pub struct FetchController {
    fetcher: Arc<dyn Fetcher>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,

    selected: Option<Source>,
    records: Vec<Record>,
    state: LoadState,
    loading: bool,
    alert: Option<String>,

    seq: u64,
    in_flight: usize,
}

impl FetchController {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            fetcher,
            tx,
            rx,
            selected: None,
            records: Vec::new(),
            state: LoadState::Idle,
            loading: false,
            alert: None,
            seq: 0,
            in_flight: 0,
        }
    }

    /* ---------- read side ---------- */

    #[inline] pub fn selected(&self) -> Option<Source> { self.selected }
    #[inline] pub fn records(&self) -> &[Record] { &self.records }
    #[inline] pub fn state(&self) -> LoadState { self.state }
    #[inline] pub fn is_loading(&self) -> bool { self.loading }
    #[inline] pub fn alert(&self) -> Option<&str> { self.alert.as_deref() }
    #[inline] pub fn in_flight(&self) -> usize { self.in_flight }

    pub fn view(&self) -> ViewKind {
        if self.loading {
            ViewKind::Loading
        } else if self.records.is_empty() {
            ViewKind::Empty
        } else {
            ViewKind::Table
        }
    }

    /* ---------- transitions ---------- */

    /// Start one fetch for `source`. `on_done` runs on the worker thread
    /// after the completion is queued (the GUI passes a repaint request).
    ///
    /// Stored records are kept until a successful completion replaces them.
    pub fn select<F>(&mut self, source: Source, on_done: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.seq += 1;
        self.in_flight += 1;
        self.selected = Some(source);
        self.loading = true;
        self.state = LoadState::Loading;

        if self.in_flight > 1 {
            warn!(%source, in_flight = self.in_flight, "fetch: overlapping request, last completion wins");
        }
        info!(%source, url = source.url(), seq = self.seq, "fetch: begin");

        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.tx.clone();
        let seq = self.seq;

        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| fetcher.fetch(source)))
                .unwrap_or(Err(FetchError::Disconnected));
            // Receiver gone means the controller was dropped; nothing to tell.
            let _ = tx.send(Completion { source, seq, result });
            on_done();
        });
    }

    /// Apply every completion that has arrived. Never blocks.
    pub fn poll(&mut self) -> Vec<FetchEvent> {
        let mut events = Vec::new();
        while let Ok(c) = self.rx.try_recv() {
            events.push(self.apply(c));
        }
        events
    }

    /// Block until the next completion and apply it. `None` when nothing is
    /// in flight.
    pub fn wait(&mut self) -> Option<FetchEvent> {
        if self.in_flight == 0 {
            return None;
        }
        let c = self.rx.recv().ok()?;
        Some(self.apply(c))
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    fn apply(&mut self, c: Completion) -> FetchEvent {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.loading = false;

        if c.seq != self.seq {
            debug!(source = %c.source, seq = c.seq, latest = self.seq, "fetch: stale completion applied");
        }

        match c.result {
            Ok(records) => {
                let rows = records.len();
                self.records = records;
                self.state = if rows == 0 { LoadState::Empty } else { LoadState::Loaded };
                info!(source = %c.source, rows, "fetch: loaded");
                FetchEvent::Loaded { source: c.source, rows }
            }
            Err(e) => {
                error!(source = %c.source, error = %e, "fetch: failed, keeping previous data");
                self.state = LoadState::Failed;
                self.alert = Some(s!(FETCH_FAILED_MSG));
                FetchEvent::Failed { source: c.source }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(usize);
    impl Fetcher for Canned {
        fn fetch(&self, _source: Source) -> Result<Vec<Record>, FetchError> {
            Ok((1..=self.0 as u64).map(|i| Record::post(i, format!("t{i}"))).collect())
        }
    }

    struct Panics;
    impl Fetcher for Panics {
        fn fetch(&self, _source: Source) -> Result<Vec<Record>, FetchError> {
            panic!("boom")
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let mut c = FetchController::new(Arc::new(Canned(3)));
        assert_eq!(c.state(), LoadState::Idle);
        assert_eq!(c.view(), ViewKind::Empty);
        assert!(c.wait().is_none());
    }

    #[test]
    fn select_shows_loader_until_applied() {
        let mut c = FetchController::new(Arc::new(Canned(3)));
        c.select(Source::Posts, || {});
        assert!(c.is_loading());
        assert_eq!(c.view(), ViewKind::Loading);

        let ev = c.wait().unwrap();
        assert_eq!(ev, FetchEvent::Loaded { source: Source::Posts, rows: 3 });
        assert_eq!(c.view(), ViewKind::Table);
    }

    #[test]
    fn worker_panic_is_a_failure() {
        let mut c = FetchController::new(Arc::new(Panics));
        c.select(Source::Comments, || {});
        assert_eq!(c.wait(), Some(FetchEvent::Failed { source: Source::Comments }));
        assert_eq!(c.alert(), Some(FETCH_FAILED_MSG));
        assert!(!c.is_loading());
    }
}
