//! Holds the record of the currently loaded demo.
//!
//! Loads are identified by a generation. Only the result of the most recently
//! started load is ever committed, a slower earlier load that finishes later
//! is dropped as stale. A failed load only records its error, whatever was
//! loaded before stays available.

use std::sync::Arc;

use common::DemoData;

use crate::{parser::DemoParser, LoadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing loaded yet, there might be an error from a failed load
    Empty,
    Loading,
    Ready,
}

/// Handed out when a load starts, needed to commit its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    Failed,
    /// A newer load was started (or the store reset) in the meantime
    Stale,
}

#[derive(Debug, Default)]
struct Inner {
    snapshot: Option<Arc<DemoData>>,
    loading: bool,
    error: Option<LoadError>,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct DemoRecordStore {
    inner: parking_lot::RwLock<Inner>,
}

impl DemoRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadState {
        let inner = self.inner.read();
        if inner.loading {
            LoadState::Loading
        } else if inner.snapshot.is_some() {
            LoadState::Ready
        } else {
            LoadState::Empty
        }
    }

    /// The currently committed record, which stays valid even if it gets
    /// replaced while somebody still holds on to it
    pub fn snapshot(&self) -> Option<Arc<DemoData>> {
        self.inner.read().snapshot.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.read().loading
    }

    pub fn error(&self) -> Option<LoadError> {
        self.inner.read().error.clone()
    }

    pub fn error_message(&self) -> Option<String> {
        self.inner.read().error.as_ref().map(|e| e.to_string())
    }

    pub fn begin_load(&self) -> LoadTicket {
        let mut inner = self.inner.write();
        inner.generation += 1;
        inner.loading = true;
        inner.error = None;

        tracing::debug!(generation = inner.generation, "Starting demo load");

        LoadTicket {
            generation: inner.generation,
        }
    }

    pub fn finish_load(&self, ticket: LoadTicket, result: Result<DemoData, LoadError>) -> CommitOutcome {
        let mut inner = self.inner.write();
        if inner.generation != ticket.generation {
            tracing::warn!(
                generation = ticket.generation,
                current = inner.generation,
                "Dropping result of stale demo load"
            );
            return CommitOutcome::Stale;
        }

        inner.loading = false;
        match result {
            Ok(data) => {
                tracing::debug!(generation = ticket.generation, map = %data.header.map, "Committing demo");

                inner.snapshot = Some(Arc::new(data));
                inner.error = None;
                CommitOutcome::Committed
            }
            Err(e) => {
                tracing::warn!(generation = ticket.generation, kind = e.kind(), "Loading demo: {}", e);

                inner.error = Some(e);
                CommitOutcome::Failed
            }
        }
    }

    /// Loads a demo whose bytes become available through `bytes`
    #[tracing::instrument(skip_all)]
    pub async fn load_demo<P, F>(&self, parser: &P, bytes: F) -> CommitOutcome
    where
        P: DemoParser + ?Sized,
        F: core::future::Future<Output = Result<Vec<u8>, LoadError>>,
    {
        let ticket = self.begin_load();

        let result = match bytes.await {
            Ok(bytes) => parser.parse(&bytes),
            Err(e) => Err(e),
        };

        self.finish_load(ticket, result)
    }

    /// Drops everything, loads still in flight will end up stale
    pub fn reset(&self) {
        let mut inner = self.inner.write();
        inner.generation += 1;
        inner.snapshot = None;
        inner.loading = false;
        inner.error = None;

        tracing::debug!(generation = inner.generation, "Reset demo store");
    }
}
