//! Snapshot sinks: where the tick loop sends needs snapshots.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use crate::{NeedsRecord, StateStore, StoreError, StoreResult};

/// Destination for needs snapshots.
///
/// `submit` is fire-and-forget and must not block the tick loop; failures
/// are logged by the sink.  `finish` is the synchronous shutdown flush: it
/// returns once `record` is on disk (or failed to get there).
pub trait SnapshotSink {
    /// Queue a periodic snapshot.  Never fails from the caller's view.
    fn submit(&mut self, record: NeedsRecord);

    /// Write `record` synchronously after any queued snapshots.
    ///
    /// Idempotent: calling it again writes the newer record again.
    fn finish(&mut self, record: NeedsRecord) -> StoreResult<()>;
}

/// A sink that discards everything.  Use for tests and ephemeral runs.
pub struct NoSnapshots;

impl SnapshotSink for NoSnapshots {
    fn submit(&mut self, _record: NeedsRecord) {}

    fn finish(&mut self, _record: NeedsRecord) -> StoreResult<()> {
        Ok(())
    }
}

/// Synchronous sink: writes on the caller's thread.
impl SnapshotSink for StateStore {
    fn submit(&mut self, record: NeedsRecord) {
        if let Err(e) = self.save_needs_record(&record) {
            tracing::warn!(error = %e, "needs snapshot failed");
        }
    }

    fn finish(&mut self, record: NeedsRecord) -> StoreResult<()> {
        self.save_needs_record(&record)
    }
}

// ── BackgroundSnapshots ───────────────────────────────────────────────────────

/// Writes snapshots on a dedicated thread.
///
/// Records are written in submission order.  A failed write is logged and
/// forgotten; the next snapshot supersedes it.  `finish` (or drop) closes the
/// queue and joins the thread, so no queued write can land after the final
/// flush.
pub struct BackgroundSnapshots {
    store:  StateStore,
    tx:     Option<Sender<NeedsRecord>>,
    worker: Option<JoinHandle<()>>,
}

impl BackgroundSnapshots {
    /// Spawn the writer thread for `store`.
    pub fn spawn(store: StateStore) -> StoreResult<Self> {
        let (tx, rx) = mpsc::channel::<NeedsRecord>();
        let worker_store = store.clone();
        let worker = thread::Builder::new()
            .name("deskcat-snapshots".into())
            .spawn(move || {
                for record in rx {
                    match worker_store.save_needs_record(&record) {
                        Ok(()) => tracing::trace!("needs snapshot written"),
                        Err(e) => tracing::warn!(error = %e, "needs snapshot failed"),
                    }
                }
            })
            .map_err(StoreError::Spawn)?;

        Ok(Self { store, tx: Some(tx), worker: Some(worker) })
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Close the queue and wait for pending writes.
    fn drain(&mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("snapshot writer thread panicked");
            }
        }
    }
}

impl SnapshotSink for BackgroundSnapshots {
    fn submit(&mut self, record: NeedsRecord) {
        match &self.tx {
            Some(tx) => {
                if tx.send(record).is_err() {
                    tracing::warn!("snapshot writer gone, snapshot dropped");
                }
            }
            None => tracing::debug!("snapshot submitted after finish, dropped"),
        }
    }

    fn finish(&mut self, record: NeedsRecord) -> StoreResult<()> {
        self.drain();
        self.store.save_needs_record(&record)
    }
}

impl Drop for BackgroundSnapshots {
    fn drop(&mut self) {
        self.drain();
    }
}
