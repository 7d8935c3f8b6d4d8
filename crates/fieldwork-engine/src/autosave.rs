//! Debounced session persistence.
//!
//! A mutation hands over a full snapshot; the write fires after a quiet
//! period. A newer snapshot within the window cancels the pending write and
//! restarts the clock, so only the most recent state ever reaches the
//! store. A save failure does not roll anything back — the interviewer
//! keeps working and the failure is surfaced as a flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use fieldwork_core::models::session::SessionRecord;
use fieldwork_storage::{SessionStore, StorageError};
use tokio::task::JoinHandle;

/// Quiet period before a scheduled snapshot is written.
pub const DEBOUNCE: Duration = Duration::from_secs(2);

pub struct Autosaver {
    store: Arc<dyn SessionStore>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    last_failed: Arc<AtomicBool>,
}

impl Autosaver {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self::with_delay(store, DEBOUNCE)
    }

    pub fn with_delay(store: Arc<dyn SessionStore>, delay: Duration) -> Self {
        Self {
            store,
            delay,
            pending: None,
            last_failed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Schedule `record` to be written after the quiet period, superseding
    /// any snapshot still waiting (or still in flight).
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, record: SessionRecord) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let store = Arc::clone(&self.store);
        let last_failed = Arc::clone(&self.last_failed);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match store.save_session(&record).await {
                Ok(()) => last_failed.store(false, Ordering::Relaxed),
                Err(e) => {
                    tracing::warn!(
                        id = %record.session.id,
                        error = %e,
                        "autosave failed; continuing with unsaved changes"
                    );
                    last_failed.store(true, Ordering::Relaxed);
                }
            }
        }));
    }

    /// Write `record` immediately, cancelling any pending debounce.
    pub async fn flush(&mut self, record: &SessionRecord) -> Result<(), StorageError> {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let result = self.store.save_session(record).await;
        self.last_failed.store(result.is_err(), Ordering::Relaxed);
        result
    }

    /// Whether the most recent write attempt failed.
    pub fn last_save_failed(&self) -> bool {
        self.last_failed.load(Ordering::Relaxed)
    }

    /// A snapshot is waiting for its quiet period.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}
