use std::future::Future;
use std::pin::Pin;

use fieldwork_core::models::session::SessionRecord;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Metadata supplied when an interviewer starts a session. The backend
/// assigns the id, status, and timestamps.
#[derive(Debug, Clone, Default)]
pub struct NewSession {
    pub interviewer: String,
    pub interviewer_email: Option<String>,
    pub interview_date: String,
    pub platform_name: String,
    pub employment_type: String,
    pub interview_code: String,
}

/// The persistence contract. Backends are interchangeable; the engine holds
/// one behind `Arc<dyn SessionStore>`.
///
/// Methods return boxed futures for dyn compatibility.
pub trait SessionStore: Send + Sync {
    /// Create and persist a fresh session from setup metadata.
    fn create_session(&self, new: NewSession)
    -> BoxFuture<'_, Result<SessionRecord, StorageError>>;

    /// Load a session by id. `NotFound` if absent, `Corrupted` if the stored
    /// document can no longer be decoded.
    fn load_session<'a>(&'a self, id: &'a str)
    -> BoxFuture<'a, Result<SessionRecord, StorageError>>;

    /// Idempotent full overwrite, keyed by the record's session id.
    fn save_session<'a>(
        &'a self,
        record: &'a SessionRecord,
    ) -> BoxFuture<'a, Result<(), StorageError>>;

    /// Every session in the archive, in no particular order. Callers sort by
    /// `last_updated` descending for display.
    fn list_sessions(&self) -> BoxFuture<'_, Result<Vec<SessionRecord>, StorageError>>;

    /// Point the "currently active session" marker at `id`.
    fn set_active<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), StorageError>>;

    /// The id the active-session marker points at, if any.
    fn active_session_id(&self) -> BoxFuture<'_, Result<Option<String>, StorageError>>;

    fn clear_active(&self) -> BoxFuture<'_, Result<(), StorageError>>;
}
