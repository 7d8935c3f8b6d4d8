//! Storage key/path conventions.
//!
//! Pure string functions defining the canonical layout of documents in a
//! Fieldwork session archive.

pub fn session(id: &str) -> String {
    format!("sessions/{id}.json")
}

pub const SESSIONS_PREFIX: &str = "sessions/";

/// Pointer to the session currently being conducted, tracked separately
/// from the per-id archive so a list view can enumerate everything.
pub const ACTIVE_SESSION: &str = "active_session";
