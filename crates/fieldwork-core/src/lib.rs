//! fieldwork-core
//!
//! Pure domain types and storage key conventions for the Fieldwork survey
//! engine. No I/O — this is the shared vocabulary of the workspace.

pub mod error;
pub mod models;
pub mod store_keys;
