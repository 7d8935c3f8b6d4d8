//! fieldwork-storage
//!
//! Session persistence. One contract ([`store::SessionStore`]), two
//! interchangeable backends: JSON files on disk ([`local::LocalStore`]) and
//! the remote survey API ([`remote::RemoteStore`]).

pub mod error;
pub mod local;
pub mod remote;
pub mod store;

pub use error::StorageError;
pub use store::{NewSession, SessionStore};
