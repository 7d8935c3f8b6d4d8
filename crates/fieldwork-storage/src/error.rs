use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session not found: {id}")]
    NotFound { id: String },

    #[error("session {id} is corrupted: {reason}")]
    Corrupted { id: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("authentication rejected by survey API (HTTP {status})")]
    Auth { status: u16 },

    #[error("survey API server error (HTTP {status})")]
    Server { status: u16 },

    #[error("survey API error (HTTP {status})")]
    Api { status: u16 },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no data directory available on this platform")]
    NoDataDir,
}
