use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown input type: {0}")]
    UnknownInputType(String),
}
