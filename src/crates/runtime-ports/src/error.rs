use thiserror::Error;

/// Failure reported by a platform call. The message is user-readable.
#[derive(Debug, Error)]
pub enum PortError {
    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Request(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

pub type PortResult<T> = Result<T, PortError>;
