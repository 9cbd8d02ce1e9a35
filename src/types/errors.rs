//! Error types used across Snapforge.
use thiserror::Error;

/// High-level error categories for adapters and the cloud client.
#[derive(Debug, Copy, Clone, Error)]
pub enum ErrorKind {
    #[error("transport error")]
    Transport,
    #[error("decode error")]
    Decode,
    #[error("cancelled")]
    Cancelled,
    #[error("policy violation")]
    Policy,
}

/// Structured error with a kind and human message.
#[derive(Debug, Error)]
#[error("{kind:?}: {msg}")]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
}

impl Error {
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self { kind, msg: msg.into() }
    }
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
