//! Error types for the servlet contract.
//!
//! Mirrors the split the container imposes: lifecycle failures belong to
//! the container, stream failures bubble out of `service` untouched.
//!
use thiserror::Error;

/// Errors surfaced through the servlet lifecycle contract
#[derive(Error, Debug)]
pub enum ServletError {
    /// Lifecycle failure raised by the container. Servlet implementations
    /// never construct this themselves.
    #[error("container error: {0}")]
    Container(String),

    /// Write failure on the response stream, propagated unchanged
    #[error("response stream error: {0}")]
    Io(#[from] std::io::Error),
}
