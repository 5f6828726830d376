//! Page Source Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::io::Error as IoError;
use std::path::PathBuf;

/// A page source error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for page source operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The endpoint answered with a non-success status code.
    #[display("inspection search failed with HTTP status {_0}")]
    Status(#[error(not(source))] u16),
    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[display("network error: {_0}")]
    Network(#[error(not(source))] String),
    /// A saved page does not exist.
    #[display("saved page not found: {}", _0.display())]
    NotFound(#[error(not(source))] PathBuf),
    /// Underlying I/O error
    #[display("I/O error: {_0}")]
    Io(IoError),
    /// A query parameter the endpoint doesn't recognize.
    #[display("unknown query parameter: {_0}")]
    UnknownParameter(#[error(not(source))] String),
}
impl From<IoError> for ErrorKind {
    fn from(err: IoError) -> Self {
        Self::Io(err)
    }
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    ///
    /// Nothing in this crate retries; this only informs the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Status(status) => *status >= 500,
            Self::Network(_) | Self::Io(_) => true,
            Self::NotFound(_) | Self::UnknownParameter(_) => false,
        }
    }
}
