//! Extraction Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.
//!
//! Only document-level failures live here. Row-level irregularities (blank
//! cells, garbled scores) are absorbed by the extractors and never surface
//! as errors.

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The declared encoding label is not one we know how to decode.
    #[display("unknown character encoding: {_0}")]
    UnknownEncoding(#[error(not(source))] String),
    /// The document bytes are not valid under the declared encoding.
    #[display("document is not valid {encoding}")]
    Decode {
        /// Canonical name of the encoding the bytes were checked against.
        encoding: &'static str,
    },
    /// The listing identifier pattern could not be compiled.
    #[display("invalid listing pattern: {_0}")]
    InvalidPattern(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The document either decodes or it doesn't; asking again
        // with the same bytes won't change anything.
        false
    }
}
