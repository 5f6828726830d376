//! Application Error Types
//!
//! Each variant marks which stage of a run failed; the underlying library
//! error is kept as the child frame in the `exn` error tree.

use derive_more::{Display, Error};

/// An application error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    #[display("could not load configuration")]
    Config,
    #[display("could not retrieve the inspection results page")]
    Source,
    #[display("could not read the inspection results page")]
    Extract,
    #[display("could not write results")]
    Output,
}
