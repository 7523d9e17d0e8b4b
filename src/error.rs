//! Error taxonomy shared by every collection and sequence in the crate.
//!
//! All variants signal programmer error or protocol misuse. Nothing here is
//! transient, so nothing is ever retried.

use thiserror::Error;

/// Errors raised by lists, cursors, views and sequence stages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index argument fell outside the bound valid for the operation.
    #[error("index: {index} size: {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Traversal was requested past the end (or before the beginning).
    #[error("no such element")]
    NoSuchElement,

    /// The interaction protocol of the object was violated.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),

    /// The backing collection changed structurally behind a cursor's back.
    #[error("concurrent modification: expected generation {expected}, found {found}")]
    ConcurrentModification { expected: u64, found: u64 },

    /// The view does not implement the requested operation.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// A stage was configured with an argument it cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
