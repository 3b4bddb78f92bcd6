//! Error type shared by set construction, insertion, and decoding.

use alloc::string::String;

use thiserror::Error;

/// Errors produced by [`IdSet`](crate::IdSet) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A capacity hint of zero was passed to a constructor.
    #[error("capacity hint must be at least 1")]
    ZeroCapacity,
    /// An id at or beyond the capacity of a fixed-capacity set was inserted.
    #[error("id {id} does not fit in fixed capacity {capacity}")]
    IdOutOfRange {
        /// The id whose insertion was rejected.
        id: usize,
        /// The set's capacity at the time.
        capacity: usize,
    },
    /// Sizing or growing the set far enough to hold a requested id would
    /// overflow `usize`.
    #[error("growing to hold id {id} would overflow the addressable capacity")]
    CapacityOverflow {
        /// The largest id the failed sizing was asked to cover.
        id: usize,
    },
    /// A decoded string contained a token outside the range-notation
    /// grammar.
    #[error("invalid range-notation syntax: '{token}' is invalid: {problem}")]
    InvalidSyntax {
        /// The offending comma-separated token.
        token: String,
        /// What was wrong with it.
        problem: String,
    },
}

/// A specialized `Result` type for id-set operations, returning the crate's
/// [`Error`][crate::Error] type as the error value.
pub(crate) type Result<T> = core::result::Result<T, crate::Error>;
