//! Error type shared by every fallible operation of the crate.

use thiserror::Error;

/// Errors reported by curve editing and vector computations.
///
/// None of them is fatal: the curve model stays valid after any of them is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An index based mutation referenced a control point or sample which doesn't exist.
    #[error("index {index} is out of range for {len} elements")]
    OutOfRange {
        /// The requested index
        index: usize,
        /// Number of elements at the time of the request
        len: usize,
    },

    /// A vector of zero (or non-finite) magnitude had to be normalized.
    #[error("degenerate vector: cannot normalize a vector of zero length")]
    Degenerate,

    /// A binomial coefficient was requested for a negative `n`.
    #[error("binomial coefficient is undefined for negative n")]
    NegativeDegree,

    /// A binomial coefficient doesn't fit into the requested integer type.
    #[error("binomial coefficient overflows its integer type")]
    Overflow,

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
