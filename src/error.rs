//! Error type shared by the crate.
//!
//! Queries never fail. Errors only come out of validated construction paths.

use thiserror::Error;

/// Errors raised while constructing ranges or trees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeTreeError {
    /// A range was created with its lower endpoint after its upper endpoint.
    #[error("inverted range: start {from} is after end {to}")]
    InvertedRange {
        /// Debug rendering of the lower endpoint.
        from: String,
        /// Debug rendering of the upper endpoint.
        to: String,
    },
    /// A custom comparer stored items out of ascending-start order in a node.
    #[error("comparer must sort items ascending by range start, but {later} was placed after {earlier}")]
    UnorderedComparer {
        /// Debug rendering of the start that was placed first.
        earlier: String,
        /// Debug rendering of the smaller start that followed it.
        later: String,
    },
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, RangeTreeError>;
