//! Error types for building bit ranges.
//!
//! Queries themselves never fail; only the constructors that turn raw bit
//! offsets or cursors into a [`BitSlice`](crate::bitvec::BitSlice) do.

use thiserror::Error;

/// Error variants for range construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The bit range does not fit inside the backing word storage.
    #[error("bit range {start}..{end} out of bounds for {len} bits")]
    RangeOutOfBounds {
        /// First bit of the requested range.
        start: usize,
        /// One past the last bit of the requested range.
        end: usize,
        /// Number of addressable bits in the storage.
        len: usize,
    },

    /// `end` is not reachable from `start` by forward traversal.
    #[error("inverted bit range: start {start} is past end {end}")]
    InvertedRange {
        /// First bit of the requested range.
        start: usize,
        /// One past the last bit of the requested range.
        end: usize,
    },

    /// Two cursors were combined that point into different word storage.
    #[error("cursors point into different storage")]
    ForeignCursor,
}

/// A specialized Result type for range construction.
pub type Result<T> = std::result::Result<T, Error>;
