//! Error types for engram operations.
//!
//! Every fallible operation in the crate reports one of these variants to its
//! immediate caller.

use thiserror::Error;

/// Main error type for engram operations.
///
/// # Examples
///
/// ```
/// use engram::error::EngramError;
///
/// let err = EngramError::SizeMismatch {
///     expected: 4,
///     actual: 3,
/// };
/// assert!(err.to_string().contains("pattern size mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngramError {
    /// Pattern length differs from the network size.
    #[error("pattern size mismatch: network has {expected} units, pattern has {actual}")]
    SizeMismatch {
        /// Network size
        expected: usize,
        /// Pattern length
        actual: usize,
    },

    /// Operand shapes disagree for a matrix operation.
    #[error("incompatible shapes for {op}: {left:?} and {right:?}")]
    IncompatibleShape {
        /// Operation name (e.g. "add", "multiply")
        op: &'static str,
        /// Shape of the left operand
        left: (usize, usize),
        /// Shape of the right operand
        right: (usize, usize),
    },

    /// Cell access outside the matrix bounds.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Matrix rows
        rows: usize,
        /// Matrix columns
        cols: usize,
    },

    /// Vector operation requested on a matrix with more than one row and column.
    #[error("not a vector: {rows}x{cols} matrix has neither a single row nor a single column")]
    NotVector {
        /// Matrix rows
        rows: usize,
        /// Matrix columns
        cols: usize,
    },

    /// Numeric code is neither -1 nor +1.
    #[error("invalid bipolar value: {value} (expected -1 or 1)")]
    InvalidBipolarValue {
        /// Offending value
        value: f64,
    },

    /// A matrix or network was requested with a zero dimension.
    #[error("invalid dimensions: {rows}x{cols} (both must be at least 1)")]
    InvalidDimensions {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// A 2D layout is not rectangular.
    #[error("ragged rows: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        /// Index of the first non-conforming row
        row: usize,
        /// Column count of the first row
        expected: usize,
        /// Column count of the offending row
        actual: usize,
    },

    /// Flat data length doesn't match the requested shape.
    #[error("dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch {
        /// rows * cols
        expected: usize,
        /// Provided data length
        actual: usize,
    },

    /// A deserialized weight matrix breaks the network invariants.
    #[error("invalid weights: {reason}")]
    InvalidWeights {
        /// Violated invariant
        reason: &'static str,
    },
}

impl EngramError {
    /// Create a size mismatch error for a pattern presented to a network
    #[must_use]
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Create an incompatible shape error for a binary operation
    #[must_use]
    pub fn incompatible_shape(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        Self::IncompatibleShape { op, left, right }
    }

    /// Create an index out of bounds error
    #[must_use]
    pub fn index_out_of_bounds(row: usize, col: usize, shape: (usize, usize)) -> Self {
        Self::IndexOutOfBounds {
            row,
            col,
            rows: shape.0,
            cols: shape.1,
        }
    }

    /// Create a not-a-vector error from a matrix shape
    #[must_use]
    pub fn not_vector(shape: (usize, usize)) -> Self {
        Self::NotVector {
            rows: shape.0,
            cols: shape.1,
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, EngramError>;
