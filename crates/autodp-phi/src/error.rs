//! Unified error types for entity-tagged tensor operations
//!
//! # Design
//!
//! - **`PhiError`**: Top-level enum covering all error cases
//! - **`ShapeMismatchError`**: construction and binary-op shape failures
//! - **`ComparisonError`**: comparisons that cannot be attributed to one entity
//!
//! Cross-entity *arithmetic* is never an error; it escalates to an
//! [`IntermediateGammaTensor`](crate::IntermediateGammaTensor). Only cross-entity
//! *comparisons* fail, with [`PhiError::NotComparable`].
//!
//! # Examples
//!
//! ```
//! use autodp_phi::error::{PhiError, ShapeMismatchError};
//!
//! let err: PhiError = ShapeMismatchError::RowCount { expected: 3, got: 6 }.into();
//! assert!(err.is_shape_mismatch());
//! assert!(!err.is_not_comparable());
//! ```

use thiserror::Error;

/// Top-level error type for all entity-tagged tensor operations
#[derive(Error, Debug)]
pub enum PhiError {
    /// Shape mismatch errors
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(#[from] ShapeMismatchError),

    /// Comparison across entities or escalated provenance
    #[error("Not comparable: {0}")]
    NotComparable(#[from] ComparisonError),

    /// A value lies outside its declared `[min, max]` range
    #[error("Bounds violation at flat index {index}: {value} not within [{min}, {max}]")]
    BoundsViolation {
        index: usize,
        value: String,
        min: String,
        max: String,
    },

    /// Row index outside the row sequence
    #[error("Row index {index} out of bounds for {len} rows")]
    IndexOutOfBounds { index: isize, len: usize },

    /// A row-entity tensor needs at least one row
    #[error("Row-entity tensor requires at least one row")]
    EmptyRows,

    /// Errors bubbled up from the dense array layer
    #[error(transparent)]
    Dense(#[from] anyhow::Error),
}

/// Shape mismatch errors for construction and binary operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeMismatchError {
    #[error("{field} shape {got:?} does not match data shape {expected:?}")]
    Bounds {
        field: &'static str,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("row {index} has shape {got:?}, expected {expected:?}")]
    Rows {
        index: usize,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("row count mismatch: expected {expected}, got {got}")]
    RowCount { expected: usize, got: usize },

    #[error("shapes {lhs:?} and {rhs:?} are not broadcastable")]
    NotBroadcastable { lhs: Vec<usize>, rhs: Vec<usize> },
}

/// Comparison errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("`{op}` between tensors owned by {lhs} and {rhs}")]
    EntityMismatch {
        op: &'static str,
        lhs: String,
        rhs: String,
    },

    #[error("`{op}` involving a multi-entity tensor ({entities})")]
    Escalated { op: &'static str, entities: String },
}

/// Result type alias for entity-tagged tensor operations
pub type PhiResult<T> = Result<T, PhiError>;

// Convenience constructors for common error patterns
impl PhiError {
    /// Create a bound-array shape mismatch error
    pub fn bounds_shape(field: &'static str, expected: &[usize], got: &[usize]) -> Self {
        PhiError::ShapeMismatch(ShapeMismatchError::Bounds {
            field,
            expected: expected.to_vec(),
            got: got.to_vec(),
        })
    }

    /// Create a row shape mismatch error
    pub fn row_shape(index: usize, expected: &[usize], got: &[usize]) -> Self {
        PhiError::ShapeMismatch(ShapeMismatchError::Rows {
            index,
            expected: expected.to_vec(),
            got: got.to_vec(),
        })
    }

    /// Create a row count mismatch error
    pub fn row_count(expected: usize, got: usize) -> Self {
        PhiError::ShapeMismatch(ShapeMismatchError::RowCount { expected, got })
    }

    /// Create a broadcasting error
    pub fn not_broadcastable(lhs: &[usize], rhs: &[usize]) -> Self {
        PhiError::ShapeMismatch(ShapeMismatchError::NotBroadcastable {
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        })
    }

    /// Create an entity mismatch comparison error
    pub fn entity_mismatch(op: &'static str, lhs: impl ToString, rhs: impl ToString) -> Self {
        PhiError::NotComparable(ComparisonError::EntityMismatch {
            op,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        })
    }

    /// Create a comparison error for escalated (multi-entity) operands
    pub fn escalated(op: &'static str, entities: impl ToString) -> Self {
        PhiError::NotComparable(ComparisonError::Escalated {
            op,
            entities: entities.to_string(),
        })
    }

    /// True for any [`PhiError::ShapeMismatch`]
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, PhiError::ShapeMismatch(_))
    }

    /// True for any [`PhiError::NotComparable`]
    pub fn is_not_comparable(&self) -> bool {
        matches!(self, PhiError::NotComparable(_))
    }
}
