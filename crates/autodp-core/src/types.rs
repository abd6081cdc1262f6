//! Core type definitions shared across autodp.
//!
//! - Type aliases for array dimensions ([`Axis`], [`Rank`], [`Shape`])
//! - Re-export of the dense array type ([`DenseND`])

use smallvec::SmallVec;

pub use crate::dense::DenseND;

/// Zero-indexed axis of a multi-dimensional array.
pub type Axis = usize;

/// Number of dimensions of an array.
///
/// # Examples
///
/// ```
/// use autodp_core::{DenseND, Rank};
///
/// let matrix = DenseND::<f64>::zeros(&[2, 3]);
/// let rank: Rank = matrix.rank();
/// assert_eq!(rank, 2);
/// ```
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Inline for up to 6 dimensions; larger ranks spill to the heap.
///
/// # Examples
///
/// ```
/// use autodp_core::{DenseND, Shape};
///
/// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
/// let shape: Shape = Shape::from_slice(tensor.shape());
/// assert_eq!(shape.len(), 3);
/// assert_eq!(&shape[..], &[2, 3, 4]);
/// ```
pub type Shape = SmallVec<[usize; 6]>;
