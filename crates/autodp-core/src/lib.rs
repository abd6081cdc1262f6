//! # autodp-core
//!
//! Dense N-dimensional arrays for the autodp bounded-tensor stack.
//!
//! This crate provides the numeric array capability that entity-tagged tensors are
//! built on:
//!
//! - **Dense array representation** ([`DenseND`]) with dynamic rank
//! - **Broadcasting** binary operations following NumPy's trailing-axis rules
//! - **Elementwise comparison** producing shaped boolean masks (`DenseND<bool>`)
//! - **Clamping** with optional lower/upper limits
//! - **Boolean reductions** (`any`, `all`) on masks
//!
//! ## SciRS2 Integration
//!
//! All array storage, numeric traits and random number generation go through
//! `scirs2-core`. Direct use of `ndarray`, `rand`, or `num-traits` is not allowed.
//!
//! ## Quick Start
//!
//! ```
//! use autodp_core::DenseND;
//!
//! let a = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//! let b = DenseND::from_vec(vec![10.0, 20.0], &[2]).unwrap();
//!
//! // Broadcasting addition: [2, 2] + [2] -> [2, 2]
//! let sum = a.try_add(&b).unwrap();
//! assert_eq!(sum.to_vec(), vec![11.0, 22.0, 13.0, 24.0]);
//!
//! // Comparisons produce boolean masks of the broadcast shape
//! let mask = a.gt_scalar(2.0);
//! assert!(mask.any());
//! assert!(!mask.all());
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `anyhow::Result`:
//!
//! ```
//! use autodp_core::DenseND;
//!
//! let a = DenseND::<f64>::zeros(&[2, 3]);
//! let b = DenseND::<f64>::zeros(&[4]);
//! assert!(a.try_add(&b).is_err());
//! assert!(DenseND::from_vec(vec![1.0, 2.0], &[3]).is_err());
//! ```

pub mod dense;
pub mod types;


pub use dense::{broadcast_shape, shapes_broadcastable};
pub use types::{Axis, DenseND, Rank, Shape};
