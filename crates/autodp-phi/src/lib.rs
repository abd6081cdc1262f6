//! # autodp-phi
//!
//! Entity-tagged bounded tensors.
//!
//! Every tensor here carries per-element inclusive bounds
//! (`min_vals <= data <= max_vals`) and the identity of whoever its values
//! belong to:
//!
//! - [`SingleEntityTensor`] - owned by exactly one [`Entity`]
//! - [`RowEntityTensor`] - an ordered batch of rows, each owned separately
//! - [`IntermediateGammaTensor`] - the escalated form produced when
//!   arithmetic mixes owners
//!
//! ## Promotion rules
//!
//! - Arithmetic (`add`, `sub`, `mul`) between different owners is **not** an
//!   error: the result escalates to an [`IntermediateGammaTensor`].
//! - Comparisons between different owners, or involving an escalated tensor,
//!   fail with [`PhiError::NotComparable`].
//! - Row-entity operations apply row by row; rows may become mixed
//!   ([`RowSlot::Single`] / [`RowSlot::Gamma`]).
//! - Bounds propagate by interval arithmetic, so they stay sound through any
//!   chain of operations.
//!
//! ## Quick Start
//!
//! ```
//! use autodp_core::DenseND;
//! use autodp_phi::{Entity, RowEntityTensor, SingleEntityTensor};
//!
//! let ishan = Entity::new("Ishan");
//! let trask = Entity::new("Trask");
//!
//! let make = |v: f64, owner: &Entity| {
//!     SingleEntityTensor::new(
//!         DenseND::from_elem(&[3], v),
//!         DenseND::from_elem(&[3], 0.0),
//!         DenseND::from_elem(&[3], 10.0),
//!         owner.clone(),
//!     )
//!     .unwrap()
//! };
//!
//! let a = make(1.0, &ishan);
//! let b = make(2.0, &trask);
//!
//! // Mixing owners escalates
//! let sum = a.try_add(&b).unwrap();
//! assert!(sum.is_gamma());
//!
//! // ...but comparing across owners is refused
//! assert!(a.eq_elementwise(&b).unwrap_err().is_not_comparable());
//!
//! // Row-wise dispatch keeps per-row provenance
//! let rows = RowEntityTensor::new([make(1.0, &ishan), make(2.0, &ishan)]).unwrap();
//! let mixed = rows.try_mul(&b).unwrap();
//! assert!(mixed.rows().iter().all(|row| row.is_gamma()));
//! ```
//!
//! ## Logging
//!
//! With the default `tracing` feature, escalations and refused comparisons are
//! emitted as `tracing` events; see [`tracing_support`].

pub mod config;
mod dispatch;
pub mod element;
pub mod entity;
pub mod error;
pub mod gamma;
mod interval;
pub mod operand;
pub mod ops;
pub mod row_entity;
pub mod scalar_manager;
pub mod single_entity;
pub mod tensor;
pub mod tracing_support;

#[cfg(test)]
mod property_tests;

pub use config::PhiConfig;
pub use tracing_support::LogFormat;
pub use element::Element;
pub use entity::{Entity, EntityId};
pub use error::{ComparisonError, PhiError, PhiResult, ShapeMismatchError};
pub use gamma::IntermediateGammaTensor;
pub use operand::Operand;
pub use ops::{ArithOp, CmpOp};
pub use row_entity::RowEntityTensor;
pub use scalar_manager::ScalarManager;
pub use single_entity::SingleEntityTensor;
pub use tensor::{PhiTensor, RowSlot};
