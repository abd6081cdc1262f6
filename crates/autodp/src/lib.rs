//! # autodp - Bounded, entity-tagged tensors
//!
//! This is the **meta crate** that re-exports the autodp components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use autodp::prelude::*;
//!
//! let ishan = Entity::new("Ishan");
//! let trask = Entity::new("Trask");
//!
//! let bounded = |v: f64, owner: &Entity| {
//!     SingleEntityTensor::new(
//!         DenseND::from_elem(&[2, 2], v),
//!         DenseND::from_elem(&[2, 2], -10.0),
//!         DenseND::from_elem(&[2, 2], 10.0),
//!         owner.clone(),
//!     )
//! };
//!
//! let a = bounded(1.0, &ishan)?;
//! let b = bounded(2.0, &trask)?;
//!
//! // Cross-owner arithmetic escalates instead of failing
//! let mixed = a.try_mul(&b)?;
//! assert!(mixed.is_gamma());
//!
//! // Row-wise dispatch over a batch of owners
//! let rows = RowEntityTensor::new([a.clone(), b.clone()])?;
//! let shifted = &rows + 1.0;
//! assert_eq!(shifted.shape().as_slice(), &[2, 2, 2]);
//! assert!(shifted.gt(&rows)?.all());
//!
//! // ...but comparisons never cross owners
//! assert!(shifted.gt(&a).is_err());
//! # Ok::<(), PhiError>(())
//! ```
//!
//! ## Components
//!
//! ### Dense arrays ([`core`])
//!
//! `DenseND<T>`: broadcasting arithmetic, comparison masks, clipping.
//!
//! ### Entity-tagged tensors ([`phi`])
//!
//! `SingleEntityTensor`, `RowEntityTensor`, `IntermediateGammaTensor`, the
//! `Entity` identity token and the promotion rules between them.
//!
//! ## Features
//!
//! - `tracing` (default, on `autodp-phi`): emit `tracing` events for escalations
//!   and refused comparisons

#![deny(warnings)]

pub use autodp_core as core;
pub use autodp_phi as phi;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use autodp::prelude::*;
    //!
    //! let owner = Entity::new("Ishan");
    //! let values = DenseND::<f64>::zeros(&[3]);
    //! let t = SingleEntityTensor::new(values.clone(), values.clone(), values, owner).unwrap();
    //! assert_eq!(t.shape(), &[3]);
    //! ```

    // Dense arrays
    pub use crate::core::{DenseND, Shape};

    // Entity-tagged tensors
    pub use crate::phi::{
        ArithOp, CmpOp, Entity, IntermediateGammaTensor, Operand, PhiConfig, PhiError,
        PhiResult, PhiTensor, RowEntityTensor, RowSlot, ScalarManager, SingleEntityTensor,
    };

    // Logging
    pub use crate::phi::tracing_support::{init_tracing, LogFormat};
}
