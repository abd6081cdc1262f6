//! Bounded tensors owned by exactly one entity.
//!
//! A [`SingleEntityTensor`] pairs a dense array with per-element inclusive
//! bounds `min_vals <= data <= max_vals` and the [`Entity`] it belongs to.
//! Operations never mutate; each returns a new tensor.
//!
//! # Binary operations
//!
//! | right operand                | arithmetic          | comparison            |
//! |------------------------------|---------------------|-----------------------|
//! | scalar / array               | single-entity       | single-entity mask    |
//! | single-entity, same owner    | single-entity       | single-entity mask    |
//! | single-entity, other owner   | gamma (escalated)   | `NotComparable`       |
//! | gamma                        | gamma               | `NotComparable`       |
//! | row-entity                   | row-entity, per row | row-entity, per row   |
//!
//! # Examples
//!
//! ```
//! use autodp_core::DenseND;
//! use autodp_phi::{Entity, SingleEntityTensor};
//!
//! let ishan = Entity::new("Ishan");
//! let data = DenseND::from_vec(vec![-2.0, 3.0], &[2]).unwrap();
//! let lo = DenseND::from_elem(&[2], -5.0);
//! let hi = DenseND::from_elem(&[2], 5.0);
//! let t = SingleEntityTensor::new(data, lo, hi, ishan.clone()).unwrap();
//!
//! let scaled = &t * -2.0;
//! assert_eq!(scaled.data().to_vec(), vec![4.0, -6.0]);
//! assert_eq!(scaled.min_vals().to_vec(), vec![-10.0, -10.0]);
//! assert_eq!(scaled.entity(), &ishan);
//! ```

use std::fmt;

use autodp_core::DenseND;

use crate::config::PhiConfig;
use crate::dispatch;
use crate::element::Element;
use crate::entity::Entity;
use crate::error::PhiResult;
use crate::interval::{self, Interval, IntervalRef};
use crate::operand::{Operand, Owner, Tagged};
use crate::ops::{arithmetic_methods, comparison_methods, scalar_std_ops, ArithOp, CmpOp};
use crate::scalar_manager::ScalarManager;
use crate::tensor::PhiTensor;

/// A bounded tensor attributed to a single [`Entity`].
#[derive(Clone)]
pub struct SingleEntityTensor<T> {
    data: DenseND<T>,
    min_vals: DenseND<T>,
    max_vals: DenseND<T>,
    entity: Entity,
    scalar_manager: Option<ScalarManager>,
}

impl<T: Clone> SingleEntityTensor<T> {
    /// Create a tensor; `min_vals` and `max_vals` must match `data`'s shape.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if either bound array has a different shape.
    pub fn new(
        data: DenseND<T>,
        min_vals: DenseND<T>,
        max_vals: DenseND<T>,
        entity: Entity,
    ) -> PhiResult<Self> {
        interval::ensure_bound_shapes(&data, &min_vals, &max_vals)?;
        Ok(Self {
            data,
            min_vals,
            max_vals,
            entity,
            scalar_manager: None,
        })
    }

    /// Attach a scalar manager; results of operations inherit it.
    pub fn with_scalar_manager(mut self, manager: ScalarManager) -> Self {
        self.scalar_manager = Some(manager);
        self
    }

    pub(crate) fn from_interval(
        interval: Interval<T>,
        entity: Entity,
        scalar_manager: Option<ScalarManager>,
    ) -> Self {
        Self {
            data: interval.data,
            min_vals: interval.lo,
            max_vals: interval.hi,
            entity,
            scalar_manager,
        }
    }

    fn rebuild(&self, interval: Interval<T>) -> Self {
        Self::from_interval(interval, self.entity.clone(), self.scalar_manager.clone())
    }

    pub(crate) fn tagged(&self) -> Tagged<'_, T> {
        Tagged {
            interval: IntervalRef::bounded(&self.data, &self.min_vals, &self.max_vals),
            owner: Owner::One(&self.entity),
            manager: self.scalar_manager.as_ref(),
        }
    }

    pub fn data(&self) -> &DenseND<T> {
        &self.data
    }

    pub fn min_vals(&self) -> &DenseND<T> {
        &self.min_vals
    }

    pub fn max_vals(&self) -> &DenseND<T> {
        &self.max_vals
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn scalar_manager(&self) -> Option<&ScalarManager> {
        self.scalar_manager.as_ref()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }
}

impl<T: Element> SingleEntityTensor<T> {
    /// Create a tensor, additionally checking values against their bounds
    /// when `config.validate_bounds` is set.
    pub fn with_config(
        data: DenseND<T>,
        min_vals: DenseND<T>,
        max_vals: DenseND<T>,
        entity: Entity,
        config: &PhiConfig,
    ) -> PhiResult<Self> {
        let tensor = Self::new(data, min_vals, max_vals, entity)?;
        if config.validate_bounds {
            tensor.validate_bounds()?;
        }
        Ok(tensor)
    }

    /// Check `min_vals <= data <= max_vals` for every element.
    ///
    /// # Errors
    ///
    /// `BoundsViolation` naming the first offending flat index.
    pub fn validate_bounds(&self) -> PhiResult<()> {
        interval::ensure_within(&self.data, &self.min_vals, &self.max_vals)
    }

    /// Apply an arithmetic operator against any operand.
    ///
    /// Same owner (or a public operand) keeps the result single-entity; a
    /// different owner escalates it to a gamma tensor.
    pub fn arith<'a>(
        &'a self,
        op: ArithOp,
        other: impl Into<Operand<'a, T>>,
    ) -> PhiResult<PhiTensor<T>> {
        dispatch::arith_operand(self.tagged(), op, other.into())
    }

    arithmetic_methods!(PhiTensor<T>);

    /// Apply a comparison operator against any operand.
    ///
    /// # Errors
    ///
    /// `NotComparable` if the operand belongs to another entity or is escalated;
    /// `ShapeMismatch` if shapes do not broadcast.
    pub fn compare<'a>(
        &'a self,
        op: CmpOp,
        other: impl Into<Operand<'a, T>>,
    ) -> PhiResult<PhiTensor<bool>> {
        dispatch::compare_operand(self.tagged(), op, other.into())
    }

    comparison_methods!(PhiTensor<bool>);

    /// Clamp values to `[low, high]`; either side may be open.
    ///
    /// The bounds are clamped with the same limits. With `low > high` every
    /// element becomes `high`.
    pub fn clip(&self, low: Option<T>, high: Option<T>) -> Self {
        self.rebuild(interval::clip(
            &self.data,
            &self.min_vals,
            &self.max_vals,
            low,
            high,
        ))
    }

    pub(crate) fn scalar_op(&self, op: ArithOp, value: T) -> Self {
        self.rebuild(interval::with_scalar(
            op,
            &self.data,
            &self.min_vals,
            &self.max_vals,
            value,
        ))
    }
}

impl SingleEntityTensor<bool> {
    pub fn any(&self) -> bool {
        self.data.any()
    }

    pub fn all(&self) -> bool {
        self.data.all()
    }

    pub fn logical_and(&self, value: bool) -> Self {
        self.rebuild(Interval {
            data: self.data.and_scalar(value),
            lo: self.min_vals.and_scalar(value),
            hi: self.max_vals.and_scalar(value),
        })
    }

    pub fn logical_or(&self, value: bool) -> Self {
        self.rebuild(Interval {
            data: self.data.or_scalar(value),
            lo: self.min_vals.or_scalar(value),
            hi: self.max_vals.or_scalar(value),
        })
    }
}

impl<T: Element> std::ops::Neg for &SingleEntityTensor<T> {
    type Output = SingleEntityTensor<T>;

    fn neg(self) -> SingleEntityTensor<T> {
        self.rebuild(interval::negate(&self.data, &self.min_vals, &self.max_vals))
    }
}

scalar_std_ops!(SingleEntityTensor);

// Structural: the scalar manager does not take part.
impl<T: PartialEq> PartialEq for SingleEntityTensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entity == other.entity
            && self.data == other.data
            && self.min_vals == other.min_vals
            && self.max_vals == other.max_vals
    }
}

impl<T: fmt::Debug> fmt::Debug for SingleEntityTensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleEntityTensor")
            .field("entity", &self.entity)
            .field("data", &self.data)
            .field("min_vals", &self.min_vals)
            .field("max_vals", &self.max_vals)
            .finish()
    }
}
