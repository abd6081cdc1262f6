//! Escalated tensors whose provenance spans several entities.
//!
//! An [`IntermediateGammaTensor`] is produced whenever arithmetic combines
//! operands owned by different entities. It keeps the propagated bounds and
//! the sorted set of contributing entities, but no longer exposes a single
//! owner. Further arithmetic stays escalated and unions the entity sets.

use std::fmt;

use autodp_core::DenseND;
use smallvec::SmallVec;

use crate::dispatch;
use crate::element::Element;
use crate::entity::Entity;
use crate::error::PhiResult;
use crate::interval::{self, Interval, IntervalRef};
use crate::operand::{Operand, Owner, Tagged};
use crate::ops::{arithmetic_methods, comparison_methods, scalar_std_ops, ArithOp, CmpOp};
use crate::scalar_manager::ScalarManager;
use crate::tensor::PhiTensor;

/// Sorted, de-duplicated union of two entity lists.
pub(crate) fn union_entities(lhs: &[Entity], rhs: &[Entity]) -> SmallVec<[Entity; 4]> {
    let mut merged: SmallVec<[Entity; 4]> = lhs.iter().chain(rhs).cloned().collect();
    merged.sort();
    merged.dedup();
    merged
}

/// A bounded tensor attributed to several entities at once.
#[derive(Clone)]
pub struct IntermediateGammaTensor<T> {
    data: DenseND<T>,
    min_vals: DenseND<T>,
    max_vals: DenseND<T>,
    entities: SmallVec<[Entity; 4]>,
    scalar_manager: Option<ScalarManager>,
}

impl<T: Clone> IntermediateGammaTensor<T> {
    pub(crate) fn from_interval(
        interval: Interval<T>,
        entities: SmallVec<[Entity; 4]>,
        scalar_manager: Option<ScalarManager>,
    ) -> Self {
        Self {
            data: interval.data,
            min_vals: interval.lo,
            max_vals: interval.hi,
            entities,
            scalar_manager,
        }
    }

    fn rebuild(&self, interval: Interval<T>) -> Self {
        Self::from_interval(
            interval,
            self.entities.clone(),
            self.scalar_manager.clone(),
        )
    }

    pub(crate) fn tagged(&self) -> Tagged<'_, T> {
        Tagged {
            interval: IntervalRef::bounded(&self.data, &self.min_vals, &self.max_vals),
            owner: Owner::Many(&self.entities),
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

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Contributing entities, sorted by id
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn contains(&self, entity: &Entity) -> bool {
        self.entities.binary_search(entity).is_ok()
    }

    pub fn scalar_manager(&self) -> Option<&ScalarManager> {
        self.scalar_manager.as_ref()
    }
}

impl<T: Element> IntermediateGammaTensor<T> {
    /// Arithmetic always stays escalated; row-entity operands apply per row.
    pub fn arith<'a>(
        &'a self,
        op: ArithOp,
        other: impl Into<Operand<'a, T>>,
    ) -> PhiResult<PhiTensor<T>> {
        dispatch::arith_operand(self.tagged(), op, other.into())
    }

    arithmetic_methods!(PhiTensor<T>);

    /// Only public scalars and arrays can be compared against; any tagged
    /// operand is `NotComparable`.
    pub fn compare<'a>(
        &'a self,
        op: CmpOp,
        other: impl Into<Operand<'a, T>>,
    ) -> PhiResult<PhiTensor<bool>> {
        dispatch::compare_operand(self.tagged(), op, other.into())
    }

    comparison_methods!(PhiTensor<bool>);

    pub fn validate_bounds(&self) -> PhiResult<()> {
        interval::ensure_within(&self.data, &self.min_vals, &self.max_vals)
    }

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

impl IntermediateGammaTensor<bool> {
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

impl<T: Element> std::ops::Neg for &IntermediateGammaTensor<T> {
    type Output = IntermediateGammaTensor<T>;

    fn neg(self) -> IntermediateGammaTensor<T> {
        self.rebuild(interval::negate(&self.data, &self.min_vals, &self.max_vals))
    }
}

scalar_std_ops!(IntermediateGammaTensor);

impl<T: PartialEq> PartialEq for IntermediateGammaTensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entities == other.entities
            && self.data == other.data
            && self.min_vals == other.min_vals
            && self.max_vals == other.max_vals
    }
}

impl<T: fmt::Debug> fmt::Debug for IntermediateGammaTensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntermediateGammaTensor")
            .field("entities", &self.entities)
            .field("data", &self.data)
            .field("min_vals", &self.min_vals)
            .field("max_vals", &self.max_vals)
            .finish()
    }
}
