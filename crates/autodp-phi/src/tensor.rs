//! Tagged result representations.
//!
//! [`RowSlot`] is what a single row of a [`RowEntityTensor`] holds: either a
//! single-owner tensor or an escalated one. [`PhiTensor`] is what any
//! operation with a single-owner or escalated left side returns.

use autodp_core::{DenseND, Shape};

use crate::dispatch;
use crate::element::Element;
use crate::entity::Entity;
use crate::error::PhiResult;
use crate::gamma::IntermediateGammaTensor;
use crate::operand::{Operand, Tagged};
use crate::ops::{ArithOp, CmpOp};
use crate::row_entity::RowEntityTensor;
use crate::single_entity::SingleEntityTensor;

/// One row of a row-entity tensor.
#[derive(Clone, Debug, PartialEq)]
pub enum RowSlot<T> {
    Single(SingleEntityTensor<T>),
    Gamma(IntermediateGammaTensor<T>),
}

impl<T: Clone> RowSlot<T> {
    pub fn is_single(&self) -> bool {
        matches!(self, RowSlot::Single(_))
    }

    pub fn is_gamma(&self) -> bool {
        matches!(self, RowSlot::Gamma(_))
    }

    pub fn as_single(&self) -> Option<&SingleEntityTensor<T>> {
        match self {
            RowSlot::Single(t) => Some(t),
            RowSlot::Gamma(_) => None,
        }
    }

    pub fn as_gamma(&self) -> Option<&IntermediateGammaTensor<T>> {
        match self {
            RowSlot::Gamma(t) => Some(t),
            RowSlot::Single(_) => None,
        }
    }

    pub fn into_single(self) -> Option<SingleEntityTensor<T>> {
        match self {
            RowSlot::Single(t) => Some(t),
            RowSlot::Gamma(_) => None,
        }
    }

    pub fn into_gamma(self) -> Option<IntermediateGammaTensor<T>> {
        match self {
            RowSlot::Gamma(t) => Some(t),
            RowSlot::Single(_) => None,
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.data().shape()
    }

    pub fn data(&self) -> &DenseND<T> {
        match self {
            RowSlot::Single(t) => t.data(),
            RowSlot::Gamma(t) => t.data(),
        }
    }

    pub fn min_vals(&self) -> &DenseND<T> {
        match self {
            RowSlot::Single(t) => t.min_vals(),
            RowSlot::Gamma(t) => t.min_vals(),
        }
    }

    pub fn max_vals(&self) -> &DenseND<T> {
        match self {
            RowSlot::Single(t) => t.max_vals(),
            RowSlot::Gamma(t) => t.max_vals(),
        }
    }

    /// The owning entity; `None` once provenance spans several entities
    pub fn entity(&self) -> Option<&Entity> {
        match self {
            RowSlot::Single(t) => Some(t.entity()),
            RowSlot::Gamma(_) => None,
        }
    }

    /// Every entity contributing to this row
    pub fn entities(&self) -> &[Entity] {
        match self {
            RowSlot::Single(t) => std::slice::from_ref(t.entity()),
            RowSlot::Gamma(t) => t.entities(),
        }
    }

    pub(crate) fn tagged(&self) -> Tagged<'_, T> {
        match self {
            RowSlot::Single(t) => t.tagged(),
            RowSlot::Gamma(t) => t.tagged(),
        }
    }
}

impl<T: Element> RowSlot<T> {
    pub fn arith<'a>(
        &'a self,
        op: ArithOp,
        other: impl Into<Operand<'a, T>>,
    ) -> PhiResult<PhiTensor<T>> {
        dispatch::arith_operand(self.tagged(), op, other.into())
    }

    pub fn compare<'a>(
        &'a self,
        op: CmpOp,
        other: impl Into<Operand<'a, T>>,
    ) -> PhiResult<PhiTensor<bool>> {
        dispatch::compare_operand(self.tagged(), op, other.into())
    }

    pub fn clip(&self, low: Option<T>, high: Option<T>) -> Self {
        match self {
            RowSlot::Single(t) => RowSlot::Single(t.clip(low, high)),
            RowSlot::Gamma(t) => RowSlot::Gamma(t.clip(low, high)),
        }
    }

    pub(crate) fn scalar_op(&self, op: ArithOp, value: T) -> Self {
        match self {
            RowSlot::Single(t) => RowSlot::Single(t.scalar_op(op, value)),
            RowSlot::Gamma(t) => RowSlot::Gamma(t.scalar_op(op, value)),
        }
    }
}

impl RowSlot<bool> {
    pub fn any(&self) -> bool {
        self.data().any()
    }

    pub fn all(&self) -> bool {
        self.data().all()
    }

    pub fn logical_and(&self, value: bool) -> Self {
        match self {
            RowSlot::Single(t) => RowSlot::Single(t.logical_and(value)),
            RowSlot::Gamma(t) => RowSlot::Gamma(t.logical_and(value)),
        }
    }

    pub fn logical_or(&self, value: bool) -> Self {
        match self {
            RowSlot::Single(t) => RowSlot::Single(t.logical_or(value)),
            RowSlot::Gamma(t) => RowSlot::Gamma(t.logical_or(value)),
        }
    }
}

impl<T: Element> std::ops::Neg for &RowSlot<T> {
    type Output = RowSlot<T>;

    fn neg(self) -> RowSlot<T> {
        match self {
            RowSlot::Single(t) => RowSlot::Single(-t),
            RowSlot::Gamma(t) => RowSlot::Gamma(-t),
        }
    }
}

impl<T> From<SingleEntityTensor<T>> for RowSlot<T> {
    fn from(t: SingleEntityTensor<T>) -> Self {
        RowSlot::Single(t)
    }
}

impl<T> From<IntermediateGammaTensor<T>> for RowSlot<T> {
    fn from(t: IntermediateGammaTensor<T>) -> Self {
        RowSlot::Gamma(t)
    }
}

/// Result of an operation with a single-owner or escalated left operand.
///
/// # Examples
///
/// ```
/// use autodp_core::DenseND;
/// use autodp_phi::{Entity, SingleEntityTensor};
///
/// let data = DenseND::from_vec(vec![1.0, 2.0], &[2]).unwrap();
/// let lo = DenseND::zeros(&[2]);
/// let hi = DenseND::from_elem(&[2], 5.0);
///
/// let a = SingleEntityTensor::new(data.clone(), lo.clone(), hi.clone(), Entity::new("Ishan")).unwrap();
/// let b = SingleEntityTensor::new(data, lo, hi, Entity::new("Trask")).unwrap();
///
/// assert!(a.try_add(&a).unwrap().is_single());
/// assert!(a.try_add(&b).unwrap().is_gamma());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum PhiTensor<T> {
    Single(SingleEntityTensor<T>),
    Row(RowEntityTensor<T>),
    Gamma(IntermediateGammaTensor<T>),
}

impl<T: Clone> PhiTensor<T> {
    pub fn is_single(&self) -> bool {
        matches!(self, PhiTensor::Single(_))
    }

    pub fn is_row(&self) -> bool {
        matches!(self, PhiTensor::Row(_))
    }

    pub fn is_gamma(&self) -> bool {
        matches!(self, PhiTensor::Gamma(_))
    }

    pub fn as_single(&self) -> Option<&SingleEntityTensor<T>> {
        match self {
            PhiTensor::Single(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_row(&self) -> Option<&RowEntityTensor<T>> {
        match self {
            PhiTensor::Row(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_gamma(&self) -> Option<&IntermediateGammaTensor<T>> {
        match self {
            PhiTensor::Gamma(t) => Some(t),
            _ => None,
        }
    }

    pub fn into_single(self) -> Option<SingleEntityTensor<T>> {
        match self {
            PhiTensor::Single(t) => Some(t),
            _ => None,
        }
    }

    pub fn into_row(self) -> Option<RowEntityTensor<T>> {
        match self {
            PhiTensor::Row(t) => Some(t),
            _ => None,
        }
    }

    pub fn into_gamma(self) -> Option<IntermediateGammaTensor<T>> {
        match self {
            PhiTensor::Gamma(t) => Some(t),
            _ => None,
        }
    }

    /// Full shape; row-entity results lead with the row count
    pub fn shape(&self) -> Shape {
        match self {
            PhiTensor::Single(t) => t.shape().iter().copied().collect(),
            PhiTensor::Row(t) => t.shape(),
            PhiTensor::Gamma(t) => t.shape().iter().copied().collect(),
        }
    }
}

impl<T: Element> PhiTensor<T> {
    /// Chain another arithmetic operation onto this result.
    pub fn arith<'a>(
        &'a self,
        op: ArithOp,
        other: impl Into<Operand<'a, T>>,
    ) -> PhiResult<Self> {
        match self {
            PhiTensor::Single(t) => t.arith(op, other),
            PhiTensor::Gamma(t) => t.arith(op, other),
            PhiTensor::Row(t) => t.arith(op, other).map(PhiTensor::Row),
        }
    }

    pub fn compare<'a>(
        &'a self,
        op: CmpOp,
        other: impl Into<Operand<'a, T>>,
    ) -> PhiResult<PhiTensor<bool>> {
        match self {
            PhiTensor::Single(t) => t.compare(op, other),
            PhiTensor::Gamma(t) => t.compare(op, other),
            PhiTensor::Row(t) => t.compare(op, other).map(PhiTensor::Row),
        }
    }
}

impl PhiTensor<bool> {
    pub fn any(&self) -> bool {
        match self {
            PhiTensor::Single(t) => t.any(),
            PhiTensor::Row(t) => t.any(),
            PhiTensor::Gamma(t) => t.any(),
        }
    }

    pub fn all(&self) -> bool {
        match self {
            PhiTensor::Single(t) => t.all(),
            PhiTensor::Row(t) => t.all(),
            PhiTensor::Gamma(t) => t.all(),
        }
    }
}

impl<T: Element> std::ops::Neg for &PhiTensor<T> {
    type Output = PhiTensor<T>;

    fn neg(self) -> PhiTensor<T> {
        match self {
            PhiTensor::Single(t) => PhiTensor::Single(-t),
            PhiTensor::Row(t) => PhiTensor::Row(-t),
            PhiTensor::Gamma(t) => PhiTensor::Gamma(-t),
        }
    }
}

impl<T> From<RowSlot<T>> for PhiTensor<T> {
    fn from(slot: RowSlot<T>) -> Self {
        match slot {
            RowSlot::Single(t) => PhiTensor::Single(t),
            RowSlot::Gamma(t) => PhiTensor::Gamma(t),
        }
    }
}

impl<T> From<RowEntityTensor<T>> for PhiTensor<T> {
    fn from(t: RowEntityTensor<T>) -> Self {
        PhiTensor::Row(t)
    }
}
