//! Right-hand operands of binary operations.
//!
//! Every binary operation takes `impl Into<Operand>` and matches the variant
//! exactly once. Row-entity operands are peeled off first and handled row by
//! row; everything else is lowered to an [`Elementwise`] view carrying its
//! interval, its owners and its scalar manager.

use autodp_core::DenseND;

use crate::element::Element;
use crate::entity::Entity;
use crate::gamma::IntermediateGammaTensor;
use crate::interval::IntervalRef;
use crate::row_entity::RowEntityTensor;
use crate::scalar_manager::ScalarManager;
use crate::single_entity::SingleEntityTensor;
use crate::tensor::{PhiTensor, RowSlot};

/// The right-hand side of a binary tensor operation.
#[derive(Debug)]
pub enum Operand<'a, T> {
    /// A public scalar, broadcast to every element
    Scalar(T),
    /// A public array, broadcast against the tensor
    Array(&'a DenseND<T>),
    /// A tensor owned by one entity
    Single(&'a SingleEntityTensor<T>),
    /// A row of per-entity tensors
    Row(&'a RowEntityTensor<T>),
    /// A multi-entity (escalated) tensor
    Gamma(&'a IntermediateGammaTensor<T>),
}

impl<'a, T: Copy> Clone for Operand<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: Copy> Copy for Operand<'a, T> {}

impl<'a, T: Element> Operand<'a, T> {
    /// Variant name, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Array(_) => "array",
            Operand::Single(_) => "single_entity",
            Operand::Row(_) => "row_entity",
            Operand::Gamma(_) => "gamma",
        }
    }

    /// Split off row-entity operands; lower everything else to an elementwise view.
    pub(crate) fn elementwise(self) -> Result<Elementwise<'a, T>, &'a RowEntityTensor<T>> {
        match self {
            Operand::Scalar(value) => Ok(Elementwise::public(IntervalRef::scalar(value))),
            Operand::Array(values) => Ok(Elementwise::public(IntervalRef::exact(values))),
            Operand::Single(tensor) => Ok(tensor.tagged().into()),
            Operand::Gamma(tensor) => Ok(tensor.tagged().into()),
            Operand::Row(rows) => Err(rows),
        }
    }
}

/// Who a tagged operand's values are attributed to.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Owner<'a> {
    One(&'a Entity),
    Many(&'a [Entity]),
}

impl<'a> Owner<'a> {
    pub fn entities(self) -> &'a [Entity] {
        match self {
            Owner::One(entity) => std::slice::from_ref(entity),
            Owner::Many(entities) => entities,
        }
    }

    pub fn describe(self) -> String {
        self.entities()
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Left-hand side of an elementwise operation: always entity-tagged.
#[derive(Clone)]
pub(crate) struct Tagged<'a, T: Clone> {
    pub interval: IntervalRef<'a, T>,
    pub owner: Owner<'a>,
    pub manager: Option<&'a ScalarManager>,
}

/// Right-hand side of an elementwise operation: tagged or public.
#[derive(Clone)]
pub(crate) struct Elementwise<'a, T: Clone> {
    pub interval: IntervalRef<'a, T>,
    pub owner: Option<Owner<'a>>,
    pub manager: Option<&'a ScalarManager>,
}

impl<'a, T: Clone> Elementwise<'a, T> {
    fn public(interval: IntervalRef<'a, T>) -> Self {
        Self {
            interval,
            owner: None,
            manager: None,
        }
    }
}

impl<'a, T: Clone> From<Tagged<'a, T>> for Elementwise<'a, T> {
    fn from(tagged: Tagged<'a, T>) -> Self {
        Self {
            interval: tagged.interval,
            owner: Some(tagged.owner),
            manager: tagged.manager,
        }
    }
}

macro_rules! scalar_operand {
    ($($t:ty),*) => {
        $(
            impl<'a> From<$t> for Operand<'a, $t> {
                fn from(value: $t) -> Self {
                    Operand::Scalar(value)
                }
            }
        )*
    };
}

scalar_operand!(f32, f64, i8, i16, i32, i64, isize);

impl<'a, T> From<&'a DenseND<T>> for Operand<'a, T> {
    fn from(values: &'a DenseND<T>) -> Self {
        Operand::Array(values)
    }
}

impl<'a, T> From<&'a SingleEntityTensor<T>> for Operand<'a, T> {
    fn from(tensor: &'a SingleEntityTensor<T>) -> Self {
        Operand::Single(tensor)
    }
}

impl<'a, T> From<&'a RowEntityTensor<T>> for Operand<'a, T> {
    fn from(tensor: &'a RowEntityTensor<T>) -> Self {
        Operand::Row(tensor)
    }
}

impl<'a, T> From<&'a IntermediateGammaTensor<T>> for Operand<'a, T> {
    fn from(tensor: &'a IntermediateGammaTensor<T>) -> Self {
        Operand::Gamma(tensor)
    }
}

impl<'a, T> From<&'a RowSlot<T>> for Operand<'a, T> {
    fn from(slot: &'a RowSlot<T>) -> Self {
        match slot {
            RowSlot::Single(tensor) => Operand::Single(tensor),
            RowSlot::Gamma(tensor) => Operand::Gamma(tensor),
        }
    }
}

impl<'a, T> From<&'a PhiTensor<T>> for Operand<'a, T> {
    fn from(tensor: &'a PhiTensor<T>) -> Self {
        match tensor {
            PhiTensor::Single(tensor) => Operand::Single(tensor),
            PhiTensor::Row(tensor) => Operand::Row(tensor),
            PhiTensor::Gamma(tensor) => Operand::Gamma(tensor),
        }
    }
}
