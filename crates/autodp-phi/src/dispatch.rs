//! Owner-merging rules for binary operations.
//!
//! Arithmetic keeps a single owner when both sides agree (or the right side is
//! public) and escalates to a gamma tensor otherwise. Comparisons never
//! escalate: they need a single owner, or a public right-hand side.

use smallvec::SmallVec;

use crate::element::Element;
use crate::entity::Entity;
use crate::error::{PhiError, PhiResult};
use crate::gamma::{union_entities, IntermediateGammaTensor};
use crate::interval;
use crate::operand::{Elementwise, Operand, Owner, Tagged};
use crate::ops::{ArithOp, CmpOp};
use crate::row_entity::RowEntityTensor;
use crate::scalar_manager;
use crate::single_entity::SingleEntityTensor;
use crate::tensor::{PhiTensor, RowSlot};
use crate::tracing_support::{record_escalation, record_refused_comparison, record_row_dispatch};

/// Same owner on both sides, if there is exactly one.
fn shared_owner<'a>(lhs: Owner<'a>, rhs: Option<Owner<'a>>) -> Option<&'a Entity> {
    match (lhs, rhs) {
        (Owner::One(a), None) => Some(a),
        (Owner::One(a), Some(Owner::One(b))) if a == b => Some(a),
        _ => None,
    }
}

pub(crate) fn arith<T: Element>(
    lhs: Tagged<'_, T>,
    op: ArithOp,
    rhs: Elementwise<'_, T>,
) -> PhiResult<RowSlot<T>> {
    let result = interval::combine(op, &lhs.interval, &rhs.interval)?;
    let manager = scalar_manager::inherit(lhs.manager, rhs.manager);

    if let Some(entity) = shared_owner(lhs.owner, rhs.owner) {
        return Ok(RowSlot::Single(SingleEntityTensor::from_interval(
            result,
            entity.clone(),
            manager,
        )));
    }

    let entities: SmallVec<[Entity; 4]> = match rhs.owner {
        None => lhs.owner.entities().iter().cloned().collect(),
        Some(other) => {
            let merged = union_entities(lhs.owner.entities(), other.entities());
            record_escalation(op.name(), &merged);
            merged
        }
    };
    Ok(RowSlot::Gamma(IntermediateGammaTensor::from_interval(
        result, entities, manager,
    )))
}

pub(crate) fn compare<T: Element>(
    lhs: Tagged<'_, T>,
    op: CmpOp,
    rhs: Elementwise<'_, T>,
) -> PhiResult<RowSlot<bool>> {
    let manager = scalar_manager::inherit(lhs.manager, rhs.manager);

    if let Some(entity) = shared_owner(lhs.owner, rhs.owner) {
        let result = interval::compare(op, &lhs.interval, &rhs.interval)?;
        return Ok(RowSlot::Single(SingleEntityTensor::from_interval(
            result,
            entity.clone(),
            manager,
        )));
    }

    match (lhs.owner, rhs.owner) {
        (Owner::Many(entities), None) => {
            let result = interval::compare(op, &lhs.interval, &rhs.interval)?;
            Ok(RowSlot::Gamma(IntermediateGammaTensor::from_interval(
                result,
                entities.iter().cloned().collect(),
                manager,
            )))
        }
        (Owner::One(a), Some(Owner::One(b))) => {
            record_refused_comparison(op.name(), a.name(), b.name());
            Err(PhiError::entity_mismatch(op.name(), a, b))
        }
        (owner, other) => {
            let entities = match other {
                Some(other) => union_entities(owner.entities(), other.entities()),
                None => owner.entities().iter().cloned().collect(),
            };
            let names = Owner::Many(&entities).describe();
            record_refused_comparison(op.name(), &owner.describe(), &names);
            Err(PhiError::escalated(op.name(), names))
        }
    }
}

/// Arithmetic with a tagged left side and any right operand.
///
/// A row-entity right operand is applied row by row, with `lhs` on the left of
/// every row.
pub(crate) fn arith_operand<'a, T: Element>(
    lhs: Tagged<'a, T>,
    op: ArithOp,
    rhs: Operand<'a, T>,
) -> PhiResult<PhiTensor<T>> {
    let kind = rhs.kind();
    match rhs.elementwise() {
        Ok(rhs) => arith(lhs, op, rhs).map(PhiTensor::from),
        Err(rows) => {
            record_row_dispatch(op.name(), rows.len(), kind);
            rows.map_rows(|row| arith(lhs.clone(), op, row.tagged().into()))
                .map(PhiTensor::Row)
        }
    }
}

/// Comparison with a tagged left side and any right operand.
pub(crate) fn compare_operand<'a, T: Element>(
    lhs: Tagged<'a, T>,
    op: CmpOp,
    rhs: Operand<'a, T>,
) -> PhiResult<PhiTensor<bool>> {
    let kind = rhs.kind();
    match rhs.elementwise() {
        Ok(rhs) => compare(lhs, op, rhs).map(PhiTensor::from),
        Err(rows) => {
            record_row_dispatch(op.name(), rows.len(), kind);
            rows.map_rows(|row| compare(lhs.clone(), op, row.tagged().into()))
                .map(PhiTensor::Row)
        }
    }
}

/// Row-wise arithmetic with a row-entity left side.
pub(crate) fn rows_arith<'a, T: Element>(
    lhs: &'a RowEntityTensor<T>,
    op: ArithOp,
    rhs: Operand<'a, T>,
) -> PhiResult<RowEntityTensor<T>> {
    record_row_dispatch(op.name(), lhs.len(), rhs.kind());
    match rhs.elementwise() {
        Ok(rhs) => lhs.map_rows(|row| arith(row.tagged(), op, rhs.clone())),
        Err(rows) => lhs.zip_rows(rows, |l, r| arith(l.tagged(), op, r.tagged().into())),
    }
}

/// Row-wise comparison with a row-entity left side.
pub(crate) fn rows_compare<'a, T: Element>(
    lhs: &'a RowEntityTensor<T>,
    op: CmpOp,
    rhs: Operand<'a, T>,
) -> PhiResult<RowEntityTensor<bool>> {
    record_row_dispatch(op.name(), lhs.len(), rhs.kind());
    match rhs.elementwise() {
        Ok(rhs) => lhs.map_rows(|row| compare(row.tagged(), op, rhs.clone())),
        Err(rows) => lhs.zip_rows(rows, |l, r| compare(l.tagged(), op, r.tagged().into())),
    }
}
