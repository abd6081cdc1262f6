//! Row-of-entities tensors.
//!
//! A [`RowEntityTensor`] is an ordered, non-empty sequence of rows, each a
//! [`RowSlot`]: a single-entity tensor or, after cross-owner arithmetic, an
//! escalated gamma tensor. Every operation is applied row by row and collected
//! back into a new row-entity tensor, so the row kinds may end up mixed.
//!
//! # Examples
//!
//! ```
//! use autodp_core::DenseND;
//! use autodp_phi::{Entity, RowEntityTensor, SingleEntityTensor};
//!
//! let ishan = Entity::new("Ishan");
//! let row = |v: f64| {
//!     let data = DenseND::from_elem(&[4], v);
//!     let lo = DenseND::from_elem(&[4], -100.0);
//!     let hi = DenseND::from_elem(&[4], 100.0);
//!     SingleEntityTensor::new(data, lo, hi, ishan.clone()).unwrap()
//! };
//!
//! let rows = RowEntityTensor::new([row(1.0), row(2.0), row(3.0)]).unwrap();
//! assert_eq!(rows.shape().as_slice(), &[3, 4]);
//!
//! let shifted = &rows + 1.0;
//! assert!(!shifted.eq_elementwise(&rows).unwrap().any());
//! assert_eq!(rows.get(-1).unwrap().data().to_vec(), vec![3.0; 4]);
//! ```

use autodp_core::{DenseND, Shape};

use crate::config::PhiConfig;
use crate::dispatch;
use crate::element::Element;
use crate::entity::Entity;
use crate::error::{PhiError, PhiResult};
use crate::operand::Operand;
use crate::ops::{arithmetic_methods, comparison_methods, scalar_std_ops, ArithOp, CmpOp};
use crate::single_entity::SingleEntityTensor;
use crate::tensor::RowSlot;

/// An ordered sequence of per-entity rows.
#[derive(Clone, Debug, PartialEq)]
pub struct RowEntityTensor<T> {
    rows: Vec<RowSlot<T>>,
}

fn check_row_shapes<T: Clone>(rows: &[RowSlot<T>]) -> PhiResult<()> {
    let Some(first) = rows.first() else {
        return Err(PhiError::EmptyRows);
    };
    let expected = first.shape();
    for (index, row) in rows.iter().enumerate().skip(1) {
        if row.shape() != expected {
            return Err(PhiError::row_shape(index, expected, row.shape()));
        }
    }
    Ok(())
}

#[allow(clippy::len_without_is_empty)] // construction rejects empty row sequences
impl<T: Clone> RowEntityTensor<T> {
    /// Build from rows, requiring all rows to share one shape.
    ///
    /// # Errors
    ///
    /// `EmptyRows` for an empty sequence, `ShapeMismatch` for differing rows.
    pub fn new<I, R>(rows: I) -> PhiResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<RowSlot<T>>,
    {
        Self::with_config(rows, &PhiConfig::default())
    }

    /// Build from rows, checking row shapes only if `config.check_shape` is set.
    ///
    /// Bound validation happens when the rows themselves are built.
    pub fn with_config<I, R>(rows: I, config: &PhiConfig) -> PhiResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<RowSlot<T>>,
    {
        let rows: Vec<RowSlot<T>> = rows.into_iter().map(Into::into).collect();
        if rows.is_empty() {
            return Err(PhiError::EmptyRows);
        }
        if config.check_shape {
            check_row_shapes(&rows)?;
        }
        Ok(Self { rows })
    }

    /// Build without the row shape check.
    pub fn new_unchecked<I, R>(rows: I) -> PhiResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<RowSlot<T>>,
    {
        Self::with_config(rows, &PhiConfig::new().with_check_shape(false))
    }

    /// A one-row tensor holding `row`.
    pub fn from_single(row: SingleEntityTensor<T>) -> Self {
        Self {
            rows: vec![RowSlot::Single(row)],
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `[rows] + shape of the first row`
    pub fn shape(&self) -> Shape {
        let mut shape = Shape::new();
        shape.push(self.rows.len());
        if let Some(first) = self.rows.first() {
            shape.extend_from_slice(first.shape());
        }
        shape
    }

    pub fn rows(&self) -> &[RowSlot<T>] {
        &self.rows
    }

    /// Row at `index`; negative indices count from the end.
    pub fn get(&self, index: isize) -> Option<&RowSlot<T>> {
        let len = self.rows.len() as isize;
        let resolved = if index < 0 { len + index } else { index };
        if (0..len).contains(&resolved) {
            self.rows.get(resolved as usize)
        } else {
            None
        }
    }

    /// Like [`get`](Self::get), with an `IndexOutOfBounds` error.
    pub fn row(&self, index: isize) -> PhiResult<&RowSlot<T>> {
        self.get(index).ok_or(PhiError::IndexOutOfBounds {
            index,
            len: self.rows.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RowSlot<T>> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<RowSlot<T>> {
        self.rows
    }

    /// Distinct contributing entities, in first-seen order
    pub fn entities(&self) -> Vec<Entity> {
        let mut seen: Vec<Entity> = Vec::new();
        for entity in self.rows.iter().flat_map(|row| row.entities()) {
            if !seen.contains(entity) {
                seen.push(entity.clone());
            }
        }
        seen
    }

    pub fn has_gamma_rows(&self) -> bool {
        self.rows.iter().any(RowSlot::is_gamma)
    }

    /// Row values stacked along a new leading axis.
    pub fn data(&self) -> PhiResult<DenseND<T>> {
        self.stack(RowSlot::data)
    }

    pub fn min_vals(&self) -> PhiResult<DenseND<T>> {
        self.stack(RowSlot::min_vals)
    }

    pub fn max_vals(&self) -> PhiResult<DenseND<T>> {
        self.stack(RowSlot::max_vals)
    }

    fn stack(&self, field: impl Fn(&RowSlot<T>) -> &DenseND<T>) -> PhiResult<DenseND<T>> {
        let parts: Vec<DenseND<T>> = self.rows.iter().map(|row| field(row).clone()).collect();
        Ok(DenseND::stack_rows(&parts)?)
    }

    /// Rows of `self` followed by rows of `other`.
    pub fn concat(&self, other: &Self) -> PhiResult<Self> {
        let rows: Vec<RowSlot<T>> = self.rows.iter().chain(&other.rows).cloned().collect();
        check_row_shapes(&rows)?;
        Ok(Self { rows })
    }

    pub(crate) fn map_rows<U, F>(&self, f: F) -> PhiResult<RowEntityTensor<U>>
    where
        F: FnMut(&RowSlot<T>) -> PhiResult<RowSlot<U>>,
    {
        let rows = self.rows.iter().map(f).collect::<PhiResult<Vec<_>>>()?;
        Ok(RowEntityTensor { rows })
    }

    /// Pair row `i` with row `i`; row counts must match.
    pub(crate) fn zip_rows<U, F>(&self, other: &Self, mut f: F) -> PhiResult<RowEntityTensor<U>>
    where
        F: FnMut(&RowSlot<T>, &RowSlot<T>) -> PhiResult<RowSlot<U>>,
    {
        if self.len() != other.len() {
            return Err(PhiError::row_count(self.len(), other.len()));
        }
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(l, r)| f(l, r))
            .collect::<PhiResult<Vec<_>>>()?;
        Ok(RowEntityTensor { rows })
    }
}

impl<T: Element> RowEntityTensor<T> {
    /// Apply an arithmetic operator row by row.
    ///
    /// Public operands broadcast against every row; another row-entity tensor
    /// pairs rows by position and must have the same row count.
    pub fn arith<'a>(
        &'a self,
        op: ArithOp,
        other: impl Into<Operand<'a, T>>,
    ) -> PhiResult<Self> {
        dispatch::rows_arith(self, op, other.into())
    }

    arithmetic_methods!(RowEntityTensor<T>);

    /// Apply a comparison row by row; any row that cannot be attributed to one
    /// entity makes the whole comparison fail.
    pub fn compare<'a>(
        &'a self,
        op: CmpOp,
        other: impl Into<Operand<'a, T>>,
    ) -> PhiResult<RowEntityTensor<bool>> {
        dispatch::rows_compare(self, op, other.into())
    }

    comparison_methods!(RowEntityTensor<bool>);

    pub fn validate_bounds(&self) -> PhiResult<()> {
        for row in &self.rows {
            match row {
                RowSlot::Single(t) => t.validate_bounds()?,
                RowSlot::Gamma(t) => t.validate_bounds()?,
            }
        }
        Ok(())
    }

    pub fn clip(&self, low: Option<T>, high: Option<T>) -> Self {
        Self {
            rows: self.rows.iter().map(|row| row.clip(low, high)).collect(),
        }
    }

    pub(crate) fn scalar_op(&self, op: ArithOp, value: T) -> Self {
        Self {
            rows: self.rows.iter().map(|row| row.scalar_op(op, value)).collect(),
        }
    }
}

impl RowEntityTensor<bool> {
    pub fn any(&self) -> bool {
        self.rows.iter().any(RowSlot::any)
    }

    pub fn all(&self) -> bool {
        self.rows.iter().all(RowSlot::all)
    }

    pub fn logical_and(&self, value: bool) -> Self {
        Self {
            rows: self.rows.iter().map(|row| row.logical_and(value)).collect(),
        }
    }

    pub fn logical_or(&self, value: bool) -> Self {
        Self {
            rows: self.rows.iter().map(|row| row.logical_or(value)).collect(),
        }
    }
}

impl<T: Element> std::ops::Neg for &RowEntityTensor<T> {
    type Output = RowEntityTensor<T>;

    fn neg(self) -> RowEntityTensor<T> {
        RowEntityTensor {
            rows: self.rows.iter().map(|row| -row).collect(),
        }
    }
}

scalar_std_ops!(RowEntityTensor);

impl<'a, T> IntoIterator for &'a RowEntityTensor<T> {
    type Item = &'a RowSlot<T>;
    type IntoIter = std::slice::Iter<'a, RowSlot<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<T> From<SingleEntityTensor<T>> for RowEntityTensor<T> {
    fn from(row: SingleEntityTensor<T>) -> Self {
        Self {
            rows: vec![RowSlot::Single(row)],
        }
    }
}
