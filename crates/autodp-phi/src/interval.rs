//! Interval bound propagation.
//!
//! Every operand is viewed as `(data, lo, hi)`. Plain scalars and arrays are
//! degenerate intervals `[v, v]`, so one set of rules covers every pairing:
//!
//! | op  | lo                              | hi                              |
//! |-----|---------------------------------|---------------------------------|
//! | add | `l1 + l2`                       | `h1 + h2`                       |
//! | sub | `l1 - h2`                       | `h1 - l2`                       |
//! | mul | `min(l1l2, l1h2, h1l2, h1h2)`   | `max(l1l2, l1h2, h1l2, h1h2)`   |
//! | neg | `-h`                            | `-l`                            |
//!
//! All three arrays are broadcast together, so results keep
//! `lo.shape == hi.shape == data.shape`. Integer overflow saturates at the
//! type's range (see [`Element`]), which keeps `lo <= data <= hi`.

use std::borrow::Cow;

use autodp_core::{shapes_broadcastable, DenseND};

use crate::element::Element;
use crate::error::{PhiError, PhiResult};
use crate::ops::{ArithOp, CmpOp};

/// Borrowed or owned view of an operand's values and bounds.
#[derive(Clone)]
pub(crate) struct IntervalRef<'a, T>
where
    T: Clone,
{
    pub data: Cow<'a, DenseND<T>>,
    pub lo: Cow<'a, DenseND<T>>,
    pub hi: Cow<'a, DenseND<T>>,
}

impl<'a, T: Clone> IntervalRef<'a, T> {
    pub fn bounded(data: &'a DenseND<T>, lo: &'a DenseND<T>, hi: &'a DenseND<T>) -> Self {
        Self {
            data: Cow::Borrowed(data),
            lo: Cow::Borrowed(lo),
            hi: Cow::Borrowed(hi),
        }
    }

    /// A public array is exactly known: `[v, v]`
    pub fn exact(values: &'a DenseND<T>) -> Self {
        Self::bounded(values, values, values)
    }

    /// A public scalar, as a 0-d array that broadcasts against anything
    pub fn scalar(value: T) -> Self {
        let point = DenseND::scalar(value);
        Self {
            data: Cow::Owned(point.clone()),
            lo: Cow::Owned(point.clone()),
            hi: Cow::Owned(point),
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }
}

/// Owned values and bounds produced by an operation.
#[derive(Debug)]
pub(crate) struct Interval<T> {
    pub data: DenseND<T>,
    pub lo: DenseND<T>,
    pub hi: DenseND<T>,
}

/// Bound arrays must have exactly the data's shape.
pub(crate) fn ensure_bound_shapes<T: Clone>(
    data: &DenseND<T>,
    lo: &DenseND<T>,
    hi: &DenseND<T>,
) -> PhiResult<()> {
    if lo.shape() != data.shape() {
        return Err(PhiError::bounds_shape("min_vals", data.shape(), lo.shape()));
    }
    if hi.shape() != data.shape() {
        return Err(PhiError::bounds_shape("max_vals", data.shape(), hi.shape()));
    }
    Ok(())
}

/// Check `lo <= data <= hi` elementwise, reporting the first violation.
pub(crate) fn ensure_within<T>(
    data: &DenseND<T>,
    lo: &DenseND<T>,
    hi: &DenseND<T>,
) -> PhiResult<()>
where
    T: Clone + PartialOrd + std::fmt::Debug,
{
    let triples = data.iter().zip(lo.iter()).zip(hi.iter());
    for (index, ((value, min), max)) in triples.enumerate() {
        if !(min <= value && value <= max) {
            return Err(PhiError::BoundsViolation {
                index,
                value: format!("{value:?}"),
                min: format!("{min:?}"),
                max: format!("{max:?}"),
            });
        }
    }
    Ok(())
}

fn ensure_broadcastable(lhs: &[usize], rhs: &[usize]) -> PhiResult<()> {
    if shapes_broadcastable(lhs, rhs) {
        Ok(())
    } else {
        Err(PhiError::not_broadcastable(lhs, rhs))
    }
}

/// Elementwise `f` over two broadcast arrays.
fn zip<T: Element>(a: &DenseND<T>, b: &DenseND<T>, f: fn(T, T) -> T) -> PhiResult<DenseND<T>> {
    Ok(a.zip_with(b, |x, y| f(*x, *y))?)
}

pub(crate) fn combine<T: Element>(
    op: ArithOp,
    lhs: &IntervalRef<'_, T>,
    rhs: &IntervalRef<'_, T>,
) -> PhiResult<Interval<T>> {
    ensure_broadcastable(lhs.shape(), rhs.shape())?;

    let (l1, h1) = (lhs.lo.as_ref(), lhs.hi.as_ref());
    let (l2, h2) = (rhs.lo.as_ref(), rhs.hi.as_ref());

    let interval = match op {
        ArithOp::Add => Interval {
            data: zip(&lhs.data, &rhs.data, T::bounded_add)?,
            lo: zip(l1, l2, T::bounded_add)?,
            hi: zip(h1, h2, T::bounded_add)?,
        },
        ArithOp::Sub => Interval {
            data: zip(&lhs.data, &rhs.data, T::bounded_sub)?,
            lo: zip(l1, h2, T::bounded_sub)?,
            hi: zip(h1, l2, T::bounded_sub)?,
        },
        ArithOp::Mul => {
            let corners = [
                zip(l1, l2, T::bounded_mul)?,
                zip(l1, h2, T::bounded_mul)?,
                zip(h1, l2, T::bounded_mul)?,
                zip(h1, h2, T::bounded_mul)?,
            ];
            let mut lo = corners[0].clone();
            let mut hi = corners[0].clone();
            for corner in &corners[1..] {
                lo = lo.minimum(corner)?;
                hi = hi.maximum(corner)?;
            }
            Interval {
                data: zip(&lhs.data, &rhs.data, T::bounded_mul)?,
                lo,
                hi,
            }
        }
    };
    Ok(interval)
}

/// Combine with a public scalar. Infallible: a scalar broadcasts against anything.
pub(crate) fn with_scalar<T: Element>(
    op: ArithOp,
    data: &DenseND<T>,
    lo: &DenseND<T>,
    hi: &DenseND<T>,
    value: T,
) -> Interval<T> {
    let by = move |f: fn(T, T) -> T| move |v: T| f(v, value);
    match op {
        ArithOp::Add => Interval {
            data: data.map(by(T::bounded_add)),
            lo: lo.map(by(T::bounded_add)),
            hi: hi.map(by(T::bounded_add)),
        },
        ArithOp::Sub => Interval {
            data: data.map(by(T::bounded_sub)),
            lo: lo.map(by(T::bounded_sub)),
            hi: hi.map(by(T::bounded_sub)),
        },
        ArithOp::Mul if value < T::zero() => Interval {
            data: data.map(by(T::bounded_mul)),
            lo: hi.map(by(T::bounded_mul)),
            hi: lo.map(by(T::bounded_mul)),
        },
        ArithOp::Mul => Interval {
            data: data.map(by(T::bounded_mul)),
            lo: lo.map(by(T::bounded_mul)),
            hi: hi.map(by(T::bounded_mul)),
        },
    }
}

/// Elementwise comparison; the result is a mask bounded by `[false, true]`.
pub(crate) fn compare<T: Element>(
    op: CmpOp,
    lhs: &IntervalRef<'_, T>,
    rhs: &IntervalRef<'_, T>,
) -> PhiResult<Interval<bool>> {
    ensure_broadcastable(lhs.shape(), rhs.shape())?;
    let data = lhs.data.zip_with(rhs.data.as_ref(), |a, b| op.apply(a, b))?;
    Ok(boolean(data))
}

/// Wrap a mask with the trivial boolean bounds.
pub(crate) fn boolean(data: DenseND<bool>) -> Interval<bool> {
    let lo = data.full_like(false);
    let hi = data.full_like(true);
    Interval { data, lo, hi }
}

pub(crate) fn negate<T: Element>(
    data: &DenseND<T>,
    lo: &DenseND<T>,
    hi: &DenseND<T>,
) -> Interval<T> {
    Interval {
        data: data.map(T::bounded_neg),
        lo: hi.map(T::bounded_neg),
        hi: lo.map(T::bounded_neg),
    }
}

/// Clamp values and both bound arrays with the same limits.
///
/// Clamping is monotone, so `lo <= data <= hi` survives, including the
/// inverted-range case where everything collapses onto `high`.
pub(crate) fn clip<T: Element>(
    data: &DenseND<T>,
    lo: &DenseND<T>,
    hi: &DenseND<T>,
    low: Option<T>,
    high: Option<T>,
) -> Interval<T> {
    Interval {
        data: data.clip(low, high),
        lo: lo.clip(low, high),
        hi: hi.clip(low, high),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arr(values: &[f64]) -> DenseND<f64> {
        DenseND::from_vec(values.to_vec(), &[values.len()]).unwrap()
    }

    #[test]
    fn test_sub_crosses_bounds() {
        let (d1, l1, h1) = (arr(&[1.0]), arr(&[0.0]), arr(&[2.0]));
        let (d2, l2, h2) = (arr(&[5.0]), arr(&[4.0]), arr(&[10.0]));
        let out = combine(
            ArithOp::Sub,
            &IntervalRef::bounded(&d1, &l1, &h1),
            &IntervalRef::bounded(&d2, &l2, &h2),
        )
        .unwrap();
        assert_eq!(out.data.to_vec(), vec![-4.0]);
        assert_eq!(out.lo.to_vec(), vec![-10.0]);
        assert_eq!(out.hi.to_vec(), vec![-2.0]);
    }

    #[test]
    fn test_mul_by_negative_scalar_swaps() {
        let (d, l, h) = (arr(&[1.0, -3.0]), arr(&[-1.0, -5.0]), arr(&[2.0, 0.0]));
        let out = combine(
            ArithOp::Mul,
            &IntervalRef::bounded(&d, &l, &h),
            &IntervalRef::scalar(-3.0),
        )
        .unwrap();
        assert_eq!(out.data.to_vec(), vec![-3.0, 9.0]);
        assert_eq!(out.lo.to_vec(), vec![-6.0, 0.0]);
        assert_eq!(out.hi.to_vec(), vec![3.0, 15.0]);
    }

    #[test]
    fn test_mul_mixed_signs_four_corners() {
        let (d1, l1, h1) = (arr(&[1.0]), arr(&[-2.0]), arr(&[3.0]));
        let (d2, l2, h2) = (arr(&[-1.0]), arr(&[-4.0]), arr(&[1.0]));
        let out = combine(
            ArithOp::Mul,
            &IntervalRef::bounded(&d1, &l1, &h1),
            &IntervalRef::bounded(&d2, &l2, &h2),
        )
        .unwrap();
        assert_eq!(out.lo.to_vec(), vec![-12.0]);
        assert_eq!(out.hi.to_vec(), vec![8.0]);
    }

    #[test]
    fn test_not_broadcastable() {
        let a = arr(&[1.0, 2.0, 3.0]);
        let b = arr(&[1.0, 2.0]);
        let err = combine(ArithOp::Add, &IntervalRef::exact(&a), &IntervalRef::exact(&b))
            .unwrap_err();
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn test_with_scalar_matches_combine() {
        let (d, l, h) = (arr(&[1.0, -3.0]), arr(&[-1.0, -5.0]), arr(&[2.0, 0.0]));
        for op in [ArithOp::Add, ArithOp::Sub, ArithOp::Mul] {
            let fast = with_scalar(op, &d, &l, &h, -2.0);
            let general =
                combine(op, &IntervalRef::bounded(&d, &l, &h), &IntervalRef::scalar(-2.0))
                    .unwrap();
            assert_eq!(fast.data, general.data, "{op}");
            assert_eq!(fast.lo, general.lo, "{op}");
            assert_eq!(fast.hi, general.hi, "{op}");
        }
    }

    #[test]
    fn test_negate_swaps_bounds() {
        let out = negate(&arr(&[1.0]), &arr(&[-2.0]), &arr(&[5.0]));
        assert_eq!(out.data.to_vec(), vec![-1.0]);
        assert_eq!(out.lo.to_vec(), vec![-5.0]);
        assert_eq!(out.hi.to_vec(), vec![2.0]);
    }

    #[test]
    fn test_compare_bounds_are_trivial() {
        let a = arr(&[1.0, 5.0]);
        let out = compare(CmpOp::Gt, &IntervalRef::exact(&a), &IntervalRef::scalar(2.0)).unwrap();
        assert_eq!(out.data.to_vec(), vec![false, true]);
        assert!(!out.lo.any());
        assert!(out.hi.all());
    }

    #[test]
    fn test_integer_extremes_stay_ordered() {
        let (d, l, h) = (
            DenseND::from_vec(vec![0i32, 7, -7], &[3]).unwrap(),
            DenseND::from_elem(&[3], i32::MIN),
            DenseND::from_elem(&[3], i32::MAX),
        );
        let wide = IntervalRef::bounded(&d, &l, &h);

        let neg = negate(&d, &l, &h);
        assert_eq!(neg.lo.to_vec(), vec![-i32::MAX; 3]);
        assert_eq!(neg.hi.to_vec(), vec![i32::MAX; 3]);
        assert!(ensure_within(&neg.data, &neg.lo, &neg.hi).is_ok());

        for value in [2, -2] {
            let out = with_scalar(ArithOp::Mul, &d, &l, &h, value);
            assert!(ensure_within(&out.data, &out.lo, &out.hi).is_ok(), "* {value}");
        }
        for op in [ArithOp::Add, ArithOp::Sub, ArithOp::Mul] {
            let out = combine(op, &wide, &wide).unwrap();
            assert_eq!(out.lo.to_vec(), vec![i32::MIN; 3], "{op}");
            assert_eq!(out.hi.to_vec(), vec![i32::MAX; 3], "{op}");
            assert!(ensure_within(&out.data, &out.lo, &out.hi).is_ok(), "{op}");
        }
    }
}
