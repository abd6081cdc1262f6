//! Numeric element types usable in bounded arithmetic.

use scirs2_core::numeric::Num;
use std::fmt;
use std::ops::Neg;

/// Signed numeric element: `f32`, `f64`, `i8` .. `i64`, `isize`.
///
/// Bound propagation goes through the `bounded_*` methods. They saturate on
/// integers and follow IEEE rules on floats (overflow reaches `±inf`). Both
/// are monotone, so `lo <= data <= hi` holds after every operation even at
/// the edges of the type's range.
pub trait Element:
    Copy + Num + PartialOrd + Neg<Output = Self> + fmt::Debug + Send + Sync + 'static
{
    fn bounded_add(self, rhs: Self) -> Self;
    fn bounded_sub(self, rhs: Self) -> Self;
    fn bounded_mul(self, rhs: Self) -> Self;
    fn bounded_neg(self) -> Self;
}

macro_rules! saturating_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn bounded_add(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }
                #[inline]
                fn bounded_sub(self, rhs: Self) -> Self {
                    self.saturating_sub(rhs)
                }
                #[inline]
                fn bounded_mul(self, rhs: Self) -> Self {
                    self.saturating_mul(rhs)
                }
                #[inline]
                fn bounded_neg(self) -> Self {
                    self.saturating_neg()
                }
            }
        )*
    };
}

macro_rules! float_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn bounded_add(self, rhs: Self) -> Self {
                    self + rhs
                }
                #[inline]
                fn bounded_sub(self, rhs: Self) -> Self {
                    self - rhs
                }
                #[inline]
                fn bounded_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
                #[inline]
                fn bounded_neg(self) -> Self {
                    -self
                }
            }
        )*
    };
}

saturating_element!(i8, i16, i32, i64, isize);
float_element!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_edges_saturate() {
        assert_eq!(i32::MIN.bounded_neg(), i32::MAX);
        assert_eq!(i32::MAX.bounded_mul(2), i32::MAX);
        assert_eq!(i32::MIN.bounded_sub(1), i32::MIN);
        assert_eq!(i64::MAX.bounded_add(1), i64::MAX);
    }

    #[test]
    fn test_float_overflow_reaches_infinity() {
        assert_eq!(f64::MAX.bounded_mul(2.0), f64::INFINITY);
        assert_eq!(1.5f32.bounded_neg(), -1.5);
    }
}
