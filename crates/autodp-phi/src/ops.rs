//! Operator tags for binary dispatch.

use std::fmt;

/// Arithmetic operators. Across different owners these escalate instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
}

impl ArithOp {
    /// Short operator name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            ArithOp::Add => "add",
            ArithOp::Sub => "sub",
            ArithOp::Mul => "mul",
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Elementwise comparison operators. Across different owners these fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    /// Short operator name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            CmpOp::Eq => "eq",
            CmpOp::Ne => "ne",
            CmpOp::Lt => "lt",
            CmpOp::Le => "le",
            CmpOp::Gt => "gt",
            CmpOp::Ge => "ge",
        }
    }

    /// Evaluate the comparison on a pair of elements
    pub fn apply<T: PartialOrd>(self, a: &T, b: &T) -> bool {
        match self {
            CmpOp::Eq => a == b,
            CmpOp::Ne => a != b,
            CmpOp::Lt => a < b,
            CmpOp::Le => a <= b,
            CmpOp::Gt => a > b,
            CmpOp::Ge => a >= b,
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named comparison shortcuts over a type's `compare(op, other)`.
macro_rules! comparison_methods {
    ($out:ty) => {
        /// Elementwise `==`
        pub fn eq_elementwise<'a>(
            &'a self,
            other: impl Into<$crate::operand::Operand<'a, T>>,
        ) -> $crate::error::PhiResult<$out> {
            self.compare($crate::ops::CmpOp::Eq, other)
        }

        /// Elementwise `!=`
        pub fn ne_elementwise<'a>(
            &'a self,
            other: impl Into<$crate::operand::Operand<'a, T>>,
        ) -> $crate::error::PhiResult<$out> {
            self.compare($crate::ops::CmpOp::Ne, other)
        }

        /// Elementwise `<`
        pub fn lt<'a>(
            &'a self,
            other: impl Into<$crate::operand::Operand<'a, T>>,
        ) -> $crate::error::PhiResult<$out> {
            self.compare($crate::ops::CmpOp::Lt, other)
        }

        /// Elementwise `<=`
        pub fn le<'a>(
            &'a self,
            other: impl Into<$crate::operand::Operand<'a, T>>,
        ) -> $crate::error::PhiResult<$out> {
            self.compare($crate::ops::CmpOp::Le, other)
        }

        /// Elementwise `>`
        pub fn gt<'a>(
            &'a self,
            other: impl Into<$crate::operand::Operand<'a, T>>,
        ) -> $crate::error::PhiResult<$out> {
            self.compare($crate::ops::CmpOp::Gt, other)
        }

        /// Elementwise `>=`
        pub fn ge<'a>(
            &'a self,
            other: impl Into<$crate::operand::Operand<'a, T>>,
        ) -> $crate::error::PhiResult<$out> {
            self.compare($crate::ops::CmpOp::Ge, other)
        }
    };
}

/// `try_add` / `try_sub` / `try_mul` over a type's `arith(op, other)`.
macro_rules! arithmetic_methods {
    ($out:ty) => {
        /// Elementwise `+`, escalating across owners
        pub fn try_add<'a>(
            &'a self,
            other: impl Into<$crate::operand::Operand<'a, T>>,
        ) -> $crate::error::PhiResult<$out> {
            self.arith($crate::ops::ArithOp::Add, other)
        }

        /// Elementwise `-`, escalating across owners
        pub fn try_sub<'a>(
            &'a self,
            other: impl Into<$crate::operand::Operand<'a, T>>,
        ) -> $crate::error::PhiResult<$out> {
            self.arith($crate::ops::ArithOp::Sub, other)
        }

        /// Elementwise `*`, escalating across owners
        pub fn try_mul<'a>(
            &'a self,
            other: impl Into<$crate::operand::Operand<'a, T>>,
        ) -> $crate::error::PhiResult<$out> {
            self.arith($crate::ops::ArithOp::Mul, other)
        }
    };
}

/// `Neg` and scalar `Add`/`Sub`/`Mul` for owned and borrowed tensors.
///
/// Expects `scalar_op(&self, ArithOp, T) -> Self` and `Neg for &Self`.
macro_rules! scalar_std_ops {
    ($tensor:ident) => {
        impl<T: $crate::element::Element> std::ops::Neg for $tensor<T> {
            type Output = $tensor<T>;
            fn neg(self) -> $tensor<T> {
                -&self
            }
        }

        impl<T: $crate::element::Element> std::ops::Add<T> for &$tensor<T> {
            type Output = $tensor<T>;
            fn add(self, value: T) -> $tensor<T> {
                self.scalar_op($crate::ops::ArithOp::Add, value)
            }
        }

        impl<T: $crate::element::Element> std::ops::Sub<T> for &$tensor<T> {
            type Output = $tensor<T>;
            fn sub(self, value: T) -> $tensor<T> {
                self.scalar_op($crate::ops::ArithOp::Sub, value)
            }
        }

        impl<T: $crate::element::Element> std::ops::Mul<T> for &$tensor<T> {
            type Output = $tensor<T>;
            fn mul(self, value: T) -> $tensor<T> {
                self.scalar_op($crate::ops::ArithOp::Mul, value)
            }
        }

        impl<T: $crate::element::Element> std::ops::Add<T> for $tensor<T> {
            type Output = $tensor<T>;
            fn add(self, value: T) -> $tensor<T> {
                &self + value
            }
        }

        impl<T: $crate::element::Element> std::ops::Sub<T> for $tensor<T> {
            type Output = $tensor<T>;
            fn sub(self, value: T) -> $tensor<T> {
                &self - value
            }
        }

        impl<T: $crate::element::Element> std::ops::Mul<T> for $tensor<T> {
            type Output = $tensor<T>;
            fn mul(self, value: T) -> $tensor<T> {
                &self * value
            }
        }
    };
}

pub(crate) use arithmetic_methods;
pub(crate) use comparison_methods;
pub(crate) use scalar_std_ops;
