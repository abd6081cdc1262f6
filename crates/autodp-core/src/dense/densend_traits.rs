//! # DenseND - Trait Implementations
//!
//! ## Implemented Traits
//!
//! - `Index`
//! - `PartialEq` (same shape and same elements)
//! - `Debug`

use super::types::DenseND;
use scirs2_core::ndarray_ext::IxDyn;
use std::fmt;

impl<T> std::ops::Index<&[usize]> for DenseND<T> {
    type Output = T;
    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}

impl<T: PartialEq> PartialEq for DenseND<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: fmt::Debug> fmt::Debug for DenseND<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseND")
            .field("shape", &self.data.shape())
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = DenseND::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
        let b = DenseND::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
        let c = DenseND::from_vec(vec![1, 2, 3, 4], &[4]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_index() {
        let a = DenseND::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        let idx: &[usize] = &[1, 2];
        assert_eq!(a[idx], 6);
    }
}
