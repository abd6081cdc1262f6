//! Broadcasting helpers and broadcasting arithmetic
//!
//! Shapes are aligned from the trailing axis; a dimension of size 1 (or a missing
//! leading dimension) stretches to match the other operand. A 0-d tensor therefore
//! broadcasts against everything.

use super::types::DenseND;
use scirs2_core::numeric::Num;

/// Check whether two shapes are broadcast-compatible.
///
/// # Examples
///
/// ```
/// use autodp_core::shapes_broadcastable;
///
/// assert!(shapes_broadcastable(&[4, 3], &[3]));
/// assert!(shapes_broadcastable(&[4, 3], &[]));
/// assert!(shapes_broadcastable(&[4, 1], &[1, 5]));
/// assert!(!shapes_broadcastable(&[4, 3], &[4]));
/// ```
pub fn shapes_broadcastable(shape1: &[usize], shape2: &[usize]) -> bool {
    let len1 = shape1.len();
    let len2 = shape2.len();
    let max_len = len1.max(len2);
    for i in 0..max_len {
        let dim1 = if i < len1 { shape1[len1 - 1 - i] } else { 1 };
        let dim2 = if i < len2 { shape2[len2 - 1 - i] } else { 1 };
        if dim1 != dim2 && dim1 != 1 && dim2 != 1 {
            return false;
        }
    }
    true
}

/// Compute the broadcast result shape, or `None` if the shapes are incompatible.
///
/// ```
/// use autodp_core::broadcast_shape;
///
/// assert_eq!(broadcast_shape(&[4, 1], &[1, 5]), Some(vec![4, 5]));
/// assert_eq!(broadcast_shape(&[2, 3], &[4]), None);
/// ```
pub fn broadcast_shape(shape1: &[usize], shape2: &[usize]) -> Option<Vec<usize>> {
    if !shapes_broadcastable(shape1, shape2) {
        return None;
    }
    let len1 = shape1.len();
    let len2 = shape2.len();
    let max_len = len1.max(len2);
    let mut result = Vec::with_capacity(max_len);
    for i in 0..max_len {
        let dim1 = if i < len1 { shape1[len1 - 1 - i] } else { 1 };
        let dim2 = if i < len2 { shape2[len2 - 1 - i] } else { 1 };
        result.push(if dim1 == 1 { dim2 } else { dim1 });
    }
    result.reverse();
    Some(result)
}

impl<T> DenseND<T>
where
    T: Clone,
{
    /// Materialize this tensor broadcast to `target_shape`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape cannot be stretched to `target_shape`.
    pub fn broadcast_to(&self, target_shape: &[usize]) -> anyhow::Result<Self> {
        if self.shape() == target_shape {
            return Ok(self.clone());
        }
        let view = self.data.broadcast(target_shape).ok_or_else(|| {
            anyhow::anyhow!(
                "Shape {:?} cannot be broadcast to {:?}",
                self.shape(),
                target_shape
            )
        })?;
        Ok(Self {
            data: view.to_owned(),
        })
    }

    /// Combine two tensors elementwise after broadcasting them to a common shape.
    ///
    /// The output element type is free, so this backs both arithmetic and
    /// comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use autodp_core::DenseND;
    ///
    /// let a = DenseND::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
    /// let b = DenseND::from_vec(vec![2, 3], &[2]).unwrap();
    /// let bigger = a.zip_with(&b, |x, y| x > y).unwrap();
    /// assert_eq!(bigger.to_vec(), vec![false, false, true, true]);
    /// ```
    pub fn zip_with<U, V, F>(&self, other: &DenseND<U>, mut f: F) -> anyhow::Result<DenseND<V>>
    where
        U: Clone,
        V: Clone,
        F: FnMut(&T, &U) -> V,
    {
        let target = broadcast_shape(self.shape(), other.shape()).ok_or_else(|| {
            anyhow::anyhow!(
                "Shapes {:?} and {:?} are not broadcastable",
                self.shape(),
                other.shape()
            )
        })?;

        if self.shape() == other.shape() {
            let values: Vec<V> = self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(a, b))
                .collect();
            return DenseND::from_vec(values, &target);
        }

        let lhs = self
            .data
            .broadcast(target.as_slice())
            .ok_or_else(|| anyhow::anyhow!("Failed to broadcast left operand"))?;
        let rhs = other
            .data
            .broadcast(target.as_slice())
            .ok_or_else(|| anyhow::anyhow!("Failed to broadcast right operand"))?;
        let values: Vec<V> = lhs
            .iter()
            .zip(rhs.iter())
            .map(|(a, b)| f(a, b))
            .collect();
        DenseND::from_vec(values, &target)
    }
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Broadcasting elementwise addition.
    pub fn try_add(&self, other: &Self) -> anyhow::Result<Self> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }

    /// Broadcasting elementwise subtraction.
    pub fn try_sub(&self, other: &Self) -> anyhow::Result<Self> {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }

    /// Broadcasting elementwise (Hadamard) multiplication.
    ///
    /// ```
    /// use autodp_core::DenseND;
    ///
    /// let a = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let col = DenseND::from_vec(vec![10.0, -1.0], &[2, 1]).unwrap();
    /// let out = a.try_mul(&col).unwrap();
    /// assert_eq!(out.to_vec(), vec![10.0, 20.0, -3.0, -4.0]);
    /// ```
    pub fn try_mul(&self, other: &Self) -> anyhow::Result<Self> {
        self.zip_with(other, |a, b| a.clone() * b.clone())
    }
}

// Scalar operators use the element type's own `+ - *`, so integer overflow
// behaves as for plain integers. Saturating bound arithmetic lives in autodp-phi.
impl<T> std::ops::Add<T> for &DenseND<T>
where
    T: Clone + Num,
{
    type Output = DenseND<T>;
    fn add(self, scalar: T) -> Self::Output {
        self.map(|x| x + scalar.clone())
    }
}

impl<T> std::ops::Sub<T> for &DenseND<T>
where
    T: Clone + Num,
{
    type Output = DenseND<T>;
    fn sub(self, scalar: T) -> Self::Output {
        self.map(|x| x - scalar.clone())
    }
}

impl<T> std::ops::Mul<T> for &DenseND<T>
where
    T: Clone + Num,
{
    type Output = DenseND<T>;
    fn mul(self, scalar: T) -> Self::Output {
        self.map(|x| x * scalar.clone())
    }
}

impl<T> std::ops::Neg for &DenseND<T>
where
    T: Clone + std::ops::Neg<Output = T>,
{
    type Output = DenseND<T>;
    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

impl<T> std::ops::Neg for DenseND<T>
where
    T: Clone + std::ops::Neg<Output = T>,
{
    type Output = DenseND<T>;
    fn neg(self) -> Self::Output {
        -&self
    }
}
