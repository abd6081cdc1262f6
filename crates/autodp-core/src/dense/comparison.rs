//! Comparison and logical operations on tensors
//!
//! Comparisons broadcast like arithmetic and return shaped boolean masks
//! (`DenseND<bool>`). Masks support reductions (`any`, `all`) and logical ops.

use super::types::DenseND;

impl<T> DenseND<T>
where
    T: Clone + PartialOrd,
{
    /// Element-wise equality comparison
    ///
    /// # Examples
    ///
    /// ```
    /// use autodp_core::DenseND;
    ///
    /// let a = DenseND::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let b = DenseND::<f64>::from_vec(vec![1.0, 0.0, 3.0, 0.0], &[2, 2]).unwrap();
    ///
    /// let result = a.eq_elementwise(&b).unwrap();
    /// assert_eq!(result.to_vec(), vec![true, false, true, false]);
    /// ```
    pub fn eq_elementwise(&self, other: &Self) -> anyhow::Result<DenseND<bool>> {
        self.zip_with(other, |a, b| a == b)
    }

    /// Element-wise inequality comparison
    pub fn ne_elementwise(&self, other: &Self) -> anyhow::Result<DenseND<bool>> {
        self.zip_with(other, |a, b| a != b)
    }

    /// Element-wise greater than comparison
    ///
    /// # Examples
    ///
    /// ```
    /// use autodp_core::DenseND;
    ///
    /// let a = DenseND::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let b = DenseND::<f64>::from_vec(vec![2.0, 2.0, 2.0, 5.0], &[2, 2]).unwrap();
    ///
    /// let result = a.gt(&b).unwrap();
    /// assert_eq!(result.to_vec(), vec![false, false, true, false]);
    /// ```
    pub fn gt(&self, other: &Self) -> anyhow::Result<DenseND<bool>> {
        self.zip_with(other, |a, b| a > b)
    }

    /// Element-wise less than comparison
    pub fn lt(&self, other: &Self) -> anyhow::Result<DenseND<bool>> {
        self.zip_with(other, |a, b| a < b)
    }

    /// Element-wise greater than or equal comparison
    pub fn gte(&self, other: &Self) -> anyhow::Result<DenseND<bool>> {
        self.zip_with(other, |a, b| a >= b)
    }

    /// Element-wise less than or equal comparison
    pub fn lte(&self, other: &Self) -> anyhow::Result<DenseND<bool>> {
        self.zip_with(other, |a, b| a <= b)
    }

    /// Mask of elements equal to `value`
    pub fn eq_scalar(&self, value: T) -> DenseND<bool> {
        self.map(|x| x == value)
    }

    /// Mask of elements greater than `threshold`
    ///
    /// ```
    /// use autodp_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let mask = tensor.gt_scalar(2.5);
    /// assert_eq!(mask.to_vec(), vec![false, false, true, true]);
    /// ```
    pub fn gt_scalar(&self, threshold: T) -> DenseND<bool> {
        self.map(|x| x > threshold)
    }

    /// Mask of elements less than `threshold`
    pub fn lt_scalar(&self, threshold: T) -> DenseND<bool> {
        self.map(|x| x < threshold)
    }

    /// Mask of elements greater than or equal to `threshold`
    pub fn gte_scalar(&self, threshold: T) -> DenseND<bool> {
        self.map(|x| x >= threshold)
    }

    /// Mask of elements less than or equal to `threshold`
    pub fn lte_scalar(&self, threshold: T) -> DenseND<bool> {
        self.map(|x| x <= threshold)
    }

}

impl DenseND<bool> {
    /// True if any element is set. An empty mask yields `false`.
    ///
    /// ```
    /// use autodp_core::DenseND;
    ///
    /// let mask = DenseND::from_vec(vec![false, true, false], &[3]).unwrap();
    /// assert!(mask.any());
    /// assert!(!mask.all());
    /// ```
    pub fn any(&self) -> bool {
        self.data.iter().any(|&b| b)
    }

    /// True if every element is set. An empty mask yields `true`.
    pub fn all(&self) -> bool {
        self.data.iter().all(|&b| b)
    }

    /// Number of set elements
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }

    /// Logical negation
    pub fn not(&self) -> Self {
        self.map(|b| !b)
    }

    /// Logical AND with a constant
    pub fn and_scalar(&self, value: bool) -> Self {
        self.map(|b| b && value)
    }

    /// Logical OR with a constant
    pub fn or_scalar(&self, value: bool) -> Self {
        self.map(|b| b || value)
    }

    /// Broadcasting logical AND of two masks
    pub fn and(&self, other: &Self) -> anyhow::Result<Self> {
        self.zip_with(other, |a, b| *a && *b)
    }

    /// Broadcasting logical OR of two masks
    pub fn or(&self, other: &Self) -> anyhow::Result<Self> {
        self.zip_with(other, |a, b| *a || *b)
    }
}
