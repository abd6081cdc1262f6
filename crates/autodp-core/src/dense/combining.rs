//! Tensor combining operations
//!
//! Stacking equal-shaped tensors along a new leading axis, used to expose a
//! batch of per-row tensors as one array.

use super::types::DenseND;

impl<T> DenseND<T>
where
    T: Clone,
{
    /// Stack tensors of identical shape along a new leading axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or the shapes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use autodp_core::DenseND;
    ///
    /// let a = DenseND::<f64>::ones(&[2, 3]);
    /// let b = DenseND::<f64>::zeros(&[2, 3]);
    ///
    /// let stacked = DenseND::stack_rows(&[a, b]).unwrap();
    /// assert_eq!(stacked.shape(), &[2, 2, 3]);
    /// ```
    pub fn stack_rows(tensors: &[Self]) -> anyhow::Result<Self> {
        let first = tensors
            .first()
            .ok_or_else(|| anyhow::anyhow!("Cannot stack empty tensor list"))?;

        let reference_shape = first.shape();
        for (i, tensor) in tensors.iter().enumerate().skip(1) {
            if tensor.shape() != reference_shape {
                anyhow::bail!(
                    "Tensor {} has shape {:?}, expected {:?}",
                    i,
                    tensor.shape(),
                    reference_shape
                );
            }
        }

        let mut shape = Vec::with_capacity(reference_shape.len() + 1);
        shape.push(tensors.len());
        shape.extend_from_slice(reference_shape);

        let values: Vec<T> = tensors.iter().flat_map(|t| t.data.iter().cloned()).collect();
        Self::from_vec(values, &shape)
    }
}
