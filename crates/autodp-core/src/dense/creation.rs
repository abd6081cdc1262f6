//! Tensor creation and initialization methods
//!
//! Random initialization used by fixtures and benchmarks.

use super::types::DenseND;
use scirs2_core::numeric::NumCast;

impl<T> DenseND<T>
where
    T: Clone + NumCast,
{
    /// Create a tensor with random values from a uniform distribution
    ///
    /// Uses scirs2_core::random for RNG (never rand/rand_distr directly)
    ///
    /// # Arguments
    ///
    /// * `shape` - The shape of the tensor
    /// * `low` - Lower bound (inclusive)
    /// * `high` - Upper bound (exclusive)
    ///
    /// # Examples
    ///
    /// ```
    /// use autodp_core::dense::DenseND;
    ///
    /// let tensor = DenseND::<f64>::random_uniform(&[2, 3], 0.0, 1.0).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// assert!(tensor.iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn random_uniform(shape: &[usize], low: f64, high: f64) -> anyhow::Result<Self> {
        use scirs2_core::random::quick::random_f64;
        let total: usize = shape.iter().product();
        let range = high - low;
        let data = (0..total)
            .map(|_| {
                let sample = low + random_f64() * range;
                T::from(sample)
                    .ok_or_else(|| anyhow::anyhow!("Sample {} does not fit element type", sample))
            })
            .collect::<anyhow::Result<Vec<T>>>()?;
        Self::from_vec(data, shape)
    }

    /// Create a tensor of random integers drawn uniformly from `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is empty or a value does not fit `T`.
    ///
    /// ```
    /// use autodp_core::dense::DenseND;
    ///
    /// let tensor = DenseND::<i64>::random_int(&[4, 4], -100, 100).unwrap();
    /// assert!(tensor.iter().all(|&x| (-100..100).contains(&x)));
    /// ```
    pub fn random_int(shape: &[usize], low: i64, high: i64) -> anyhow::Result<Self> {
        use scirs2_core::random::quick::random_f64;
        if high <= low {
            anyhow::bail!("Empty integer range [{}, {})", low, high);
        }
        let total: usize = shape.iter().product();
        let span = (high - low) as f64;
        let data = (0..total)
            .map(|_| {
                let offset = ((random_f64() * span).floor() as i64).min(high - low - 1);
                let value = low + offset;
                T::from(value)
                    .ok_or_else(|| anyhow::anyhow!("Value {} does not fit element type", value))
            })
            .collect::<anyhow::Result<Vec<T>>>()?;
        Self::from_vec(data, shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_int_range_and_shape() {
        let t = DenseND::<i32>::random_int(&[5, 7], -2, 4).unwrap();
        assert_eq!(t.shape(), &[5, 7]);
        assert!(t.iter().all(|&x| (-2..4).contains(&x)));
    }

    #[test]
    fn test_random_int_as_float() {
        let t = DenseND::<f64>::random_int(&[10], 4, 7).unwrap();
        assert!(t.iter().all(|&x| x.fract() == 0.0 && (4.0..7.0).contains(&x)));
    }

    #[test]
    fn test_random_int_empty_range() {
        assert!(DenseND::<i64>::random_int(&[2], 3, 3).is_err());
    }

    #[test]
    fn test_random_uniform_bounds() {
        let t = DenseND::<f64>::random_uniform(&[100], -1.0, 1.0).unwrap();
        assert!(t.iter().all(|&x| (-1.0..1.0).contains(&x)));
    }
}
