//! Element-wise operations on tensors
//!
//! Clipping and pointwise extrema. These are the building blocks of interval
//! bound propagation in `autodp-phi`.

use super::types::DenseND;

impl<T> DenseND<T>
where
    T: Clone + PartialOrd,
{
    /// Clip values to `[min_val, max_val]`; `None` leaves that side unbounded.
    ///
    /// The lower limit is applied first and the upper limit second, so an
    /// inverted range (`min_val > max_val`) sets every element to `max_val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use autodp_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let clipped = tensor.clip(Some(2.0), Some(5.0));
    /// assert_eq!(clipped.to_vec(), vec![2.0, 2.0, 3.0, 4.0, 5.0, 5.0]);
    ///
    /// let floor_only = tensor.clip(Some(4.0), None);
    /// assert_eq!(floor_only.to_vec(), vec![4.0, 4.0, 4.0, 4.0, 5.0, 6.0]);
    ///
    /// let inverted = tensor.clip(Some(5.0), Some(2.0));
    /// assert!(inverted.iter().all(|&x| x == 2.0));
    /// ```
    pub fn clip(&self, min_val: Option<T>, max_val: Option<T>) -> Self {
        self.map(|x| {
            let x = match &min_val {
                Some(lo) if x < *lo => lo.clone(),
                _ => x,
            };
            match &max_val {
                Some(hi) if x > *hi => hi.clone(),
                _ => x,
            }
        })
    }

    /// Broadcasting pointwise minimum of two tensors
    ///
    /// ```
    /// use autodp_core::DenseND;
    ///
    /// let a = DenseND::from_vec(vec![1, 5, 3], &[3]).unwrap();
    /// let b = DenseND::from_vec(vec![2, 2, 2], &[3]).unwrap();
    /// assert_eq!(a.minimum(&b).unwrap().to_vec(), vec![1, 2, 2]);
    /// ```
    pub fn minimum(&self, other: &Self) -> anyhow::Result<Self> {
        self.zip_with(other, |a, b| if b < a { b.clone() } else { a.clone() })
    }

    /// Broadcasting pointwise maximum of two tensors
    pub fn maximum(&self, other: &Self) -> anyhow::Result<Self> {
        self.zip_with(other, |a, b| if b > a { b.clone() } else { a.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_both_sides() {
        let t = DenseND::from_vec(vec![-5, -1, 0, 1, 5], &[5]).unwrap();
        assert_eq!(t.clip(Some(-2), Some(2)).to_vec(), vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_clip_unbounded_sides() {
        let t = DenseND::from_vec(vec![-5, 0, 5], &[3]).unwrap();
        assert_eq!(t.clip(None, Some(1)).to_vec(), vec![-5, 0, 1]);
        assert_eq!(t.clip(None, None), t);
    }

    #[test]
    fn test_clip_inverted_range_takes_upper_limit() {
        let t = DenseND::from_vec(vec![-5, 0, 5, 2], &[2, 2]).unwrap();
        let out = t.clip(Some(3), Some(-1));
        assert_eq!(out.to_vec(), vec![-1, -1, -1, -1]);
    }

    #[test]
    fn test_minimum_maximum_broadcast() {
        let a = DenseND::from_vec(vec![1.0, 4.0, -2.0, 8.0], &[2, 2]).unwrap();
        let s = DenseND::scalar(2.0);
        assert_eq!(a.minimum(&s).unwrap().to_vec(), vec![1.0, 2.0, -2.0, 2.0]);
        assert_eq!(a.maximum(&s).unwrap().to_vec(), vec![2.0, 4.0, 2.0, 8.0]);
    }
}
