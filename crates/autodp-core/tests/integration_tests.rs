//! Integration tests for autodp-core
//!
//! These tests exercise the array capability the bounded-tensor layer relies on:
//! broadcasting arithmetic, shaped comparison masks, clipping and stacking.

use autodp_core::{broadcast_shape, shapes_broadcastable, DenseND};

#[test]
fn test_interval_products_via_broadcasting() {
    // Four-corner products of an interval against a negative scalar
    let lo = DenseND::from_vec(vec![-1.0, 0.0, 2.0], &[3]).unwrap();
    let hi = DenseND::from_vec(vec![1.0, 3.0, 4.0], &[3]).unwrap();
    let c = DenseND::scalar(-2.0);

    let p1 = lo.try_mul(&c).unwrap();
    let p2 = hi.try_mul(&c).unwrap();
    let new_lo = p1.minimum(&p2).unwrap();
    let new_hi = p1.maximum(&p2).unwrap();

    assert_eq!(new_lo.to_vec(), vec![-2.0, -6.0, -8.0]);
    assert_eq!(new_hi.to_vec(), vec![2.0, 0.0, -4.0]);
}

#[test]
fn test_row_broadcast_against_batch() {
    let batch = DenseND::from_vec((0..12).map(|x| x as f64).collect(), &[3, 4]).unwrap();
    let row = DenseND::from_vec(vec![1.0, 1.0, 1.0, 1.0], &[4]).unwrap();

    let shifted = batch.try_add(&row).unwrap();
    assert_eq!(shifted.shape(), &[3, 4]);
    assert!(!shifted.eq_elementwise(&batch).unwrap().any());
    assert!(shifted.gt(&batch).unwrap().all());
}

#[test]
fn test_non_broadcastable_shapes() {
    assert!(!shapes_broadcastable(&[5, 5], &[4, 4]));
    assert_eq!(broadcast_shape(&[5, 5], &[4, 4]), None);

    let a = DenseND::<f64>::zeros(&[5, 5]);
    let b = DenseND::<f64>::zeros(&[4, 4]);
    assert!(a.try_mul(&b).is_err());
    assert!(a.lt(&b).is_err());
}

#[test]
fn test_stack_and_compare_rows() {
    let rows: Vec<DenseND<i64>> = (0..3)
        .map(|i| DenseND::from_elem(&[2, 2], i))
        .collect();
    let stacked = DenseND::stack_rows(&rows).unwrap();
    assert_eq!(stacked.shape(), &[3, 2, 2]);
    assert_eq!(stacked.eq_scalar(2).count_true(), 4);
}

#[test]
fn test_clip_then_reduce() {
    let data = DenseND::<i64>::random_int(&[6, 6], -2, 4).unwrap();
    let clipped = data.clip(Some(0), Some(1));
    assert!(clipped.gte_scalar(0).all());
    assert!(clipped.lte_scalar(1).all());

    let collapsed = data.clip(Some(3), Some(-1));
    assert!(collapsed.eq_scalar(-1).all());
}
