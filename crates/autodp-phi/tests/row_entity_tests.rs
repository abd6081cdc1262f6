//! Integration tests for row-entity tensors
//!
//! Rows hold random integer data in `[-100, 100)` with bounds `[-100, 100]`,
//! owned either by one entity per tensor or mixed.

use autodp_core::{shapes_broadcastable, DenseND};
use autodp_phi::{Entity, PhiConfig, PhiError, RowEntityTensor, RowSlot, SingleEntityTensor};

const HIGH: i64 = 100;
const ROWS: usize = 4;
const DIMS: usize = 5;

fn random_row(entity: &Entity, shape: &[usize]) -> SingleEntityTensor<i64> {
    let data = DenseND::random_int(shape, -HIGH, HIGH).unwrap();
    SingleEntityTensor::new(
        data,
        DenseND::from_elem(shape, -HIGH),
        DenseND::from_elem(shape, HIGH),
        entity.clone(),
    )
    .unwrap()
}

fn rows_for(entity: &Entity) -> Vec<SingleEntityTensor<i64>> {
    (0..ROWS).map(|_| random_row(entity, &[DIMS, DIMS])).collect()
}

/// `ROWS` rows of length `DIMS` with values in `[low, high)`, bounds `[low, high - 1]`.
fn ranged(low: i64, high: i64, entity: &Entity) -> RowEntityTensor<i64> {
    let rows = (0..ROWS).map(|_| {
        SingleEntityTensor::new(
            DenseND::random_int(&[DIMS], low, high).unwrap(),
            DenseND::from_elem(&[DIMS], low),
            DenseND::from_elem(&[DIMS], high - 1),
            entity.clone(),
        )
        .unwrap()
    });
    RowEntityTensor::new_unchecked(rows).unwrap()
}

#[test]
fn test_eq_identical_tensors() {
    let ishan = Entity::new("Ishan");
    let rows = rows_for(&ishan);
    let first = RowEntityTensor::new(rows.clone()).unwrap();
    let second = RowEntityTensor::new(rows).unwrap();

    assert_eq!(first, second);
    let mask = first.eq_elementwise(&second).unwrap();
    assert!(mask.all());
    assert_eq!(mask.shape(), first.shape());
}

#[test]
fn test_eq_against_single_row() {
    let ishan = Entity::new("Ishan");
    let sept = random_row(&ishan, &[DIMS, DIMS]);
    let rept = RowEntityTensor::from_single(sept.clone());

    // Row-entity on the left keeps the row-entity representation
    let mask: RowEntityTensor<bool> = rept.eq_elementwise(&sept).unwrap();
    assert!(mask.all());
    assert_eq!(rept.rows()[0].as_single(), Some(&sept));

    // ...and a single-entity left side dispatches row-wise too
    assert!(sept.eq_elementwise(&rept).unwrap().is_row());
}

#[test]
fn test_eq_across_entities_refused() {
    let data = DenseND::random_int(&[DIMS, DIMS], -HIGH, HIGH).unwrap();
    let make = |entity: Entity| {
        SingleEntityTensor::new(
            data.clone(),
            DenseND::from_elem(&[DIMS, DIMS], -HIGH),
            DenseND::from_elem(&[DIMS, DIMS], HIGH),
            entity,
        )
        .unwrap()
    };
    let ishan = RowEntityTensor::from_single(make(Entity::new("Ishan")));
    let trask = RowEntityTensor::from_single(make(Entity::new("Trask")));

    let err = ishan.eq_elementwise(&trask).unwrap_err();
    assert!(err.is_not_comparable());
}

#[test]
fn test_eq_after_shift() {
    let ishan = Entity::new("Ishan");
    let tensor1 = RowEntityTensor::new(rows_for(&ishan)).unwrap();
    let tensor2 = &tensor1 + 1;

    assert_eq!(tensor2.shape(), tensor1.shape());
    assert!(tensor2.rows()[0].is_single());

    let mask = tensor2.eq_elementwise(&tensor1).unwrap();
    for (i, row) in mask.iter().enumerate() {
        assert!(!row.any(), "shifted row {i} compared equal");
    }
    assert!(tensor2.ne_elementwise(&tensor1).unwrap().all());
}

#[test]
fn test_row_count_mismatch() {
    let ishan = Entity::new("Ishan");
    let rows = rows_for(&ishan);
    let tensor1 = RowEntityTensor::new(rows.clone()).unwrap();
    let doubled = RowEntityTensor::new(rows.iter().chain(&rows).cloned()).unwrap();
    assert_ne!(doubled.shape(), tensor1.shape());

    let err = doubled.eq_elementwise(&tensor1).unwrap_err();
    assert!(err.is_shape_mismatch());
    let err = doubled.try_add(&tensor1).unwrap_err();
    assert!(matches!(
        err,
        PhiError::ShapeMismatch(autodp_phi::ShapeMismatchError::RowCount {
            expected: 8,
            got: 4
        })
    ));
}

#[test]
fn test_mixed_row_shapes_rejected() {
    let ishan = Entity::new("Ishan");
    let rows = vec![random_row(&ishan, &[3, 3]), random_row(&ishan, &[4, 4])];

    let err = RowEntityTensor::new(rows.clone()).unwrap_err();
    assert!(err.is_shape_mismatch());

    let lax = RowEntityTensor::with_config(rows, &PhiConfig::new().with_check_shape(false));
    assert!(lax.is_ok());
}

#[test]
fn test_add_simple_types() {
    let ishan = Entity::new("Ishan");
    let tensor = RowEntityTensor::new(rows_for(&ishan)).unwrap();

    let result = tensor.try_add(42i64).unwrap();
    for index in [0, -1] {
        let expected = tensor.get(index).unwrap().as_single().unwrap() + 42;
        assert_eq!(result.get(index).unwrap().as_single(), Some(&expected));
    }

    let offsets = DenseND::random_int(&[DIMS, DIMS], 0, 10).unwrap();
    let result = tensor.try_add(&offsets).unwrap();
    assert_eq!(result.shape(), tensor.shape());
    assert!(result.rows().iter().all(RowSlot::is_single));
}

#[test]
fn test_add_row_entities() {
    let ishan = Entity::new("Ishan");
    let tensor1 = RowEntityTensor::new(rows_for(&ishan)).unwrap();
    let tensor2 = tensor1.try_add(&tensor1).unwrap();
    assert_eq!(tensor2.shape(), tensor1.shape());
    assert_eq!(tensor2, tensor1.try_add(&tensor1).unwrap());
    assert_eq!(tensor2.min_vals().unwrap(), &tensor1.min_vals().unwrap() * 2);
    assert_eq!(tensor2.max_vals().unwrap(), &tensor1.max_vals().unwrap() * 2);

    let offset = 37i64;
    let tensor3 = tensor2.try_add(&tensor2).unwrap() + offset;
    let back = tensor3.try_sub(&tensor2).unwrap().try_sub(&tensor2).unwrap();
    assert!(back.eq_elementwise(offset).unwrap().all());
}

#[test]
fn test_add_sub_equivalence() {
    let ishan = Entity::new("Ishan");
    let tensor1 = RowEntityTensor::new(rows_for(&ishan)).unwrap();
    let tensor2 = &tensor1 * 2;
    assert_eq!(tensor2.shape(), tensor1.shape());

    assert_eq!(&tensor1 - 5, &tensor1 + (5 * -1));
    let lhs = tensor2.try_sub(&tensor1).unwrap();
    let rhs = tensor2.try_add(&(&tensor1 * -1)).unwrap();
    assert!(lhs.eq_elementwise(&rhs).unwrap().all());
}

#[test]
fn test_cross_entity_arithmetic_escalates() {
    let (ishan, trask) = (Entity::new("Ishan"), Entity::new("Trask"));
    let tensor1 = RowEntityTensor::new(rows_for(&ishan)).unwrap();
    let tensor2 = RowEntityTensor::new(rows_for(&trask)).unwrap();

    for result in [
        tensor2.try_add(&tensor1).unwrap(),
        tensor2.try_sub(&tensor1).unwrap(),
        tensor1.try_mul(&tensor2).unwrap(),
    ] {
        assert_eq!(result.len(), ROWS);
        for row in &result {
            let gamma = row.as_gamma().expect("cross-entity row should escalate");
            assert!(gamma.contains(&ishan) && gamma.contains(&trask));
            assert!(row.entity().is_none());
        }
    }
}

#[test]
fn test_heterogeneous_rows() {
    let (ishan, trask) = (Entity::new("Ishan"), Entity::new("Trask"));
    let left = RowEntityTensor::new([
        random_row(&ishan, &[DIMS]),
        random_row(&ishan, &[DIMS]),
        random_row(&ishan, &[DIMS]),
    ])
    .unwrap();
    let right = RowEntityTensor::new([
        random_row(&ishan, &[DIMS]),
        random_row(&trask, &[DIMS]),
        random_row(&ishan, &[DIMS]),
    ])
    .unwrap();

    let sum = left.try_add(&right).unwrap();
    let kinds: Vec<bool> = sum.iter().map(RowSlot::is_gamma).collect();
    assert_eq!(kinds, vec![false, true, false]);
    assert_eq!(sum.entities(), vec![ishan, trask]);

    // A gamma row cannot take part in an owner-sensitive comparison
    assert!(sum.eq_elementwise(&left).unwrap_err().is_not_comparable());
    // ...but can still be compared against public values
    assert!(!sum.gt(1000i64).unwrap().any());
}

#[test]
fn test_mul_simple() {
    let ishan = Entity::new("Ishan");
    let tensor = RowEntityTensor::new(rows_for(&ishan)).unwrap();
    let output = &tensor * 5;

    assert_eq!(output.max_vals().unwrap(), &tensor.max_vals().unwrap() * 5);
    assert_eq!(output.min_vals().unwrap(), &tensor.min_vals().unwrap() * 5);
    assert_eq!(output.shape(), tensor.shape());

    let negated = &tensor * -5;
    assert_eq!(negated.min_vals().unwrap(), &tensor.max_vals().unwrap() * -5);
}

#[test]
fn test_mul_single_entity() {
    let ishan = Entity::new("Ishan");
    let rept = RowEntityTensor::new(rows_for(&ishan)).unwrap();
    let shape = rept.shape();
    let row_shape = &shape[1..];

    for shape in [vec![DIMS, DIMS], vec![DIMS], vec![1, DIMS], vec![DIMS + 1, 2]] {
        let sept = random_row(&ishan, &shape);
        let output = rept.try_mul(&sept);
        if shapes_broadcastable(&shape, row_shape) {
            let output = output.unwrap();
            assert_eq!(output.len(), ROWS);
            assert!(output.rows().iter().all(RowSlot::is_single));
        } else {
            assert!(output.unwrap_err().is_shape_mismatch());
        }
    }
}

#[test]
fn test_mul_single_entity_other_owner() {
    let (ishan, trask) = (Entity::new("Ishan"), Entity::new("Trask"));
    let rept = RowEntityTensor::new(rows_for(&ishan)).unwrap();
    let sept = random_row(&trask, &[DIMS, DIMS]);

    let output = rept.try_mul(&sept).unwrap();
    assert!(output.rows().iter().all(RowSlot::is_gamma));

    // Comparing against a row owned by nobody in the tensor is refused
    assert!(rept.eq_elementwise(&sept).unwrap_err().is_not_comparable());
}

#[test]
fn test_neg() {
    let ishan = Entity::new("Ishan");
    let tensor = RowEntityTensor::new(rows_for(&ishan)).unwrap();
    let negative = -&tensor;

    assert_eq!(negative.shape(), tensor.shape());
    for (original, negated) in tensor.iter().zip(&negative) {
        assert_eq!(negated, &-original);
        assert_eq!(negated.data(), &(original.data() * -1));
        assert_eq!(negated.min_vals(), &(original.max_vals() * -1));
        assert_eq!(negated.max_vals(), &(original.min_vals() * -1));
    }
    assert_eq!(-negative, tensor);
}

#[test]
fn test_ordering() {
    let ent = Entity::new("test");
    let tensor1 = ranged(-2, 4, &ent);
    let tensor2 = tensor1.clone();
    let tensor3 = ranged(4, 7, &ent);
    let (below, above) = (-5i64, 5i64);

    let all_rows = |mask: RowEntityTensor<bool>| mask.iter().all(RowSlot::all);
    let no_row_all = |mask: RowEntityTensor<bool>| mask.iter().all(|row| !row.all());

    assert!(all_rows(tensor1.le(&tensor2).unwrap()));
    assert!(all_rows(tensor1.le(&tensor3).unwrap()));
    assert!(no_row_all(tensor1.le(below).unwrap()));
    assert!(all_rows(tensor1.le(above).unwrap()));

    assert!(all_rows(tensor1.ge(&tensor2).unwrap()));
    assert!(no_row_all(tensor1.ge(&tensor3).unwrap()));
    assert!(all_rows(tensor1.ge(below).unwrap()));
    assert!(no_row_all(tensor1.ge(above).unwrap()));

    assert!(no_row_all(tensor1.lt(&tensor2).unwrap()));
    assert!(all_rows(tensor1.lt(&tensor3).unwrap()));
    assert!(no_row_all(tensor1.lt(below).unwrap()));
    assert!(all_rows(tensor1.lt(above).unwrap()));

    assert!(no_row_all(tensor1.gt(&tensor2).unwrap()));
    assert!(no_row_all(tensor1.gt(&tensor3).unwrap()));
    assert!(all_rows(tensor1.gt(below).unwrap()));
    assert!(no_row_all(tensor1.gt(above).unwrap()));
}

#[test]
fn test_clip() {
    let tensor = ranged(-2, 4, &Entity::new("test"));
    let (low, high) = (-1i64, 2i64);

    for row in &tensor.clip(Some(low), Some(high)) {
        assert!(row.data().iter().all(|&x| (low..=high).contains(&x)));
    }
    // Inverted range collapses onto the upper argument
    for row in &tensor.clip(Some(high), Some(low)) {
        assert!(row.data().iter().all(|&x| x == low));
    }
    for row in &tensor.clip(Some(low), None) {
        assert!(row.data().iter().all(|&x| x >= low));
    }
    assert!(tensor.clip(Some(high), Some(low)).validate_bounds().is_ok());
}

#[test]
fn test_and_or() {
    let ishan = Entity::new("Ishan");
    let rows = (0..ROWS).map(|i| {
        let shape = [DIMS, DIMS + i];
        let data = DenseND::random_int(&shape, 0, 2).unwrap();
        SingleEntityTensor::new(
            data,
            DenseND::zeros(&shape),
            DenseND::ones(&shape),
            ishan.clone(),
        )
        .unwrap()
    });
    let tensor = RowEntityTensor::new_unchecked(rows).unwrap();
    let mask = tensor.gt(0i64).unwrap();

    let anded = mask.logical_and(false);
    let ored = mask.logical_or(false);
    for (index, row) in mask.iter().enumerate() {
        let row = row.as_single().unwrap();
        assert_eq!(anded.rows()[index].as_single(), Some(&row.logical_and(false)));
        assert_eq!(ored.rows()[index].as_single(), Some(&row.logical_or(false)));
    }
    assert!(!anded.any());
    assert_eq!(ored, mask);
}

#[test]
fn test_and_or_on_gamma_rows() {
    let (ishan, trask) = (Entity::new("Ishan"), Entity::new("Trask"));
    let left = RowEntityTensor::new([random_row(&ishan, &[DIMS]), random_row(&ishan, &[DIMS])])
        .unwrap();
    let right = RowEntityTensor::new([random_row(&ishan, &[DIMS]), random_row(&trask, &[DIMS])])
        .unwrap();
    let mask = left.try_add(&right).unwrap().ge(-1000i64).unwrap();
    assert!(mask.rows()[1].is_gamma());

    for row in &mask {
        let anded = row.logical_and(false);
        let ored = row.logical_or(true);
        assert_eq!(anded.is_gamma(), row.is_gamma());
        assert_eq!(anded.entities(), row.entities());
        assert!(!anded.any());
        assert!(ored.all());
        assert_eq!(&row.logical_and(true), row);
    }
}

#[test]
fn test_index_out_of_bounds() {
    let tensor = RowEntityTensor::new(rows_for(&Entity::new("Ishan"))).unwrap();
    assert!(tensor.row(-(ROWS as isize)).is_ok());
    assert!(matches!(
        tensor.row(ROWS as isize),
        Err(PhiError::IndexOutOfBounds { .. })
    ));
}
