//! Property-based tests for entity-tagged tensors
//!
//! Uses proptest to check negation, bound soundness, row-wise add/sub
//! equivalence and escalation symmetry on random bounded tensors.

#[cfg(test)]
mod tests {
    use crate::{ArithOp, Entity, RowEntityTensor, SingleEntityTensor};
    use autodp_core::DenseND;
    use proptest::prelude::*;

    // (data, slack below, slack above) per element
    fn bounded_values(len: usize) -> impl Strategy<Value = Vec<(i64, i64, i64)>> {
        prop::collection::vec((-100i64..100, 0i64..20, 0i64..20), len)
    }

    fn build(values: &[(i64, i64, i64)], entity: &Entity) -> SingleEntityTensor<i64> {
        let shape = [values.len()];
        let data = values.iter().map(|(v, _, _)| *v).collect();
        let lo = values.iter().map(|(v, below, _)| v - below).collect();
        let hi = values.iter().map(|(v, _, above)| v + above).collect();
        SingleEntityTensor::new(
            DenseND::from_vec(data, &shape).unwrap(),
            DenseND::from_vec(lo, &shape).unwrap(),
            DenseND::from_vec(hi, &shape).unwrap(),
            entity.clone(),
        )
        .unwrap()
    }

    fn pair() -> impl Strategy<Value = (Vec<(i64, i64, i64)>, Vec<(i64, i64, i64)>)> {
        (1usize..6).prop_flat_map(|len| (bounded_values(len), bounded_values(len)))
    }

    proptest! {
        #[test]
        fn prop_double_negation(values in bounded_values(4)) {
            let t = build(&values, &Entity::new("Ishan"));
            let neg = -&t;
            prop_assert_eq!(neg.min_vals(), &(-t.max_vals()));
            prop_assert_eq!(neg.max_vals(), &(-t.min_vals()));
            prop_assert_eq!(-neg, t);
        }

        #[test]
        fn prop_bounds_stay_sound((a, b) in pair(), same_owner in any::<bool>()) {
            let e1 = Entity::new("Ishan");
            let e2 = if same_owner { e1.clone() } else { Entity::new("Trask") };
            let (x, y) = (build(&a, &e1), build(&b, &e2));

            for op in [ArithOp::Add, ArithOp::Sub, ArithOp::Mul] {
                let out = x.arith(op, &y).unwrap();
                prop_assert_eq!(out.is_single(), same_owner);
                match out {
                    crate::PhiTensor::Single(t) => prop_assert!(t.validate_bounds().is_ok()),
                    crate::PhiTensor::Gamma(t) => prop_assert!(t.validate_bounds().is_ok()),
                    crate::PhiTensor::Row(_) => prop_assert!(false, "unexpected row result"),
                }
            }
        }

        #[test]
        fn prop_scalar_mul_sound(values in bounded_values(5), c in -10i64..10) {
            let t = build(&values, &Entity::new("Ishan"));
            prop_assert!((&t * c).validate_bounds().is_ok());
        }

        #[test]
        fn prop_add_equals_sub_negated(values in bounded_values(3), c in -50i64..50) {
            let e = Entity::new("Ishan");
            let rows = RowEntityTensor::new([
                build(&values, &e),
                build(&values, &e),
            ])
            .unwrap();
            let added = rows.try_add(c).unwrap();
            let subtracted = rows.try_sub(-c).unwrap();
            prop_assert_eq!(added, subtracted);
        }

        #[test]
        fn prop_escalation_symmetric((a, b) in pair()) {
            let (e1, e2) = (Entity::new("Ishan"), Entity::new("Trask"));
            let (x, y) = (build(&a, &e1), build(&b, &e2));
            let xy = x.try_add(&y).unwrap();
            let yx = y.try_add(&x).unwrap();
            prop_assert!(xy.is_gamma() && yx.is_gamma());
            prop_assert_eq!(xy, yx);
        }

        #[test]
        fn prop_clip_keeps_bounds_valid(values in bounded_values(4), low in -50i64..50, high in -50i64..50) {
            let t = build(&values, &Entity::new("Ishan"));
            let clipped = t.clip(Some(low), Some(high));
            prop_assert!(clipped.validate_bounds().is_ok());
        }
    }
}
