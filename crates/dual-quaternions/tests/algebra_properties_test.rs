//! Property-based tests for the dual quaternion algebra.
//!
//! Random values mirror the ranges the library was originally exercised with:
//! quaternion and translation components drawn from [-1000, 1000].

use dual_quaternions::*;
use proptest::prelude::*;

const COMPONENT: std::ops::Range<f64> = -1000.0..1000.0;

/// Strategy for real parts with a norm safely away from zero
fn arb_rotation() -> impl Strategy<Value = DQuat> {
    (COMPONENT, COMPONENT, COMPONENT, COMPONENT)
        .prop_map(|(x, y, z, w)| DQuat::from_xyzw(x, y, z, w))
        .prop_filter("real part needs a usable norm", |q| q.length() > 1.0)
}

fn arb_translation() -> impl Strategy<Value = DVec3> {
    (COMPONENT, COMPONENT, COMPONENT).prop_map(|(x, y, z)| DVec3::new(x, y, z))
}

/// Dual quaternions built the way the original test suite built them:
/// an arbitrary real part with a translation quaternion as the dual part.
fn arb_dual_quaternion() -> impl Strategy<Value = DualQuaternion> {
    (arb_rotation(), arb_translation()).prop_map(|(rotation, translation)| {
        DualQuaternion::new(rotation, DQuat::from_translation(translation)).unwrap()
    })
}

/// Dual quaternions in the standard rigid-transform encoding.
fn arb_rigid_transform() -> impl Strategy<Value = (DQuat, DVec3, DualQuaternion)> {
    (arb_rotation(), arb_translation()).prop_map(|(rotation, translation)| {
        let unit = rotation.normalize();
        let dq = DualQuaternion::from_rotation_translation(rotation, translation).unwrap();
        (unit, translation, dq)
    })
}

proptest! {
    #[test]
    fn real_part_has_unit_norm(rotation in arb_rotation(), translation in arb_translation()) {
        let dq = DualQuaternion::new(rotation, DQuat::from_translation(translation)).unwrap();
        prop_assert!((dq.real().length() - 1.0).abs() < 1e-12);
        prop_assert_eq!(dq.dual(), DQuat::from_translation(translation));
    }

    #[test]
    fn addition_commutes(a in arb_dual_quaternion(), b in arb_dual_quaternion()) {
        prop_assume!((a.real() + b.real()).length() > 1e-6);
        let ab = a.add(&b).unwrap();
        let ba = b.add(&a).unwrap();
        prop_assert!(ab.approx_eq(&ba));
    }

    #[test]
    fn addition_associates_on_dual_parts(
        a in arb_dual_quaternion(),
        b in arb_dual_quaternion(),
        c in arb_dual_quaternion(),
    ) {
        let left = a.add(&b).and_then(|ab| ab.add(&c));
        let right = b.add(&c).and_then(|bc| a.add(&bc));
        prop_assume!(left.is_ok() && right.is_ok());
        let (left, right) = (left.unwrap(), right.unwrap());
        prop_assert!(left.dual().almost_equal(&right.dual(), DEFAULT_DELTA));
    }

    #[test]
    fn addition_associates_with_shared_rotation(
        rotation in arb_rotation(),
        ta in arb_translation(),
        tb in arb_translation(),
        tc in arb_translation(),
    ) {
        let make = |t: DVec3| DualQuaternion::new(rotation, DQuat::from_translation(t)).unwrap();
        let (a, b, c) = (make(ta), make(tb), make(tc));
        let left = (a.add(&b).unwrap()).add(&c).unwrap();
        let right = a.add(&b.add(&c).unwrap()).unwrap();
        prop_assert!(left.approx_eq(&right));
    }

    #[test]
    fn scaling_by_two_is_self_addition(a in arb_dual_quaternion()) {
        let doubled = a.multiply(2).unwrap();
        let summed = (a + a).unwrap();
        prop_assert!(doubled.approx_eq(&summed));
    }

    #[test]
    fn conjugate_reverse_reverses_products(q in arb_dual_quaternion(), p in arb_dual_quaternion()) {
        let left = (q * p).conjugate_reverse();
        let right = p.conjugate_reverse() * q.conjugate_reverse();
        prop_assert!(left.approx_eq(&right), "{} != {}", left, right);
    }

    #[test]
    fn normalize_preserves_constructed_values(a in arb_dual_quaternion()) {
        prop_assert!(a.normalize().approx_eq(&a));
    }

    #[test]
    fn translation_round_trip(translation in arb_translation()) {
        let dq = DualQuaternion::new(DQuat::from_xyzw(0.0, 0.0, 0.0, 1.0), DQuat::from_translation(translation)).unwrap();
        prop_assert!((dq.translation() - translation).length() < 1e-9);
    }

    #[test]
    fn transformation_matrix_shape(a in arb_dual_quaternion()) {
        let m = a.transformation_matrix();
        prop_assert_eq!(m.row(3), DVec4::new(0.0, 0.0, 0.0, 1.0));
        prop_assert!((m.col(3).truncate() - a.translation()).length() < 1e-9);
        prop_assert!((m.determinant() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn almost_equal_is_reflexive(a in arb_dual_quaternion()) {
        prop_assert!(a.approx_eq(&a));
        prop_assert!(a.almost_equal(&a, 0.0));
    }

    #[test]
    fn almost_equal_detects_dual_component_change(
        a in arb_dual_quaternion(),
        component in 0usize..4,
        offset in 1e-6..1.0f64,
    ) {
        let mut shift = [0.0; 4];
        shift[component] = offset;
        let changed = DualQuaternion::new(a.real(), a.dual() + DQuat::from_array(shift)).unwrap();
        prop_assert!(!a.approx_eq(&changed));
        prop_assert!(!changed.approx_eq(&a));
    }

    #[test]
    fn almost_equal_detects_quaternion_component_change(
        rotation in arb_rotation(),
        component in 0usize..4,
        offset in 1e-6..1.0f64,
    ) {
        let mut shift = [0.0; 4];
        shift[component] = offset;
        let changed = rotation + DQuat::from_array(shift);
        prop_assert!(!rotation.almost_equal(&changed, DEFAULT_DELTA));
    }

    #[test]
    fn composition_matches_rigid_transforms(
        (r1, t1, q1) in arb_rigid_transform(),
        (r2, t2, q2) in arb_rigid_transform(),
    ) {
        let combined = q1 * q2;
        prop_assert!(combined.real().almost_equal(&(r1 * r2), 1e-12));
        prop_assert!((combined.translation() - (t1 + r1 * t2)).length() < 1e-8);

        let expected = q1.transformation_matrix() * q2.transformation_matrix();
        prop_assert!(combined.transformation_matrix().abs_diff_eq(expected, 1e-8));
    }

    #[test]
    fn sandwich_product_matches_matrix((_, _, q) in arb_rigid_transform(), point in arb_translation()) {
        let by_sandwich = q.transform_point(point);
        let by_matrix = q.transformation_matrix().transform_point3(point);
        prop_assert!((by_sandwich - by_matrix).length() < 1e-8);
    }

    #[test]
    fn conjugate_reverse_inverts_rigid_transforms((_, _, q) in arb_rigid_transform()) {
        prop_assert!((q * q.conjugate_reverse()).almost_equal(&DualQuaternion::identity(), 1e-9));
    }
}
