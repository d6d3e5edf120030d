//! Round trips between the rotation representations.

use impact_orientation::{AngleUnit, Quaternion, UniformRotation};
use proptest::prelude::*;
use rand::{SeedableRng, distr::Distribution};
use rand_pcg::Pcg64Mcg;

const TOLERANCE: f64 = 1e-8;

prop_compose! {
    fn unit_quaternion_strategy()(seed in any::<u64>()) -> Quaternion {
        UniformRotation.sample(&mut Pcg64Mcg::seed_from_u64(seed))
    }
}

prop_compose! {
    fn general_euler_angles_strategy()(
        phi1 in -179.0..179.0,
        cap_phi in 1.0..179.0,
        phi2 in -179.0..179.0,
    ) -> [f64; 3] {
        [phi1, cap_phi, phi2]
    }
}

fn arbitrary_unit() -> impl Strategy<Value = AngleUnit> {
    any::<bool>().prop_map(AngleUnit::from_degrees_flag)
}

proptest! {
    #[test]
    fn should_recover_quaternion_from_its_euler_angles(
        q in unit_quaternion_strategy(),
        unit in arbitrary_unit(),
    ) {
        let angles = q.to_bunge_euler_angles(unit).unwrap();
        let recovered = Quaternion::from_bunge_euler_angles(angles, unit);
        prop_assert!(recovered.difference(&q) < TOLERANCE, "{} became {}", q, recovered);
    }
}

proptest! {
    #[test]
    fn should_recover_quaternion_from_its_angle_axis_pair(
        q in unit_quaternion_strategy(),
        unit in arbitrary_unit(),
    ) {
        let (angle, axis) = q.to_angle_axis(unit).unwrap();
        let recovered = Quaternion::from_angle_axis(angle, axis, unit).unwrap();
        prop_assert!(recovered.difference(&q) < TOLERANCE, "{} became {}", q, recovered);
    }
}

proptest! {
    #[test]
    fn should_recover_quaternion_from_its_rotation_matrix(q in unit_quaternion_strategy()) {
        let m = q.to_rotation_matrix().unwrap();
        let recovered = Quaternion::from_rotation_matrix(&m).unwrap();
        prop_assert!(recovered.difference(&q) < TOLERANCE, "{} became {}", q, recovered);
    }
}

proptest! {
    #[test]
    fn should_recover_general_euler_angles(angles in general_euler_angles_strategy()) {
        let q = Quaternion::from_bunge_euler_angles(angles, AngleUnit::Degrees);
        let recovered = q.to_bunge_euler_angles(AngleUnit::Degrees).unwrap();
        for (original, recovered) in angles.iter().zip(&recovered) {
            prop_assert!((original - recovered).abs() < 1e-9);
        }
    }
}

proptest! {
    #[test]
    fn should_compose_rotations_like_successive_vector_rotations(
        a in unit_quaternion_strategy(),
        b in unit_quaternion_strategy(),
        v in prop::array::uniform3(-10.0..10.0),
    ) {
        let composed = (a * b).rotate_vector(&v).unwrap();
        let successive = a.rotate_vector(&b.rotate_vector(&v).unwrap()).unwrap();
        for (c, s) in composed.iter().zip(&successive) {
            prop_assert!((c - s).abs() < 1e-10);
        }
    }
}

proptest! {
    #[test]
    fn should_treat_negated_quaternion_as_same_rotation(q in unit_quaternion_strategy()) {
        prop_assert!(q.difference(&q.scaled(-1.0)) < TOLERANCE);
        prop_assert_eq!(q.conjugate().conjugate(), q);
    }
}

proptest! {
    #[test]
    fn should_restore_quaternion_by_scaling_normalized_version_with_norm(
        components in prop::array::uniform4(-100.0..100.0),
    ) {
        let q = Quaternion::from_array(components);
        prop_assume!(q.norm() > 1e-3);
        let restored = q.normalize().unwrap().scaled(q.norm());
        prop_assert!(restored.difference(&q) < 1e-10 * q.norm());
    }
}
