//! Random rotations.

use crate::quaternion::Quaternion;
use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use std::f64::consts::TAU;

/// Distribution of unit quaternions that are uniform over the rotation group.
///
/// Each sample consumes three uniform variates `u₁, u₂, u₃` in `[0, 1)` from
/// the generator. Use a seeded generator for reproducible samples. Generators
/// are borrowed mutably, so one generator cannot be shared between threads
/// without external synchronization.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRotation;

impl Distribution<Quaternion> for UniformRotation {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Quaternion {
        let u1: f64 = StandardUniform.sample(rng);
        let u2: f64 = StandardUniform.sample(rng);
        let u3: f64 = StandardUniform.sample(rng);

        let (sin_1, cos_1) = (TAU * u1).sin_cos();
        let (sin_2, cos_2) = (TAU * u2).sin_cos();
        let sqrt_u3 = u3.sqrt();
        let sqrt_1_minus_u3 = (1.0 - u3).sqrt();

        Quaternion::new(
            cos_1 * sqrt_u3,
            sin_2 * sqrt_1_minus_u3,
            cos_2 * sqrt_1_minus_u3,
            sin_1 * sqrt_u3,
        )
    }
}

impl Quaternion {
    /// Draws a unit quaternion uniformly distributed over the rotation group
    /// using the given generator.
    pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        UniformRotation.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn random_quaternions_have_unit_norm() {
        let mut rng = Pcg64Mcg::seed_from_u64(0);
        for _ in 0..1000 {
            let q = Quaternion::random_unit(&mut rng);
            assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn sampling_with_same_seed_is_reproducible() {
        let mut rng_a = Pcg64Mcg::seed_from_u64(42);
        let mut rng_b = Pcg64Mcg::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(
                Quaternion::random_unit(&mut rng_a),
                UniformRotation.sample(&mut rng_b)
            );
        }
    }

    #[test]
    fn sampling_with_different_seeds_differs() {
        let a = Quaternion::random_unit(&mut Pcg64Mcg::seed_from_u64(1));
        let b = Quaternion::random_unit(&mut Pcg64Mcg::seed_from_u64(2));
        assert_ne!(a, b);
    }

    #[test]
    fn sampling_works_through_trait_object() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let rng: &mut dyn rand::RngCore = &mut rng;
        let q = Quaternion::random_unit(rng);
        assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn mean_of_squared_components_is_one_fourth() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let n_samples = 20_000;

        let mut sums = [0.0; 4];
        for q in UniformRotation.sample_iter(&mut rng).take(n_samples) {
            for (sum, component) in sums.iter_mut().zip(q.to_array()) {
                *sum += component * component;
            }
        }

        for sum in sums {
            assert_abs_diff_eq!(sum / n_samples as f64, 0.25, epsilon = 0.01);
        }
    }
}
