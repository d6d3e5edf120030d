use criterion::{Criterion, black_box, criterion_group, criterion_main};
use impact_orientation::{AngleUnit, Quaternion};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

fn sample_quaternion() -> Quaternion {
    Quaternion::random_unit(&mut Pcg64Mcg::seed_from_u64(0))
}

fn to_bunge_euler_angles(c: &mut Criterion) {
    let q = sample_quaternion();
    c.bench_function("to_bunge_euler_angles", |b| {
        b.iter(|| black_box(&q).to_bunge_euler_angles(AngleUnit::Degrees));
    });
}

fn from_bunge_euler_angles(c: &mut Criterion) {
    let angles = [45.0, 30.0, 10.0];
    c.bench_function("from_bunge_euler_angles", |b| {
        b.iter(|| Quaternion::from_bunge_euler_angles(black_box(angles), AngleUnit::Degrees));
    });
}

fn matrix_round_trip(c: &mut Criterion) {
    let q = sample_quaternion();
    c.bench_function("matrix_round_trip", |b| {
        b.iter(|| {
            let m = black_box(&q).to_rotation_matrix()?;
            Quaternion::from_rotation_matrix(&m)
        });
    });
}

fn rotate_vector(c: &mut Criterion) {
    let q = sample_quaternion();
    let v = [1.0, -2.0, 0.5];
    c.bench_function("rotate_vector", |b| {
        b.iter(|| black_box(&q).rotate_vector(black_box(&v)));
    });
}

fn multiply(c: &mut Criterion) {
    let a = sample_quaternion();
    let b_quat = Quaternion::random_unit(&mut Pcg64Mcg::seed_from_u64(1));
    c.bench_function("multiply", |b| {
        b.iter(|| black_box(&a) * black_box(&b_quat));
    });
}

fn random_unit(c: &mut Criterion) {
    let mut rng = Pcg64Mcg::seed_from_u64(0);
    c.bench_function("random_unit", |b| {
        b.iter(|| Quaternion::random_unit(&mut rng));
    });
}

criterion_group!(
    benches,
    to_bunge_euler_angles,
    from_bunge_euler_angles,
    matrix_round_trip,
    rotate_vector,
    multiply,
    random_unit,
);
criterion_main!(benches);
