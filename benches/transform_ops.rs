use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cubeplay::camera::{compute_basis, BasisInput};
use cubeplay::math::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Benchmark: in-place 4x4 multiply, the per-frame hot path
fn bench_mul_in_place(c: &mut Criterion) {
    let base = Mat4::look_at(
        Vec3::new(3.0, 0.0, 3.0),
        Vec3::new(0.70711, 0.0, -0.70711),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.70711, 0.0, 0.70711),
    );
    let rotation = Mat4::rotation_x(0.02);

    c.bench_function("mat4_mul_in_place", |b| {
        b.iter(|| {
            let mut m = black_box(base);
            m.mul_in_place(black_box(&rotation));
            black_box(m)
        })
    });
}

/// Benchmark: non-mutating multiply for comparison with the in-place path
fn bench_mul_pure(c: &mut Criterion) {
    let a = Mat4::perspective(1024.0, 768.0, FRAC_PI_2, 1.0, 100.0);
    let b_mat = Mat4::rotation_x(0.02);

    c.bench_function("mat4_mul_pure", |b| {
        b.iter(|| black_box(black_box(&a).mul(black_box(&b_mat))))
    });
}

/// Benchmark: projection construction (rebuilt every frame)
fn bench_perspective(c: &mut Criterion) {
    c.bench_function("mat4_perspective", |b| {
        b.iter(|| {
            black_box(Mat4::perspective(
                black_box(1024.0),
                black_box(768.0),
                black_box(FRAC_PI_2),
                black_box(1.0),
                black_box(100.0),
            ))
        })
    });
}

/// Benchmark: full per-frame camera math (basis + view matrix)
fn bench_basis_and_view(c: &mut Criterion) {
    c.bench_function("camera_basis_and_view", |b| {
        let mut yaw = 0.0f32;
        b.iter(|| {
            yaw += 0.1;
            let basis = compute_basis(BasisInput::FromAngles {
                yaw_deg: black_box(yaw),
                pitch_deg: black_box(-15.0),
            });
            black_box(Mat4::look_at(
                black_box(Vec3::new(3.0, 0.0, 3.0)),
                basis.right,
                basis.up,
                basis.look,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_mul_in_place,
    bench_mul_pure,
    bench_perspective,
    bench_basis_and_view
);
criterion_main!(benches);
