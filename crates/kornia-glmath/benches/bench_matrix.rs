use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kornia_glmath::{Mat4F32, Vec4F32};
use rand::Rng;

fn random_mat4(rng: &mut impl Rng) -> Mat4F32 {
    Mat4F32::from_fn(|c, r| {
        let v: f32 = rng.random_range(-1.0..1.0);
        if c == r {
            v + 5.0
        } else {
            v
        }
    })
}

fn bench_mat4(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4");
    let mut rng = rand::rng();

    let a = random_mat4(&mut rng);
    let b = random_mat4(&mut rng);
    let v = Vec4F32::new(rng.random(), rng.random(), rng.random(), 1.0);

    let a_glam: glam::Mat4 = a.into();
    let b_glam: glam::Mat4 = b.into();
    let v_glam = glam::Vec4::from_array(v.to_array());

    group.bench_function(BenchmarkId::new("mul", ""), |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)))
    });

    group.bench_function(BenchmarkId::new("mul_glam", ""), |bench| {
        bench.iter(|| black_box(black_box(a_glam) * black_box(b_glam)))
    });

    group.bench_function(BenchmarkId::new("mul_vec4", ""), |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(v)))
    });

    group.bench_function(BenchmarkId::new("mul_vec4_glam", ""), |bench| {
        bench.iter(|| black_box(black_box(a_glam) * black_box(v_glam)))
    });

    group.bench_function(BenchmarkId::new("inverse", ""), |bench| {
        bench.iter(|| black_box(black_box(a).inverse()))
    });

    group.bench_function(BenchmarkId::new("inverse_glam", ""), |bench| {
        bench.iter(|| black_box(black_box(a_glam).inverse()))
    });

    group.bench_function(BenchmarkId::new("determinant", ""), |bench| {
        bench.iter(|| black_box(black_box(a).determinant()))
    });

    group.bench_function(BenchmarkId::new("perspective", ""), |bench| {
        bench.iter(|| black_box(Mat4F32::perspective(black_box(60.0), 1.5, 0.1, 100.0)))
    });

    group.finish();
}

criterion_group!(benches, bench_mat4);
criterion_main!(benches);
