//! Benchmarks for the CPU-side interaction pass.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Mat4, Vec2};

use dustorb::interaction::{self, Instance};
use dustorb::particles::ParticleSet;

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction_update");

    for count in [10_000u32, 50_000, 200_000] {
        group.bench_with_input(BenchmarkId::new("particles", count), &count, |b, &count| {
            let mut set = ParticleSet::with_seed(42);
            set.regenerate(count, 2.0, 0.0025, 1.0, 0.05);
            let mut instances: Vec<Instance> = Vec::with_capacity(count as usize);
            let view_proj = Mat4::perspective_rh(75.0_f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0)
                * Mat4::from_translation(glam::Vec3::new(0.0, 0.0, -5.0));

            b.iter(|| {
                interaction::update(
                    black_box(1.0),
                    Vec2::new(0.1, 0.1),
                    0.5,
                    &view_proj,
                    set.particles_mut(),
                    &mut instances,
                );
                black_box(instances.len())
            })
        });
    }

    group.finish();
}

fn bench_regenerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("regenerate");
    group.sample_size(20);

    group.bench_function("200k", |b| {
        let mut set = ParticleSet::with_seed(7);
        b.iter(|| {
            set.regenerate(200_000, 2.0, 0.0025, 1.0, 0.05);
            black_box(set.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_update, bench_regenerate);
criterion_main!(benches);
