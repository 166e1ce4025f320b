//! Criterion benchmarks for 3D hulls and catalog constructors.
//! Focus sizes: n in {8, 16, 32, 64} random points on the unit sphere.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p polylib

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector3;
use polylib::geom3::{Hs3, Polyhedron};
use polylib::library::construct;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_sphere_points(n: usize, seed: u64) -> Vec<Vector3<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            // box point projected to the sphere
            let v = Vector3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if v.norm() < 1e-3 {
                Vector3::x()
            } else {
                v.normalize()
            }
        })
        .collect()
}

fn random_halfspaces(m: usize, seed: u64) -> Vec<Hs3> {
    random_sphere_points(m, seed)
        .into_iter()
        .map(|n| Hs3::new(n, 1.0))
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull3");
    for &n in &[8usize, 16, 32, 64] {
        group.bench_with_input(BenchmarkId::new("from_vertices", n), &n, |b, &n| {
            b.iter_batched(
                || random_sphere_points(n, 43),
                |pts| {
                    let _p = Polyhedron::from_vertices(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("from_halfspaces", n), &n, |b, &n| {
            b.iter_batched(
                || random_halfspaces(n, 44),
                |hs| {
                    let _p = Polyhedron::from_halfspaces(hs);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    group.sample_size(10);
    for name in ["cube", "truncated_octahedron", "snub_cube", "truncated_icosidodecahedron"] {
        group.bench_function(name, |b| b.iter(|| construct(name, None)));
    }
    group.bench_function("pentagonal_hexecontahedron", |b| {
        b.iter(|| construct("pentagonal_hexecontahedron", None))
    });
    group.finish();
}

criterion_group!(benches, bench_hull, bench_catalog);
criterion_main!(benches);
