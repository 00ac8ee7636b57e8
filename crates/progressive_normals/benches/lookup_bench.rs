//! Benchmarks for octree construction and two-tier normal lookups.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use progressive_normals::generator::fibonacci_sphere;
use progressive_normals::{generate_table, GeneratorConfig, LookupConfig, NormalLookups, NormalTable};

/// Full-size progressive table.
fn full_table() -> NormalTable {
  generate_table(&GeneratorConfig::default()).expect("Default generator config is valid")
}

/// Query directions that do not coincide with table entries.
fn queries(count: usize) -> Vec<Vec3> {
  fibonacci_sphere(count)
    .into_iter()
    .map(|v| (v + Vec3::new(0.013, -0.007, 0.011)).normalize())
    .collect()
}

/// Benchmark building both trees.
fn bench_build(c: &mut Criterion) {
  let table = full_table();

  c.bench_function("NormalLookups::build (128 + 32768)", |b| {
    b.iter(|| NormalLookups::build(black_box(&table), LookupConfig::default()))
  });
}

/// Lookup cost across precisions: loose precisions stay in the coarse tier.
fn bench_find_closest(c: &mut Criterion) {
  let table = full_table();
  let lookups = NormalLookups::build(&table, LookupConfig::default()).expect("Full table builds");
  let queries = queries(1024);

  let mut group = c.benchmark_group("find_closest");
  for precision in [0.0f32, 0.05, 0.2, 0.5] {
    group.bench_with_input(
      BenchmarkId::new("1024 queries", format!("precision={}", precision)),
      &precision,
      |b, &precision| {
        b.iter(|| {
          for query in &queries {
            black_box(lookups.find_closest(black_box(*query), precision));
          }
        })
      },
    );
  }
  group.finish();
}

/// Linear scan over the full table, for comparison with the fine tier.
fn bench_brute_force(c: &mut Criterion) {
  let table = full_table();
  let queries = queries(64);

  c.bench_function("brute force (32768, 64 queries)", |b| {
    b.iter(|| {
      for query in &queries {
        let mut best = (f32::MAX, 0usize);
        for (i, n) in table.as_slice().iter().enumerate() {
          let d = query.distance_squared(*n);
          if d < best.0 {
            best = (d, i);
          }
        }
        black_box(best);
      }
    })
  });
}

criterion_group!(benches, bench_build, bench_find_closest, bench_brute_force);
criterion_main!(benches);
