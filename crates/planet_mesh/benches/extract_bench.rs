//! Benchmarks for grid sampling, surface extraction, and the full
//! planet generation pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planet_mesh::{
  extract_surface, generate_planet, post_process, Sphere, SurfaceConfig, VoxelGrid,
};

/// Benchmark density sampling and grid assembly alone.
fn bench_grid_build(c: &mut Criterion) {
  let field = Sphere::new(10.0);

  c.bench_function("VoxelGrid::build (20³ sphere)", |b| {
    b.iter(|| black_box(VoxelGrid::build(20, 1.0, black_box(&field))))
  });
}

/// Benchmark extraction from a pre-built grid.
fn bench_extract(c: &mut Criterion) {
  let field = Sphere::new(10.0);
  let grid = VoxelGrid::build(20, 1.0, &field);

  c.bench_function("extract_surface (20³ sphere)", |b| {
    b.iter(|| black_box(extract_surface(black_box(grid.voxels()))))
  });
}

/// Benchmark the attribute pass on extracted geometry.
fn bench_post_process(c: &mut Criterion) {
  let field = Sphere::new(10.0);
  let grid = VoxelGrid::build(20, 1.0, &field);
  let mesh = extract_surface(grid.voxels());

  c.bench_function("post_process (20³ sphere)", |b| {
    b.iter(|| {
      let mut m = mesh.clone();
      post_process(&mut m);
      black_box(m)
    })
  });
}

/// Full pipeline at varying grid resolutions.
fn bench_generate_planet(c: &mut Criterion) {
  let mut group = c.benchmark_group("generate_planet");

  for grid_size in [10u32, 20, 40] {
    let config = SurfaceConfig::new()
      .with_grid_size(grid_size)
      .with_voxel_size(40.0 / grid_size as f32)
      .with_radius(15.0)
      .with_seed(7);

    group.bench_with_input(
      BenchmarkId::from_parameter(format!("{}³", grid_size)),
      &config,
      |b, config| b.iter(|| black_box(generate_planet(black_box(config)))),
    );
  }

  group.finish();
}

criterion_group!(
  benches,
  bench_grid_build,
  bench_extract,
  bench_post_process,
  bench_generate_planet
);
criterion_main!(benches);
