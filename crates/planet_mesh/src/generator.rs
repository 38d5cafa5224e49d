//! End-to-end surface generation.
//!
//! Ties the stages together: validate the configuration, sample the
//! density field into a voxel grid, extract the iso-surface, then fill
//! the mesh attributes. Also provides a timed variant reporting per-stage
//! durations.

use web_time::Instant;

use crate::density::{DensityField, NoisySphere};
use crate::grid::VoxelGrid;
use crate::marching_cubes::extract_surface;
use crate::postprocess::post_process;
use crate::types::{ConfigError, Mesh, SurfaceConfig};

/// Per-stage timings and output counts for one generation run.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenerationStats {
  /// Grid construction and density sampling time in microseconds.
  pub sample_micros: u64,
  /// Surface extraction time in microseconds.
  pub extract_micros: u64,
  /// Attribute post-processing time in microseconds.
  pub post_process_micros: u64,
  /// Number of cells in the voxel grid.
  pub voxel_count: usize,
  /// Number of triangles in the output mesh.
  pub triangle_count: usize,
}

impl GenerationStats {
  pub fn total_micros(&self) -> u64 {
    self.sample_micros + self.extract_micros + self.post_process_micros
  }
}

/// Generate a surface mesh from an arbitrary density field.
///
/// Fails fast on an invalid configuration without touching the field.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(field), fields(grid_size = config.grid_size)))]
pub fn generate_surface(config: &SurfaceConfig, field: &dyn DensityField) -> Result<Mesh, ConfigError> {
  config.validate()?;

  let grid = VoxelGrid::build(config.grid_size, config.voxel_size, field);
  let mut mesh = extract_surface(grid.voxels());
  post_process(&mut mesh);

  #[cfg(feature = "tracing")]
  tracing::info!(
    voxels = grid.len(),
    triangles = mesh.triangle_count(),
    "surface generated"
  );

  Ok(mesh)
}

/// Generate the reference planet: a noise-perturbed sphere parameterized
/// entirely by the configuration.
pub fn generate_planet(config: &SurfaceConfig) -> Result<Mesh, ConfigError> {
  let field =
    NoisySphere::new(config.radius, config.seed).with_noise(config.noise_scale, config.noise_amplitude);
  generate_surface(config, &field)
}

/// Like [`generate_surface`], reporting per-stage timings alongside the
/// mesh.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(field), fields(grid_size = config.grid_size)))]
pub fn generate_surface_timed(
  config: &SurfaceConfig,
  field: &dyn DensityField,
) -> Result<(Mesh, GenerationStats), ConfigError> {
  config.validate()?;

  let mut stats = GenerationStats::default();

  let start = Instant::now();
  let grid = VoxelGrid::build(config.grid_size, config.voxel_size, field);
  stats.sample_micros = start.elapsed().as_micros() as u64;
  stats.voxel_count = grid.len();

  let start = Instant::now();
  let mut mesh = extract_surface(grid.voxels());
  stats.extract_micros = start.elapsed().as_micros() as u64;

  let start = Instant::now();
  post_process(&mut mesh);
  stats.post_process_micros = start.elapsed().as_micros() as u64;
  stats.triangle_count = mesh.triangle_count();

  #[cfg(feature = "tracing")]
  tracing::info!(
    sample_us = stats.sample_micros,
    extract_us = stats.extract_micros,
    post_us = stats.post_process_micros,
    triangles = stats.triangle_count,
    "surface generated"
  );

  Ok((mesh, stats))
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;
