//! Core data types for surface generation.

use thiserror::Error;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug)]
pub struct MinMaxAabb {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAabb {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAabb {
  fn default() -> Self {
    Self::empty()
  }
}

/// Surface extraction result.
///
/// Positions and indices are always populated (possibly empty). The
/// overlay arrays (`normals`, `uvs`, `tangents`) stay empty until the
/// post-processing pass fills them; when populated they are parallel to
/// `positions`.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
  /// Vertex positions. Triangle soup: every triangle owns 3 fresh
  /// vertices, no welding.
  pub positions: Vec<[f32; 3]>,

  /// Triangle indices (3 sequential indices per triangle).
  pub indices: Vec<u32>,

  /// Per-vertex unit normals (post-processing overlay).
  pub normals: Vec<[f32; 3]>,

  /// Per-vertex texture coordinates (post-processing overlay).
  pub uvs: Vec<[f32; 2]>,

  /// Per-vertex unit tangents (post-processing overlay).
  pub tangents: Vec<[f32; 3]>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAabb,
}

impl Mesh {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }
}

/// Errors rejected before any grid work begins.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
  #[error("grid size must be at least 1")]
  ZeroGridSize,

  #[error("voxel size must be positive and finite, got {voxel_size}")]
  NonPositiveVoxelSize { voxel_size: f32 },
}

/// Configuration for surface generation.
///
/// `grid_size` is the lattice resolution per axis, `voxel_size` the
/// world-space edge length of one cell. The remaining fields parameterize
/// the reference noisy-sphere density field.
#[derive(Clone, Debug)]
pub struct SurfaceConfig {
  /// Number of cells per axis.
  pub grid_size: u32,

  /// World-space edge length of one cell.
  pub voxel_size: f32,

  /// Base sphere radius of the reference density field.
  pub radius: f32,

  /// Spatial frequency multiplier for noise sampling.
  pub noise_scale: f32,

  /// Noise contribution magnitude.
  pub noise_amplitude: f32,

  /// Noise seed.
  pub seed: u32,
}

impl Default for SurfaceConfig {
  fn default() -> Self {
    Self {
      grid_size: 20,
      voxel_size: 5.0,
      radius: 40.0,
      noise_scale: 0.05,
      noise_amplitude: 5.0,
      seed: 0,
    }
  }
}

impl SurfaceConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_grid_size(mut self, grid_size: u32) -> Self {
    self.grid_size = grid_size;
    self
  }

  pub fn with_voxel_size(mut self, voxel_size: f32) -> Self {
    self.voxel_size = voxel_size;
    self
  }

  pub fn with_radius(mut self, radius: f32) -> Self {
    self.radius = radius;
    self
  }

  pub fn with_noise(mut self, scale: f32, amplitude: f32) -> Self {
    self.noise_scale = scale;
    self.noise_amplitude = amplitude;
    self
  }

  pub fn with_seed(mut self, seed: u32) -> Self {
    self.seed = seed;
    self
  }

  /// Validate preconditions. Called before any grid work; a failure
  /// produces no partial output.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.grid_size == 0 {
      return Err(ConfigError::ZeroGridSize);
    }
    if !(self.voxel_size > 0.0) || !self.voxel_size.is_finite() {
      return Err(ConfigError::NonPositiveVoxelSize {
        voxel_size: self.voxel_size,
      });
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
