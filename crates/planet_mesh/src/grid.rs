//! Voxel grid construction and density sampling.
//!
//! The grid is a `grid_size`³ lattice of cubical cells centered on the
//! world origin. Corner positions and densities are computed once per
//! distinct lattice point of the `(grid_size + 1)`³ corner lattice, then
//! shared by every cell touching that point. Adjacent cells therefore see
//! bit-identical corner data, which is what keeps triangles seamless
//! across cell boundaries.
//!
//! # Lattice Layout
//!
//! ```text
//! Corner lattice index: x-major, then y, then z
//!
//!   index = (x * n1 + y) * n1 + z        where n1 = grid_size + 1
//!
//! Lattice point (i,j,k) sits at
//!
//!   (i,j,k) * voxel_size - 0.5 * grid_size * voxel_size
//! ```

use glam::Vec3A;

use crate::density::DensityField;
use crate::tables::CORNER_OFFSETS;

/// One cubical cell: 8 corner positions paired with the 8 densities
/// sampled at exactly those points.
#[derive(Clone, Copy, Debug)]
pub struct Voxel {
  pub corners: [Vec3A; 8],
  pub values: [f32; 8],
}

/// The sampled voxel lattice consumed by the extractor.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
  grid_size: u32,
  voxel_size: f32,
  voxels: Vec<Voxel>,
}

impl VoxelGrid {
  /// Build the grid and sample `field` at every distinct corner.
  ///
  /// Cells iterate x-major, then y, then z; the ordering is part of the
  /// output contract (extraction emits triangles in cell order).
  /// Preconditions (`grid_size >= 1`, `voxel_size > 0`) are validated by
  /// the caller via `SurfaceConfig::validate`.
  pub fn build(grid_size: u32, voxel_size: f32, field: &dyn DensityField) -> Self {
    let n = grid_size as usize;
    let n1 = n + 1;
    let half_extent = 0.5 * grid_size as f32 * voxel_size;

    // Sample each lattice point exactly once; cells share these values.
    let mut positions = Vec::with_capacity(n1 * n1 * n1);
    let mut values = Vec::with_capacity(n1 * n1 * n1);
    for x in 0..n1 {
      for y in 0..n1 {
        for z in 0..n1 {
          let position = Vec3A::new(
            x as f32 * voxel_size - half_extent,
            y as f32 * voxel_size - half_extent,
            z as f32 * voxel_size - half_extent,
          );
          positions.push(position);
          values.push(field.sample(position));
        }
      }
    }

    let lattice_index = |x: usize, y: usize, z: usize| (x * n1 + y) * n1 + z;

    let mut voxels = Vec::with_capacity(n * n * n);
    for x in 0..n {
      for y in 0..n {
        for z in 0..n {
          let mut corners = [Vec3A::ZERO; 8];
          let mut corner_values = [0.0f32; 8];
          for (i, offset) in CORNER_OFFSETS.iter().enumerate() {
            let idx = lattice_index(x + offset[0], y + offset[1], z + offset[2]);
            corners[i] = positions[idx];
            corner_values[i] = values[idx];
          }
          voxels.push(Voxel {
            corners,
            values: corner_values,
          });
        }
      }
    }

    Self {
      grid_size,
      voxel_size,
      voxels,
    }
  }

  pub fn grid_size(&self) -> u32 {
    self.grid_size
  }

  pub fn voxel_size(&self) -> f32 {
    self.voxel_size
  }

  pub fn voxels(&self) -> &[Voxel] {
    &self.voxels
  }

  pub fn len(&self) -> usize {
    self.voxels.len()
  }

  pub fn is_empty(&self) -> bool {
    self.voxels.is_empty()
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
