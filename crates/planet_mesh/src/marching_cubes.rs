//! Marching Cubes surface extraction.
//!
//! Converts a sampled voxel grid into a triangle soup approximating the
//! zero level set of the density field.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Classification                      │
//! │  For each voxel:                                                │
//! │    Build 8-bit configuration from corner density signs          │
//! │    Early-out if EDGE_TABLE[config] == 0 (no crossing)           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Interpolation                       │
//! │  For each active edge:                                          │
//! │    Linear zero-crossing between the two corner samples          │
//! │    Degenerate denominators clamp to the edge midpoint           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 3: Triangulation                       │
//! │  Walk TRI_TABLE[config] to the -1 sentinel; each edge triple    │
//! │  appends 3 fresh vertices and 3 sequential indices              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Voxels are classified and interpolated in parallel; the append pass
//! runs single-threaded over the per-voxel results so the output order
//! (voxel order, then table order) is identical to a sequential run.

use glam::Vec3A;
use rayon::prelude::*;
use smallvec::SmallVec;

use crate::grid::Voxel;
use crate::tables::{EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
use crate::types::Mesh;

/// Denominators below this are treated as degenerate and fall back to
/// the edge midpoint instead of dividing.
const DEGENERATE_EPSILON: f32 = 1e-10;

/// Triangles emitted by a single voxel. At most 5 per configuration.
pub type VoxelTriangles = SmallVec<[[Vec3A; 3]; 5]>;

/// Build the 8-bit configuration: bit `i` set iff corner `i` has
/// positive density (solid).
#[inline]
pub fn corner_config(values: &[f32; 8]) -> u8 {
  let mut config = 0u8;
  for (i, &value) in values.iter().enumerate() {
    if value > 0.0 {
      config |= 1 << i;
    }
  }
  config
}

/// Interpolate the zero crossing along an edge.
///
/// `t = val_a / (val_a - val_b)`, clamped to `[0, 1]`. Callers only pass
/// corners of opposite sign, but exact zeros can still collapse the
/// denominator; those fall back to the midpoint rather than emitting NaN.
#[inline]
pub fn interpolate_edge(pos_a: Vec3A, val_a: f32, pos_b: Vec3A, val_b: f32) -> Vec3A {
  let denom = val_a - val_b;
  if denom.abs() < DEGENERATE_EPSILON {
    return pos_a + 0.5 * (pos_b - pos_a);
  }

  let t = (val_a / denom).clamp(0.0, 1.0);
  pos_a + t * (pos_b - pos_a)
}

/// Classify one voxel and emit its triangles.
///
/// Returns an empty list when the surface does not cross the cell
/// (configurations 0 and 255 included).
pub fn triangulate_voxel(voxel: &Voxel) -> VoxelTriangles {
  let mut triangles = VoxelTriangles::new();

  let config = corner_config(&voxel.values) as usize;

  let edge_mask = EDGE_TABLE[config];
  if edge_mask == 0 {
    return triangles;
  }

  // Zero crossings on the active edges only.
  let mut edge_points = [Vec3A::ZERO; 12];
  for (edge, corners) in EDGE_CORNERS.iter().enumerate() {
    if edge_mask & (1 << edge) != 0 {
      let a = corners[0] as usize;
      let b = corners[1] as usize;
      edge_points[edge] = interpolate_edge(
        voxel.corners[a],
        voxel.values[a],
        voxel.corners[b],
        voxel.values[b],
      );
    }
  }

  let entry = &TRI_TABLE[config];
  let mut i = 0;
  while i < 16 && entry[i] != -1 {
    triangles.push([
      edge_points[entry[i] as usize],
      edge_points[entry[i + 1] as usize],
      edge_points[entry[i + 2] as usize],
    ]);
    i += 3;
  }

  triangles
}

/// Extract the iso-surface from a voxel grid.
///
/// Output is a non-indexed triangle soup: every triangle appends 3 fresh
/// vertices and 3 sequential indices. Pure function of its input — the
/// same grid always yields the same buffers.
pub fn extract_surface(voxels: &[Voxel]) -> Mesh {
  // Per-voxel triangulation is embarrassingly parallel; the indexed map
  // preserves voxel order in the collected results.
  let per_voxel: Vec<VoxelTriangles> = voxels.par_iter().map(triangulate_voxel).collect();

  // Single-threaded merge keeps index assignment deterministic.
  let triangle_count: usize = per_voxel.iter().map(|t| t.len()).sum();
  let mut mesh = Mesh::new();
  mesh.positions.reserve(triangle_count * 3);
  mesh.indices.reserve(triangle_count * 3);

  for triangles in &per_voxel {
    for triangle in triangles {
      let base = mesh.positions.len() as u32;
      for point in triangle {
        let position = point.to_array();
        mesh.positions.push(position);
        mesh.bounds.encapsulate(position);
      }
      mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
  }

  mesh
}

#[cfg(test)]
#[path = "marching_cubes_test.rs"]
mod marching_cubes_test;
