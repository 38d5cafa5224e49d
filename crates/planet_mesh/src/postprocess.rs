//! Mesh attribute post-processing.
//!
//! Fills the overlay arrays of a [`Mesh`]: per-vertex normals accumulated
//! from face geometry, spherical texture coordinates, and tangents derived
//! from the UV parameterization. Runs after extraction; positions and
//! indices are never modified.

use glam::{Vec2, Vec3A};

use crate::types::Mesh;

/// Squared-length floor below which a face is considered degenerate and
/// skipped during normal accumulation.
const DEGENERATE_FACE_EPSILON: f32 = 1e-12;

/// Recalculate per-vertex normals from triangle geometry.
///
/// Each face's area-weighted normal is accumulated into its 3 vertices,
/// then normalized. In a triangle soup no vertex is shared, so this
/// reduces to the face normal per vertex; the accumulation form also
/// stays correct for welded meshes. Vertices touched only by degenerate
/// faces fall back to +Y.
pub fn recalculate_normals(mesh: &mut Mesh) {
  let mut accumulated = vec![Vec3A::ZERO; mesh.positions.len()];

  for triangle in mesh.indices.chunks_exact(3) {
    let i0 = triangle[0] as usize;
    let i1 = triangle[1] as usize;
    let i2 = triangle[2] as usize;

    let p0 = Vec3A::from_array(mesh.positions[i0]);
    let p1 = Vec3A::from_array(mesh.positions[i1]);
    let p2 = Vec3A::from_array(mesh.positions[i2]);

    // Cross product length is twice the face area, weighting the
    // contribution of larger faces.
    let face_normal = (p1 - p0).cross(p2 - p0);
    if face_normal.length_squared() < DEGENERATE_FACE_EPSILON {
      continue;
    }

    accumulated[i0] += face_normal;
    accumulated[i1] += face_normal;
    accumulated[i2] += face_normal;
  }

  mesh.normals = accumulated
    .into_iter()
    .map(|n| {
      if n.length_squared() < DEGENERATE_FACE_EPSILON {
        [0.0, 1.0, 0.0]
      } else {
        n.normalize().to_array()
      }
    })
    .collect();
}

/// Assign spherical texture coordinates from vertex positions.
///
/// `u` comes from the azimuth around +Y, `v` from the polar angle, both
/// mapped to `[0, 1]`. Vertices at the origin have no defined direction
/// and map to `(0, 0)`.
pub fn assign_spherical_uvs(mesh: &mut Mesh) {
  mesh.uvs = mesh
    .positions
    .iter()
    .map(|p| {
      let position = Vec3A::from_array(*p);
      if position.length_squared() < DEGENERATE_FACE_EPSILON {
        return [0.0, 0.0];
      }

      let dir = position.normalize();
      let u = 0.5 + dir.z.atan2(dir.x) / (2.0 * std::f32::consts::PI);
      let v = 0.5 - dir.y.asin() / std::f32::consts::PI;
      [u, v]
    })
    .collect();
}

/// Derive per-vertex tangents from positions and UVs.
///
/// Standard UV-gradient construction: solve the 2x2 system relating the
/// triangle's edge vectors to its UV deltas and accumulate the resulting
/// tangent direction into each vertex. Faces whose UV mapping collapses
/// (zero determinant) contribute nothing; affected vertices fall back to
/// an arbitrary direction orthogonal to their normal. Requires normals
/// and UVs to be populated.
pub fn calculate_tangents(mesh: &mut Mesh) {
  debug_assert_eq!(mesh.normals.len(), mesh.positions.len());
  debug_assert_eq!(mesh.uvs.len(), mesh.positions.len());

  let mut accumulated = vec![Vec3A::ZERO; mesh.positions.len()];

  for triangle in mesh.indices.chunks_exact(3) {
    let i0 = triangle[0] as usize;
    let i1 = triangle[1] as usize;
    let i2 = triangle[2] as usize;

    let p0 = Vec3A::from_array(mesh.positions[i0]);
    let p1 = Vec3A::from_array(mesh.positions[i1]);
    let p2 = Vec3A::from_array(mesh.positions[i2]);

    let uv0 = Vec2::from_array(mesh.uvs[i0]);
    let uv1 = Vec2::from_array(mesh.uvs[i1]);
    let uv2 = Vec2::from_array(mesh.uvs[i2]);

    let edge1 = p1 - p0;
    let edge2 = p2 - p0;
    let duv1 = uv1 - uv0;
    let duv2 = uv2 - uv0;

    let det = duv1.x * duv2.y - duv2.x * duv1.y;
    if det.abs() < DEGENERATE_FACE_EPSILON {
      continue;
    }

    let f = 1.0 / det;
    let tangent = f * (duv2.y * edge1 - duv1.y * edge2);

    accumulated[i0] += tangent;
    accumulated[i1] += tangent;
    accumulated[i2] += tangent;
  }

  mesh.tangents = accumulated
    .iter()
    .enumerate()
    .map(|(i, t)| {
      let normal = Vec3A::from_array(mesh.normals[i]);

      // Gram-Schmidt against the normal keeps the basis orthogonal.
      let projected = *t - normal * normal.dot(*t);
      if projected.length_squared() < DEGENERATE_FACE_EPSILON {
        return fallback_tangent(normal).to_array();
      }
      projected.normalize().to_array()
    })
    .collect();
}

/// Any unit vector orthogonal to `normal`, for vertices whose UV mapping
/// gave no usable tangent direction.
fn fallback_tangent(normal: Vec3A) -> Vec3A {
  let candidate = if normal.x.abs() < 0.9 {
    Vec3A::X
  } else {
    Vec3A::Y
  };
  let tangent = candidate - normal * normal.dot(candidate);
  if tangent.length_squared() < DEGENERATE_FACE_EPSILON {
    Vec3A::X
  } else {
    tangent.normalize()
  }
}

/// Run the full attribute pass: normals, then UVs, then tangents.
pub fn post_process(mesh: &mut Mesh) {
  recalculate_normals(mesh);
  assign_spherical_uvs(mesh);
  calculate_tangents(mesh);
}

#[cfg(test)]
#[path = "postprocess_test.rs"]
mod postprocess_test;
