use super::*;
use crate::density::HalfSpace;
use crate::grid::VoxelGrid;
use crate::marching_cubes::extract_surface;

use glam::Vec3A;

/// Single quad in the xy plane, two triangles, no shared vertices.
fn flat_quad() -> Mesh {
  let mut mesh = Mesh::new();
  mesh.positions = vec![
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0],
  ];
  mesh.indices = vec![0, 1, 2, 3, 4, 5];
  for p in &mesh.positions {
    mesh.bounds.encapsulate(*p);
  }
  mesh
}

#[test]
fn test_normals_flat_quad() {
  let mut mesh = flat_quad();
  recalculate_normals(&mut mesh);

  assert_eq!(mesh.normals.len(), mesh.positions.len());
  for n in &mesh.normals {
    // CCW winding in the xy plane faces +Z
    assert!((n[0]).abs() < 1e-6);
    assert!((n[1]).abs() < 1e-6);
    assert!((n[2] - 1.0).abs() < 1e-6);
  }
}

#[test]
fn test_normals_are_unit_length() {
  let field = HalfSpace::new(Vec3A::new(0.2, 1.0, 0.4).normalize(), 0.3);
  let grid = VoxelGrid::build(4, 1.0, &field);
  let mut mesh = extract_surface(grid.voxels());
  recalculate_normals(&mut mesh);

  assert!(!mesh.is_empty());
  for n in &mesh.normals {
    let length = Vec3A::from_array(*n).length();
    assert!((length - 1.0).abs() < 1e-4);
  }
}

#[test]
fn test_normals_degenerate_triangle_fallback() {
  // Zero-area triangle contributes nothing; its vertices get +Y
  let mut mesh = Mesh::new();
  mesh.positions = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
  mesh.indices = vec![0, 1, 2];
  recalculate_normals(&mut mesh);

  for n in &mesh.normals {
    assert_eq!(*n, [0.0, 1.0, 0.0]);
  }
}

#[test]
fn test_uvs_in_unit_range() {
  let mut mesh = flat_quad();
  assign_spherical_uvs(&mut mesh);

  assert_eq!(mesh.uvs.len(), mesh.positions.len());
  for uv in &mesh.uvs {
    assert!((0.0..=1.0).contains(&uv[0]), "u out of range: {}", uv[0]);
    assert!((0.0..=1.0).contains(&uv[1]), "v out of range: {}", uv[1]);
  }
}

#[test]
fn test_uvs_poles_and_origin() {
  let mut mesh = Mesh::new();
  mesh.positions = vec![
    [0.0, 5.0, 0.0],  // north pole
    [0.0, -5.0, 0.0], // south pole
    [0.0, 0.0, 0.0],  // degenerate
  ];
  assign_spherical_uvs(&mut mesh);

  assert!((mesh.uvs[0][1] - 0.0).abs() < 1e-6);
  assert!((mesh.uvs[1][1] - 1.0).abs() < 1e-6);
  assert_eq!(mesh.uvs[2], [0.0, 0.0]);
}

#[test]
fn test_tangents_orthogonal_to_normals() {
  let field = HalfSpace::new(Vec3A::new(0.1, 0.9, 0.3).normalize(), 0.2);
  let grid = VoxelGrid::build(4, 1.0, &field);
  let mut mesh = extract_surface(grid.voxels());
  post_process(&mut mesh);

  assert_eq!(mesh.tangents.len(), mesh.positions.len());
  for i in 0..mesh.positions.len() {
    let n = Vec3A::from_array(mesh.normals[i]);
    let t = Vec3A::from_array(mesh.tangents[i]);
    assert!((t.length() - 1.0).abs() < 1e-4, "tangent not unit length");
    assert!(n.dot(t).abs() < 1e-3, "tangent not orthogonal to normal");
  }
}

#[test]
fn test_tangents_fallback_is_orthonormal() {
  for normal in [Vec3A::X, Vec3A::Y, Vec3A::Z, Vec3A::new(0.6, -0.8, 0.0)] {
    let t = fallback_tangent(normal);
    assert!((t.length() - 1.0).abs() < 1e-6);
    assert!(normal.dot(t).abs() < 1e-6);
  }
}

#[test]
fn test_post_process_fills_all_overlays() {
  let mut mesh = flat_quad();
  post_process(&mut mesh);

  assert_eq!(mesh.normals.len(), 6);
  assert_eq!(mesh.uvs.len(), 6);
  assert_eq!(mesh.tangents.len(), 6);

  // Positions and indices untouched
  assert_eq!(mesh.positions.len(), 6);
  assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_post_process_empty_mesh() {
  let mut mesh = Mesh::new();
  post_process(&mut mesh);
  assert!(mesh.normals.is_empty());
  assert!(mesh.uvs.is_empty());
  assert!(mesh.tangents.is_empty());
}
