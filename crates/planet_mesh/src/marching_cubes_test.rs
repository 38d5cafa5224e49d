use super::*;
use crate::density::{DensityField, HalfSpace, Sphere};
use crate::grid::VoxelGrid;
use crate::tables::CORNER_OFFSETS;

/// Unit cube voxel spanning [0,1]³ with densities sampled from `field`.
fn unit_voxel(field: &dyn DensityField) -> Voxel {
  let mut corners = [Vec3A::ZERO; 8];
  let mut values = [0.0f32; 8];
  for (i, offset) in CORNER_OFFSETS.iter().enumerate() {
    corners[i] = Vec3A::new(offset[0] as f32, offset[1] as f32, offset[2] as f32);
    values[i] = field.sample(corners[i]);
  }
  Voxel { corners, values }
}

#[test]
fn test_corner_config_bits() {
  let mut values = [-1.0f32; 8];
  assert_eq!(corner_config(&values), 0);

  values[0] = 1.0;
  assert_eq!(corner_config(&values), 0b0000_0001);

  values[6] = 2.5;
  assert_eq!(corner_config(&values), 0b0100_0001);

  let all_solid = [1.0f32; 8];
  assert_eq!(corner_config(&all_solid), 255);
}

#[test]
fn test_corner_config_zero_is_empty() {
  // Exactly zero counts as empty, only strictly positive is solid
  let values = [0.0f32; 8];
  assert_eq!(corner_config(&values), 0);
}

#[test]
fn test_interpolate_edge_linear() {
  let a = Vec3A::ZERO;
  let b = Vec3A::new(1.0, 0.0, 0.0);

  // Equal magnitudes cross at the midpoint
  let p = interpolate_edge(a, 1.0, b, -1.0);
  assert!((p.x - 0.5).abs() < 1e-6);

  // t = 0.25 when the crossing sits a quarter along
  let p = interpolate_edge(a, 0.25, b, -0.75);
  assert!((p.x - 0.25).abs() < 1e-6);
}

#[test]
fn test_interpolate_edge_degenerate_denominator() {
  let a = Vec3A::ZERO;
  let b = Vec3A::new(1.0, 0.0, 0.0);

  let p = interpolate_edge(a, 0.0, b, 0.0);
  assert_eq!(p, Vec3A::new(0.5, 0.0, 0.0));
  assert!(p.is_finite());
}

#[test]
fn test_interpolate_edge_clamped() {
  let a = Vec3A::ZERO;
  let b = Vec3A::new(1.0, 0.0, 0.0);

  // Same-sign inputs would extrapolate; the result stays on the edge
  let p = interpolate_edge(a, 1.0, b, 0.5);
  assert!((0.0..=1.0).contains(&p.x));
}

#[test]
fn test_triangulate_homogeneous_voxel_empty() {
  assert!(triangulate_voxel(&unit_voxel(&Sphere::new(100.0))).is_empty());
  assert!(triangulate_voxel(&unit_voxel(&HalfSpace::new(Vec3A::Z, -10.0))).is_empty());
}

#[test]
fn test_triangulate_slab_configuration() {
  // Solid below z = 0.5: bottom four corners at +0.5, top four at -0.5.
  // Exactly two triangles, every vertex on the z = 0.5 plane.
  let voxel = unit_voxel(&HalfSpace::new(Vec3A::Z, 0.5));
  assert_eq!(corner_config(&voxel.values), 0b0000_1111);

  let triangles = triangulate_voxel(&voxel);
  assert_eq!(triangles.len(), 2);

  for triangle in &triangles {
    for point in triangle {
      assert!((point.z - 0.5).abs() < 1e-6);
    }
  }

  // Table order is deterministic: edges (9, 8, 10) then (10, 8, 11)
  assert_eq!(triangles[0][0], Vec3A::new(1.0, 0.0, 0.5));
  assert_eq!(triangles[0][1], Vec3A::new(0.0, 0.0, 0.5));
  assert_eq!(triangles[0][2], Vec3A::new(1.0, 1.0, 0.5));
  assert_eq!(triangles[1][0], Vec3A::new(1.0, 1.0, 0.5));
  assert_eq!(triangles[1][1], Vec3A::new(0.0, 0.0, 0.5));
  assert_eq!(triangles[1][2], Vec3A::new(0.0, 1.0, 0.5));
}

#[test]
fn test_extract_surface_soup_layout() {
  let voxel = unit_voxel(&HalfSpace::new(Vec3A::Z, 0.5));
  let mesh = extract_surface(&[voxel]);

  // 2 triangles, 3 fresh vertices each, sequential indices
  assert_eq!(mesh.triangle_count(), 2);
  assert_eq!(mesh.positions.len(), 6);
  assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
  assert!(mesh.bounds.is_valid());
}

#[test]
fn test_extract_surface_empty_grid() {
  let mesh = extract_surface(&[]);
  assert!(mesh.is_empty());
  assert!(!mesh.bounds.is_valid());
}

#[test]
fn test_extract_surface_deterministic() {
  // Same input twice yields bit-identical buffers, parallelism included
  let field = Sphere::new(3.0);
  let grid = VoxelGrid::build(8, 1.0, &field);

  let a = extract_surface(grid.voxels());
  let b = extract_surface(grid.voxels());

  assert_eq!(a.positions, b.positions);
  assert_eq!(a.indices, b.indices);
}

#[test]
fn test_no_cracks_between_adjacent_voxels() {
  // Two cells sharing the x = 1 face, cut by a tilted plane. Boundary
  // vertices from each side must coincide.
  let field = HalfSpace::new(Vec3A::new(0.3, 0.2, 1.0).normalize(), 0.6);

  let mut cells = Vec::new();
  for cell_x in 0..2usize {
    let mut corners = [Vec3A::ZERO; 8];
    let mut values = [0.0f32; 8];
    for (i, offset) in CORNER_OFFSETS.iter().enumerate() {
      corners[i] = Vec3A::new(
        (cell_x + offset[0]) as f32,
        offset[1] as f32,
        offset[2] as f32,
      );
      values[i] = field.sample(corners[i]);
    }
    cells.push(Voxel { corners, values });
  }

  let on_seam = |p: &Vec3A| (p.x - 1.0).abs() < 1e-5;
  let left: Vec<Vec3A> = triangulate_voxel(&cells[0])
    .iter()
    .flatten()
    .copied()
    .filter(on_seam)
    .collect();
  let right: Vec<Vec3A> = triangulate_voxel(&cells[1])
    .iter()
    .flatten()
    .copied()
    .filter(on_seam)
    .collect();

  assert!(!left.is_empty(), "plane should cross the shared face");
  for p in &left {
    assert!(
      right.iter().any(|q| p.distance(*q) < 1e-5),
      "seam vertex {:?} has no match across the boundary",
      p
    );
  }
  for q in &right {
    assert!(
      left.iter().any(|p| q.distance(*p) < 1e-5),
      "seam vertex {:?} has no match across the boundary",
      q
    );
  }
}

#[test]
fn test_sphere_vertices_near_radius() {
  // radius 10 sphere in a 20³ grid of unit cells: every vertex within
  // one cell diagonal of the sphere surface
  let radius = 10.0;
  let field = Sphere::new(radius);
  let grid = VoxelGrid::build(20, 1.0, &field);
  let mesh = extract_surface(grid.voxels());

  assert!(!mesh.is_empty());
  for p in &mesh.positions {
    let distance = Vec3A::from_array(*p).length();
    assert!(
      (distance - radius).abs() <= 1.0,
      "vertex at distance {} strays from the surface",
      distance
    );
  }
}
