//! planet_mesh - Marching Cubes iso-surface extraction for procedural planets
//!
//! This crate turns a scalar density field sampled on a regular 3D grid into
//! a triangle mesh via the classic Marching Cubes algorithm. The reference
//! field is a noise-perturbed sphere, giving a procedurally generated planet,
//! but any [`DensityField`] implementation plugs in.
//!
//! # Features
//!
//! - **Marching Cubes**: Full 256-configuration table-driven extraction
//!   with linear edge interpolation
//! - **Shared corner sampling**: Each lattice point is sampled exactly once,
//!   so neighboring cells agree bit-for-bit and the surface is crack-free
//! - **Parallel extraction**: Per-cell triangulation fans out over rayon
//!   with deterministic, order-preserving merge
//! - **Attribute pass**: Geometric normals, spherical UVs, and UV-derived
//!   tangents
//!
//! # Example
//!
//! ```ignore
//! use planet_mesh::{generate_planet, SurfaceConfig};
//!
//! let config = SurfaceConfig::new()
//!   .with_grid_size(20)
//!   .with_radius(40.0)
//!   .with_seed(7);
//!
//! let mesh = generate_planet(&config)?;
//!
//! println!("Generated {} vertices, {} triangles",
//!     mesh.positions.len(), mesh.triangle_count());
//! ```

pub mod tables;
pub mod types;

// Re-export commonly used items
pub use tables::{CORNER_OFFSETS, EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
pub use types::{ConfigError, Mesh, MinMaxAabb, SurfaceConfig};

// Density fields sampled at voxel corners
pub mod density;
pub use density::{DensityField, HalfSpace, NoisySphere, Sphere};

// Voxel grid construction
pub mod grid;
pub use grid::{Voxel, VoxelGrid};

// Marching Cubes extraction
pub mod marching_cubes;
pub use marching_cubes::{extract_surface, triangulate_voxel};

// Mesh attribute post-processing
pub mod postprocess;
pub use postprocess::post_process;

// End-to-end generation
pub mod generator;
pub use generator::{generate_planet, generate_surface, generate_surface_timed, GenerationStats};
