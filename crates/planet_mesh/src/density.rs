//! Density fields for surface extraction.
//!
//! A density field is any scalar function of 3D position. Positive values
//! are solid (inside the surface), negative values are empty space; the
//! extractor triangulates the zero level set. Fields are swappable
//! without touching the extractor.

use glam::Vec3A;
use noise::{NoiseFn, Perlin};

/// Scalar field sampled at voxel corners.
pub trait DensityField {
  /// Density at `position`. Positive = solid, negative = empty.
  fn sample(&self, position: Vec3A) -> f32;
}

/// Analytic sphere: `radius - distance(position, center)`.
///
/// Simple reference case with radial symmetry, also the noise-free path
/// of the planet field.
#[derive(Clone, Debug)]
pub struct Sphere {
  pub center: Vec3A,
  pub radius: f32,
}

impl Sphere {
  pub fn new(radius: f32) -> Self {
    Self {
      center: Vec3A::ZERO,
      radius,
    }
  }

  pub fn with_center(mut self, center: Vec3A) -> Self {
    self.center = center;
    self
  }
}

impl DensityField for Sphere {
  fn sample(&self, position: Vec3A) -> f32 {
    self.radius - position.distance(self.center)
  }
}

/// Half-space bounded by a plane: `offset - dot(position, normal)`.
///
/// Solid on the side the normal points away from. Useful in tests since
/// the zero crossing is a flat, predictable surface.
#[derive(Clone, Debug)]
pub struct HalfSpace {
  pub normal: Vec3A,
  pub offset: f32,
}

impl HalfSpace {
  pub fn new(normal: Vec3A, offset: f32) -> Self {
    Self { normal, offset }
  }
}

impl DensityField for HalfSpace {
  fn sample(&self, position: Vec3A) -> f32 {
    self.offset - position.dot(self.normal)
  }
}

/// Noise-perturbed sphere, the reference planet field:
/// `(radius - distance) + amplitude * perlin3(position * scale)`.
///
/// Deterministic for a given seed. With `amplitude == 0` it degenerates
/// to [`Sphere`].
#[derive(Clone)]
pub struct NoisySphere {
  pub center: Vec3A,
  pub radius: f32,
  /// Spatial frequency multiplier; smaller = larger surface features.
  pub noise_scale: f32,
  /// Surface perturbation magnitude in world units.
  pub noise_amplitude: f32,
  perlin: Perlin,
}

impl NoisySphere {
  pub fn new(radius: f32, seed: u32) -> Self {
    Self {
      center: Vec3A::ZERO,
      radius,
      noise_scale: 0.05,
      noise_amplitude: 5.0,
      perlin: Perlin::new(seed),
    }
  }

  pub fn with_center(mut self, center: Vec3A) -> Self {
    self.center = center;
    self
  }

  pub fn with_noise(mut self, scale: f32, amplitude: f32) -> Self {
    self.noise_scale = scale;
    self.noise_amplitude = amplitude;
    self
  }
}

impl DensityField for NoisySphere {
  fn sample(&self, position: Vec3A) -> f32 {
    let base = self.radius - position.distance(self.center);
    if self.noise_amplitude == 0.0 {
      return base;
    }

    let p = position * self.noise_scale;
    let noise = self.perlin.get([p.x as f64, p.y as f64, p.z as f64]) as f32;
    base + self.noise_amplitude * noise
  }
}

#[cfg(test)]
#[path = "density_test.rs"]
mod density_test;
