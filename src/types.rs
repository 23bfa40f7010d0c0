//! Core configuration and output types for cave map generation.

use thiserror::Error;

/// Seed for the deterministic map generator.
///
/// Text seeds are hashed with FNV-1a 64 so the same string reproduces the
/// same map on every platform; integer seeds are used as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapSeed {
  /// Raw 64-bit seed value.
  Value(u64),

  /// Human-readable seed, hashed deterministically.
  Text(String),
}

/// FNV-1a 64 offset basis.
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64 prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

impl MapSeed {
  /// Resolve to the 64-bit value that seeds the RNG.
  pub fn to_rng_seed(&self) -> u64 {
    match self {
      MapSeed::Value(v) => *v,
      MapSeed::Text(s) => {
        // FNV-1a: portable, stable across platforms and releases.
        let mut hash = FNV_OFFSET;
        for byte in s.as_bytes() {
          hash ^= u64::from(*byte);
          hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
      }
    }
  }

  /// Fresh non-deterministic seed (the "random seed" mode).
  pub fn random() -> Self {
    MapSeed::Value(rand::random())
  }
}

impl Default for MapSeed {
  fn default() -> Self {
    MapSeed::Value(0)
  }
}

impl From<u64> for MapSeed {
  fn from(value: u64) -> Self {
    MapSeed::Value(value)
  }
}

impl From<&str> for MapSeed {
  fn from(value: &str) -> Self {
    MapSeed::Text(value.to_owned())
  }
}

/// Invalid generation parameters, rejected before any work is done.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
  /// Grid dimensions must both be positive.
  #[error("map dimensions must be positive, got {width}x{height}")]
  InvalidDimensions { width: u32, height: u32 },

  /// Fill percent is a percentage, 0..=100.
  #[error("fill percent must be in 0..=100, got {0}")]
  FillPercentOutOfRange(u8),

  /// Cell size must be a positive finite world-space length.
  #[error("cell size must be positive and finite, got {0}")]
  InvalidCellSize(f32),
}

/// Configuration for cave map generation.
#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
  /// Grid width in cells.
  pub width: u32,

  /// Grid height in cells.
  pub height: u32,

  /// Seed for the deterministic fill.
  pub seed: MapSeed,

  /// Chance (0..=100) that an interior cell starts as wall.
  pub fill_percent: u8,

  /// Number of cellular automaton smoothing passes.
  pub smooth_iterations: u32,

  /// World-space size of one grid cell.
  pub cell_size: f32,
}

impl Default for MapConfig {
  fn default() -> Self {
    Self {
      width: 64,
      height: 64,
      seed: MapSeed::default(),
      fill_percent: 45,
      smooth_iterations: 5,
      cell_size: 1.0,
    }
  }
}

impl MapConfig {
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      width,
      height,
      ..Self::default()
    }
  }

  pub fn with_seed(mut self, seed: impl Into<MapSeed>) -> Self {
    self.seed = seed.into();
    self
  }

  pub fn with_fill_percent(mut self, fill_percent: u8) -> Self {
    self.fill_percent = fill_percent;
    self
  }

  pub fn with_smooth_iterations(mut self, smooth_iterations: u32) -> Self {
    self.smooth_iterations = smooth_iterations;
    self
  }

  pub fn with_cell_size(mut self, cell_size: f32) -> Self {
    self.cell_size = cell_size;
    self
  }

  /// Check all parameters, rejecting invalid configuration before any
  /// allocation happens.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.width == 0 || self.height == 0 {
      return Err(ConfigError::InvalidDimensions {
        width: self.width,
        height: self.height,
      });
    }
    if self.fill_percent > 100 {
      return Err(ConfigError::FillPercentOutOfRange(self.fill_percent));
    }
    if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
      return Err(ConfigError::InvalidCellSize(self.cell_size));
    }
    Ok(())
  }
}

/// Mesh generation result: plain buffers ready for upload by any renderer.
///
/// Normals are not computed here; consumers derive them from the triangle
/// winding.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshOutput {
  /// Vertex positions (XZ plane, y = 0).
  pub vertices: Vec<[f32; 3]>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.indices.clear();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
