//! End-to-end generation pipeline: parameters → grid → mesh.
//!
//! Fully synchronous and single-threaded; each invocation owns its grid,
//! lattice and mesh, and nothing is published until the whole pipeline has
//! completed.

use web_time::Instant;

use crate::grid::{self, BinaryGrid};
use crate::marching_squares;
use crate::types::{ConfigError, MapConfig, MeshOutput};

/// Artifacts of one generation run.
///
/// The raw grid is included for consumers that want occupancy data directly
/// (debug overlays, pathfinding); the mesh is ready for upload to any
/// rendering system.
#[derive(Clone, Debug)]
pub struct GeneratedMap {
  pub grid: BinaryGrid,
  pub mesh: MeshOutput,
}

/// Per-stage timings for one pipeline run.
#[derive(Clone, Copy, Debug, Default)]
pub struct PipelineStats {
  /// Grid fill + smoothing time in microseconds.
  pub grid_time_us: u64,

  /// Lattice build + triangulation time in microseconds.
  pub mesh_time_us: u64,
}

/// Run the full pipeline for one configuration.
///
/// Configuration is validated before any work happens; invalid input
/// performs no partial generation.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "pipeline::generate_map")
)]
pub fn generate_map(config: &MapConfig) -> Result<GeneratedMap, ConfigError> {
  let grid = grid::generate(config)?;
  let mesh = marching_squares::generate(&grid, config.cell_size);
  Ok(GeneratedMap { grid, mesh })
}

/// Run the full pipeline and report per-stage timings.
pub fn generate_map_timed(
  config: &MapConfig,
) -> Result<(GeneratedMap, PipelineStats), ConfigError> {
  let grid_start = Instant::now();
  let grid = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("grid_stage").entered();
    grid::generate(config)?
  };
  let grid_time_us = grid_start.elapsed().as_micros() as u64;

  let mesh_start = Instant::now();
  let mesh = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("mesh_stage").entered();
    marching_squares::generate(&grid, config.cell_size)
  };
  let mesh_time_us = mesh_start.elapsed().as_micros() as u64;

  Ok((
    GeneratedMap { grid, mesh },
    PipelineStats {
      grid_time_us,
      mesh_time_us,
    },
  ))
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
