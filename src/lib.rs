//! cavegen - Engine-agnostic procedural cave map generation
//!
//! This crate turns a compact parameter set (dimensions, seed, fill ratio,
//! smoothing passes) into playable 2D level geometry:
//!
//! - **Grid generation**: a seeded cellular automaton fills a binary
//!   occupancy grid and smooths it with majority-rule passes.
//! - **Marching squares**: the grid boundary is extracted through a control
//!   node lattice, a fixed 16-case lookup table, and fan triangulation into
//!   a deduplicated vertex/index mesh.
//!
//! Rendering, debug visualization and input handling are deliberately out
//! of scope: consumers call in with plain parameters and receive plain
//! buffers back.
//!
//! # Example
//!
//! ```ignore
//! use cavegen::{generate_map, MapConfig};
//!
//! let config = MapConfig::new(128, 72)
//!   .with_seed("deep caverns")
//!   .with_fill_percent(45)
//!   .with_smooth_iterations(5);
//!
//! let map = generate_map(&config)?;
//!
//! println!(
//!   "Generated {} vertices, {} triangles",
//!   map.mesh.vertices.len(),
//!   map.mesh.triangle_count()
//! );
//! ```

pub mod grid;
pub mod types;

// Re-export commonly used items
pub use grid::{BinaryGrid, CellState};
pub use types::{ConfigError, MapConfig, MapSeed, MeshOutput};

// Marching squares module
pub mod marching_squares;
pub use marching_squares::{ControlLattice, PointSlot, CASE_TABLE};

// Synchronous pipeline entry points
pub mod pipeline;
pub use pipeline::{generate_map, generate_map_timed, GeneratedMap, PipelineStats};

// Regeneration sequencing for overlapping requests
pub mod task_queue;
pub use task_queue::{RegenCompletion, RegenRequest, RegenStage};
