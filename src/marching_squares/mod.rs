//! Marching squares mesh extraction.
//!
//! Converts a binary occupancy grid into a triangulated boundary mesh:
//!
//! 1. **Lattice**: one control node per grid cell, each owning two edge
//!    midpoint nodes shared with its neighbors.
//! 2. **Classification**: every 2×2 neighborhood of control nodes forms a
//!    square with a 4-bit configuration (TL=8, TR=4, BR=2, BL=1).
//! 3. **Lookup**: the configuration selects an ordered boundary polygon
//!    from the fixed 16-entry [`CASE_TABLE`].
//! 4. **Assembly**: polygons are fan-triangulated into deduplicated
//!    vertex/index buffers.

mod case_table;
mod lattice;
mod mesher;

pub use case_table::{PointSlot, CASE_TABLE};
pub use lattice::{ControlLattice, ControlNode, NodeArena, NodeId, UNASSIGNED};

use smallvec::SmallVec;

use crate::grid::BinaryGrid;
use crate::types::MeshOutput;
use mesher::MeshBuilder;

/// Generate the boundary mesh for a grid.
///
/// Builds a fresh control lattice (cell-size scaled, centered on the
/// origin) and triangulates it. The lattice is transient; only the mesh is
/// returned.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "marching_squares::generate")
)]
pub fn generate(grid: &BinaryGrid, cell_size: f32) -> MeshOutput {
  let mut lattice = ControlLattice::build(grid, cell_size);
  triangulate(&mut lattice)
}

/// Triangulate every square of the lattice into one mesh.
///
/// Squares are (W−1)×(H−1); a 1-cell-wide grid produces no geometry.
/// Vertex indices are assigned first-write-wins as squares are visited, so
/// nodes shared between adjacent squares resolve to a single vertex.
pub fn triangulate(lattice: &mut ControlLattice) -> MeshOutput {
  let width = lattice.width;
  let height = lattice.height;

  let mut builder = MeshBuilder::new(&mut lattice.nodes);

  for x in 0..width.saturating_sub(1) {
    for y in 0..height.saturating_sub(1) {
      let points = square_points(&lattice.control, height, x, y);
      builder.add_polygon(&points);
    }
  }

  builder.finish()
}

/// Resolve square (x, y): classify its four corners and map the case-table
/// slots onto arena node ids.
///
/// Corner wiring: TL=(x,y+1), TR=(x+1,y+1), BR=(x+1,y), BL=(x,y). Edge
/// nodes are borrowed from the corners that own them (left is BL.above,
/// top is TL.right, right is BR.above, bottom is BL.right), so neighboring
/// squares see the same node ids on their shared edge.
fn square_points(
  control: &[ControlNode],
  height: usize,
  x: usize,
  y: usize,
) -> SmallVec<[NodeId; 6]> {
  let at = |cx: usize, cy: usize| control[cx * height + cy];

  let top_left = at(x, y + 1);
  let top_right = at(x + 1, y + 1);
  let bottom_right = at(x + 1, y);
  let bottom_left = at(x, y);

  let mut configuration = 0usize;
  if top_left.active {
    configuration += 8;
  }
  if top_right.active {
    configuration += 4;
  }
  if bottom_right.active {
    configuration += 2;
  }
  if bottom_left.active {
    configuration += 1;
  }
  debug_assert!(configuration < 16);

  CASE_TABLE[configuration]
    .iter()
    .map(|slot| match slot {
      PointSlot::TopLeft => top_left.node,
      PointSlot::TopRight => top_right.node,
      PointSlot::BottomRight => bottom_right.node,
      PointSlot::BottomLeft => bottom_left.node,
      PointSlot::Top => top_left.right,
      PointSlot::Right => bottom_right.above,
      PointSlot::Bottom => bottom_left.right,
      PointSlot::Left => bottom_left.above,
    })
    .collect()
}
