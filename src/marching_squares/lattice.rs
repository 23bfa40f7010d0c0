//! Control lattice: one control node per grid cell, plus shared edge nodes.
//!
//! Nodes live in an arena addressed by [`NodeId`]. Each control node owns
//! exactly two edge-midpoint nodes ("above" and "right"); adjacent squares
//! reference those same arena entries, which is what makes shared edges
//! resolve to shared vertices downstream. Deduplication is by node identity,
//! never by position equality.

use glam::Vec3;

use crate::grid::BinaryGrid;

/// Sentinel for a node that has not been assigned a mesh vertex yet.
pub const UNASSIGNED: i32 = -1;

/// Stable index of a node in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
  #[inline]
  fn index(self) -> usize {
    self.0 as usize
  }
}

/// Arena of boundary nodes: world positions plus a write-once vertex index.
#[derive(Clone, Debug)]
pub struct NodeArena {
  positions: Vec<Vec3>,
  vertex_index: Vec<i32>,
}

impl NodeArena {
  fn with_capacity(capacity: usize) -> Self {
    Self {
      positions: Vec::with_capacity(capacity),
      vertex_index: Vec::with_capacity(capacity),
    }
  }

  fn push(&mut self, position: Vec3) -> NodeId {
    let id = NodeId(self.positions.len() as u32);
    self.positions.push(position);
    self.vertex_index.push(UNASSIGNED);
    id
  }

  /// Number of nodes in the arena.
  pub fn len(&self) -> usize {
    self.positions.len()
  }

  /// Iterate all node ids in the arena.
  pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
    (0..self.positions.len() as u32).map(NodeId)
  }

  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  /// World position of a node.
  #[inline]
  pub fn position(&self, id: NodeId) -> Vec3 {
    self.positions[id.index()]
  }

  /// Assigned mesh vertex index, or [`UNASSIGNED`].
  #[inline]
  pub fn vertex_index(&self, id: NodeId) -> i32 {
    self.vertex_index[id.index()]
  }

  /// Record the mesh vertex index for a node. First write wins; callers
  /// must check [`Self::vertex_index`] before assigning.
  #[inline]
  pub(super) fn set_vertex_index(&mut self, id: NodeId, index: i32) {
    debug_assert_eq!(self.vertex_index[id.index()], UNASSIGNED);
    self.vertex_index[id.index()] = index;
  }
}

/// Lattice point mirroring one grid cell, with its two owned edge nodes.
#[derive(Clone, Copy, Debug)]
pub struct ControlNode {
  /// The corner node itself.
  pub node: NodeId,

  /// True if the mirrored grid cell is wall.
  pub active: bool,

  /// Edge midpoint half a cell toward +Z.
  pub above: NodeId,

  /// Edge midpoint half a cell toward +X.
  pub right: NodeId,
}

/// Full control lattice for a grid: W×H control nodes and their edge nodes.
///
/// Transient: rebuilt for every mesh request, holds no state across calls.
#[derive(Clone, Debug)]
pub struct ControlLattice {
  pub(super) width: usize,
  pub(super) height: usize,
  pub(super) nodes: NodeArena,
  pub(super) control: Vec<ControlNode>,
}

impl ControlLattice {
  /// Build the lattice for a grid, centered on the world origin.
  ///
  /// Control node (x, y) sits at
  /// `(-world_w/2 + x*cs + cs/2, 0, -world_h/2 + y*cs + cs/2)` on the XZ
  /// plane, where `world_w = width * cs`.
  pub fn build(grid: &BinaryGrid, cell_size: f32) -> Self {
    let width = grid.width();
    let height = grid.height();
    let world_w = width as f32 * cell_size;
    let world_h = height as f32 * cell_size;
    let half = cell_size / 2.0;

    let mut nodes = NodeArena::with_capacity(width * height * 3);
    let mut control = Vec::with_capacity(width * height);

    for x in 0..width {
      for y in 0..height {
        let position = Vec3::new(
          -world_w / 2.0 + x as f32 * cell_size + half,
          0.0,
          -world_h / 2.0 + y as f32 * cell_size + half,
        );

        let node = nodes.push(position);
        let above = nodes.push(position + Vec3::Z * half);
        let right = nodes.push(position + Vec3::X * half);

        control.push(ControlNode {
          node,
          active: grid.is_wall(x, y),
          above,
          right,
        });
      }
    }

    Self {
      width,
      height,
      nodes,
      control,
    }
  }

  /// Lattice width in control nodes (same as grid width).
  pub fn width(&self) -> usize {
    self.width
  }

  /// Lattice height in control nodes (same as grid height).
  pub fn height(&self) -> usize {
    self.height
  }

  /// Control node for grid cell (x, y).
  #[inline]
  pub fn control(&self, x: usize, y: usize) -> ControlNode {
    self.control[x * self.height + y]
  }

  /// Read access to the node arena.
  pub fn nodes(&self) -> &NodeArena {
    &self.nodes
  }
}

#[cfg(test)]
#[path = "lattice_test.rs"]
mod lattice_test;
