//! Vertex assignment and fan triangulation into the output buffers.

use super::lattice::{NodeArena, NodeId, UNASSIGNED};
use crate::types::MeshOutput;

/// Accumulates the global vertex/index buffers while triangulating squares.
///
/// A node whose vertex index is still unassigned gets the next sequential
/// index and its position is appended; a node seen before reuses its index.
/// Identity (the [`NodeId`]) is the only deduplication mechanism: two
/// distinct nodes at the same position are never merged.
pub(super) struct MeshBuilder<'a> {
  arena: &'a mut NodeArena,
  output: MeshOutput,
}

impl<'a> MeshBuilder<'a> {
  pub fn new(arena: &'a mut NodeArena) -> Self {
    Self {
      arena,
      output: MeshOutput::new(),
    }
  }

  /// Triangulate one boundary polygon as a fan from its first point.
  ///
  /// An n-point polygon contributes max(n - 2, 0) triangles; empty and
  /// degenerate cases contribute no geometry.
  pub fn add_polygon(&mut self, points: &[NodeId]) {
    self.assign_vertices(points);

    if points.len() >= 3 {
      self.emit_triangle(points[0], points[1], points[2]);
    }
    if points.len() >= 4 {
      self.emit_triangle(points[0], points[2], points[3]);
    }
    if points.len() >= 5 {
      self.emit_triangle(points[0], points[3], points[4]);
    }
    if points.len() >= 6 {
      self.emit_triangle(points[0], points[4], points[5]);
    }
  }

  fn assign_vertices(&mut self, points: &[NodeId]) {
    for &id in points {
      if self.arena.vertex_index(id) == UNASSIGNED {
        let index = self.output.vertices.len() as i32;
        self.arena.set_vertex_index(id, index);
        self.output.vertices.push(self.arena.position(id).to_array());
      }
    }
  }

  fn emit_triangle(&mut self, a: NodeId, b: NodeId, c: NodeId) {
    self.output.indices.push(self.arena.vertex_index(a) as u32);
    self.output.indices.push(self.arena.vertex_index(b) as u32);
    self.output.indices.push(self.arena.vertex_index(c) as u32);
  }

  pub fn finish(self) -> MeshOutput {
    self.output
  }
}

#[cfg(test)]
#[path = "mesher_test.rs"]
mod mesher_test;
