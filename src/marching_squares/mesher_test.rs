use super::*;
use crate::grid::{BinaryGrid, CellState};
use crate::marching_squares::lattice::ControlLattice;

/// Arena with plenty of distinct nodes to triangulate against.
fn test_lattice() -> ControlLattice {
  let grid = BinaryGrid::from_fn(4, 4, |_, _| CellState::Wall);
  ControlLattice::build(&grid, 1.0)
}

fn corner_nodes(lattice: &ControlLattice, count: usize) -> Vec<NodeId> {
  let mut ids = Vec::new();
  'outer: for x in 0..lattice.width() {
    for y in 0..lattice.height() {
      if ids.len() == count {
        break 'outer;
      }
      ids.push(lattice.control(x, y).node);
    }
  }
  ids
}

#[test]
fn test_fan_triangle_counts() {
  for n in [0usize, 3, 4, 5, 6] {
    let mut lattice = test_lattice();
    let points = corner_nodes(&lattice, n);
    let mut builder = MeshBuilder::new(&mut lattice.nodes);
    builder.add_polygon(&points);
    let output = builder.finish();

    assert_eq!(output.triangle_count(), n.saturating_sub(2));
    assert_eq!(output.vertices.len(), n);
  }
}

#[test]
fn test_fan_shares_first_point() {
  let mut lattice = test_lattice();
  let points = corner_nodes(&lattice, 5);
  let mut builder = MeshBuilder::new(&mut lattice.nodes);
  builder.add_polygon(&points);
  let output = builder.finish();

  // every triangle of the fan starts at vertex 0
  assert_eq!(output.triangle_count(), 3);
  for triangle in output.indices.chunks(3) {
    assert_eq!(triangle[0], 0);
  }
}

#[test]
fn test_vertices_deduplicate_by_identity() {
  let mut lattice = test_lattice();
  let points = corner_nodes(&lattice, 4);
  let mut builder = MeshBuilder::new(&mut lattice.nodes);
  builder.add_polygon(&points);
  builder.add_polygon(&points);
  let output = builder.finish();

  // the second polygon reuses all four indices
  assert_eq!(output.vertices.len(), 4);
  assert_eq!(output.triangle_count(), 4);
  assert_eq!(&output.indices[0..6], &output.indices[6..12]);
}

#[test]
fn test_distinct_nodes_never_share_a_vertex() {
  // dedup is by node identity only: polygons over disjoint id sets yield
  // disjoint vertices, regardless of where the nodes sit
  let mut lattice = test_lattice();
  let a = corner_nodes(&lattice, 6);
  let first: Vec<NodeId> = a[0..3].to_vec();
  let second: Vec<NodeId> = a[3..6].to_vec();

  let mut builder = MeshBuilder::new(&mut lattice.nodes);
  builder.add_polygon(&first);
  builder.add_polygon(&second);
  let output = builder.finish();

  assert_eq!(output.vertices.len(), 6);
}

#[test]
fn test_assigned_indices_are_sequential_first_write_wins() {
  let mut lattice = test_lattice();
  let points = corner_nodes(&lattice, 3);
  let mut builder = MeshBuilder::new(&mut lattice.nodes);
  builder.add_polygon(&points);
  let output = builder.finish();

  assert_eq!(output.indices, vec![0, 1, 2]);
  for (i, &id) in points.iter().enumerate() {
    assert_eq!(lattice.nodes().vertex_index(id), i as i32);
  }
}

#[test]
fn test_vertex_positions_copied_from_arena() {
  let mut lattice = test_lattice();
  let points = corner_nodes(&lattice, 3);
  let expected: Vec<[f32; 3]> = points
    .iter()
    .map(|&id| lattice.nodes().position(id).to_array())
    .collect();

  let mut builder = MeshBuilder::new(&mut lattice.nodes);
  builder.add_polygon(&points);
  let output = builder.finish();

  assert_eq!(output.vertices, expected);
}

#[test]
fn test_degenerate_polygons_emit_nothing() {
  for n in [0usize, 1, 2] {
    let mut lattice = test_lattice();
    let points = corner_nodes(&lattice, n);
    let mut builder = MeshBuilder::new(&mut lattice.nodes);
    builder.add_polygon(&points);
    let output = builder.finish();
    assert_eq!(output.triangle_count(), 0);
  }
}
