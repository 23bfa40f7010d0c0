//! Precomputed marching squares case table.
//!
//! Maps the 4-bit square configuration to the ordered boundary polygon for
//! that case. Configuration bit weights:
//!
//! ```text
//! 8 ── top-left      4 ── top-right
//! 1 ── bottom-left   2 ── bottom-right
//!
//!   TL ──── Top ──── TR
//!    │                │
//!   Left            Right
//!    │                │
//!   BL ─── Bottom ── BR
//! ```
//!
//! Every entry lists its points in a consistent direction around the
//! boundary, so fan triangulation from the first point yields uniformly
//! wound triangles. The two saddle configurations (5 and 10, diagonal
//! corners active) use the connected 6-point hexagon rather than two
//! disjoint triangles; no extra sampling is available to disambiguate them,
//! so the connected interpretation is used deliberately.

/// Symbolic boundary point of a square: a corner control node or an edge
/// midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointSlot {
  /// Corner control node at (x, y+1).
  TopLeft,
  /// Corner control node at (x+1, y+1).
  TopRight,
  /// Corner control node at (x+1, y).
  BottomRight,
  /// Corner control node at (x, y).
  BottomLeft,
  /// Edge midpoint between the top corners.
  Top,
  /// Edge midpoint between the right corners.
  Right,
  /// Edge midpoint between the bottom corners.
  Bottom,
  /// Edge midpoint between the left corners.
  Left,
}

use PointSlot::*;

/// Boundary polygon per configuration, indexed by the 4-bit code.
pub const CASE_TABLE: [&[PointSlot]; 16] = [
  &[],                                                 // 0b0000: fully open
  &[Bottom, BottomLeft, Left],                         // 0b0001: BL corner
  &[Right, BottomRight, Bottom],                       // 0b0010: BR corner
  &[Right, BottomRight, BottomLeft, Left],             // 0b0011: bottom half
  &[Top, TopRight, Right],                             // 0b0100: TR corner
  &[Top, TopRight, Right, Bottom, BottomLeft, Left],   // 0b0101: saddle TR+BL
  &[Top, TopRight, BottomRight, Bottom],               // 0b0110: right half
  &[Top, TopRight, BottomRight, BottomLeft, Left],     // 0b0111: all but TL
  &[TopLeft, Top, Left],                               // 0b1000: TL corner
  &[TopLeft, Top, Bottom, BottomLeft],                 // 0b1001: left half
  &[TopLeft, Top, Right, BottomRight, Bottom, Left],   // 0b1010: saddle TL+BR
  &[TopLeft, Top, Right, BottomRight, BottomLeft],     // 0b1011: all but TR
  &[TopLeft, TopRight, Right, Left],                   // 0b1100: top half
  &[TopLeft, TopRight, Right, Bottom, BottomLeft],     // 0b1101: all but BR
  &[TopLeft, TopRight, BottomRight, Bottom, Left],     // 0b1110: all but BL
  &[TopLeft, TopRight, BottomRight, BottomLeft],       // 0b1111: fully solid
];

#[cfg(test)]
#[path = "case_table_test.rs"]
mod case_table_test;
