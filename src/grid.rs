//! Binary occupancy grid and the cellular automaton generator.
//!
//! A map is generated in two steps:
//!
//! 1. **Random fill**: border cells are forced to wall, interior cells are
//!    drawn from a seeded ChaCha8 stream. ChaCha8 is an explicitly specified
//!    algorithm, so identical parameters reproduce identical grids on every
//!    platform.
//! 2. **Smoothing**: repeated majority-rule passes over the 8-neighborhood.
//!    Every pass reads a snapshot of the previous pass, so the result does
//!    not depend on scan order.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{ConfigError, MapConfig};

/// Occupancy state of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
  /// Walkable space.
  Open,

  /// Solid rock.
  Wall,
}

/// 2D binary occupancy grid.
///
/// Cells are stored row-major with x slowest: `index = x * height + y`.
/// The grid is read-only once generation completes; regeneration replaces
/// it wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryGrid {
  width: usize,
  height: usize,
  cells: Vec<CellState>,
}

impl BinaryGrid {
  /// Build a grid directly from a per-cell function. Test and tooling
  /// entry point; generated maps come from [`generate`].
  pub(crate) fn from_fn(
    width: usize,
    height: usize,
    mut f: impl FnMut(usize, usize) -> CellState,
  ) -> Self {
    let mut cells = Vec::with_capacity(width * height);
    for x in 0..width {
      for y in 0..height {
        cells.push(f(x, y));
      }
    }
    Self {
      width,
      height,
      cells,
    }
  }

  /// Grid width in cells.
  pub fn width(&self) -> usize {
    self.width
  }

  /// Grid height in cells.
  pub fn height(&self) -> usize {
    self.height
  }

  #[inline]
  fn index(&self, x: usize, y: usize) -> usize {
    debug_assert!(x < self.width && y < self.height);
    x * self.height + y
  }

  /// Cell state at (x, y). Panics if out of bounds.
  #[inline]
  pub fn get(&self, x: usize, y: usize) -> CellState {
    self.cells[self.index(x, y)]
  }

  /// True if the cell at (x, y) is wall.
  #[inline]
  pub fn is_wall(&self, x: usize, y: usize) -> bool {
    self.get(x, y) == CellState::Wall
  }

  /// Run one majority-rule smoothing pass.
  ///
  /// All cells are updated from a snapshot of the prior state. Border cells
  /// are a fixed wall invariant and are not subject to the rule.
  fn smooth_pass(&mut self) {
    let snapshot = self.cells.clone();
    for x in 1..self.width - 1 {
      for y in 1..self.height - 1 {
        let walls = wall_neighbor_count(&snapshot, self.width, self.height, x, y);
        let idx = x * self.height + y;
        if walls > 4 {
          self.cells[idx] = CellState::Wall;
        } else if walls < 4 {
          self.cells[idx] = CellState::Open;
        }
        // walls == 4 keeps the prior state
      }
    }
  }
}

/// Count wall cells among the 8 neighbors of (x, y).
///
/// Positions outside the grid count as wall, which biases the automaton
/// toward closing off the map edge.
fn wall_neighbor_count(
  cells: &[CellState],
  width: usize,
  height: usize,
  x: usize,
  y: usize,
) -> u32 {
  let mut count = 0;
  for nx in (x as isize - 1)..=(x as isize + 1) {
    for ny in (y as isize - 1)..=(y as isize + 1) {
      if nx == x as isize && ny == y as isize {
        continue;
      }
      let in_bounds = nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height;
      if !in_bounds || cells[nx as usize * height + ny as usize] == CellState::Wall {
        count += 1;
      }
    }
  }
  count
}

/// Generate a cave grid from the given configuration.
///
/// Validates the configuration first; no allocation happens on invalid
/// input. The border is forced to wall unconditionally, the interior is
/// filled from the seeded stream (a cell starts open iff its draw in
/// [0, 100) exceeds `fill_percent`), then `smooth_iterations` majority
/// passes are applied.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "grid::generate")
)]
pub fn generate(config: &MapConfig) -> Result<BinaryGrid, ConfigError> {
  config.validate()?;

  let width = config.width as usize;
  let height = config.height as usize;
  let fill = u32::from(config.fill_percent);

  let mut rng = ChaCha8Rng::seed_from_u64(config.seed.to_rng_seed());

  let mut grid = BinaryGrid::from_fn(width, height, |x, y| {
    if x == 0 || x == width - 1 || y == 0 || y == height - 1 {
      CellState::Wall
    } else {
      let draw: u32 = rng.random_range(0..100);
      // Comparison direction matters: higher draws bias toward open.
      if draw > fill {
        CellState::Open
      } else {
        CellState::Wall
      }
    }
  });

  for _ in 0..config.smooth_iterations {
    grid.smooth_pass();
  }

  Ok(grid)
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
