//! Clutter penalty derived from distance to the nearest blocked cell.
//!
//! The field lets the search prefer routes that keep away from obstacles
//! without forbidding cells that are merely close to one. Building it costs
//! O(rows · cols · r²) with `r = min(radius, max(rows, cols))`, so the router
//! only does so when a non-zero proximity weight is configured.

use routekit_core::Cell;

use crate::grid::Grid;

/// Per-cell score in `[0, 1]`; 1 on blocked cells, falling to 0 at the
/// influence radius.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityField {
    rows: usize,
    cols: usize,
    scores: Vec<f64>,
}

impl ProximityField {
    pub fn build(grid: &Grid, influence_radius_cells: usize) -> Self {
        let rows = grid.rows();
        let cols = grid.cols();
        let radius = influence_radius_cells;
        // No ring past the grid's larger side can reach another cell.
        let reach = radius.min(rows.max(cols));
        let mut scores = vec![0.0; rows * cols];

        for row in 0..rows {
            for col in 0..cols {
                let cell = Cell::new(row, col);
                let score = if grid.is_blocked(cell) {
                    1.0
                } else {
                    match nearest_blocked(grid, cell, reach) {
                        Some(d) => ((radius - d) as f64 / radius as f64).clamp(0.0, 1.0),
                        None => 0.0,
                    }
                };
                scores[row * cols + col] = score;
            }
        }

        Self { rows, cols, scores }
    }

    /// Score of `cell`; cells outside the field score 0.
    pub fn score(&self, cell: Cell) -> f64 {
        if cell.row < self.rows && cell.col < self.cols {
            self.scores[cell.row * self.cols + cell.col]
        } else {
            0.0
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

/// Chebyshev distance from `cell` to the closest blocked cell within `radius`.
///
/// Rings are scanned outwards, so the first ring holding a blocked cell is
/// the minimum.
fn nearest_blocked(grid: &Grid, cell: Cell, radius: usize) -> Option<usize> {
    let row = cell.row as isize;
    let col = cell.col as isize;

    for d in 1..=radius as isize {
        for dr in -d..=d {
            for dc in -d..=d {
                if dr.abs() != d && dc.abs() != d {
                    continue;
                }
                let (r, c) = (row + dr, col + dc);
                if r < 0 || c < 0 {
                    continue;
                }
                if grid.is_blocked(Cell::new(r as usize, c as usize)) {
                    return Some(d as usize);
                }
            }
        }
    }
    None
}
