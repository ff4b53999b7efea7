//! Uniform occupancy grid built from blocking rectangles.
//!
//! The grid covers the query (start, end and every blocking rectangle) plus
//! padding. A cell is blocked when any point of it lies inside a blocking
//! rectangle grown by the safety margin, so routes keep clearance from edges.

use routekit_core::{Cell, Point, Rect, RouteError};
use routekit_settings::RoutingSettings;
use tracing::trace;

/// Grids larger than this are refused instead of allocated.
pub const MAX_GRID_CELLS: usize = 4_000_000;

/// Row-major boolean occupancy grid anchored at a world origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    origin: Point,
    cell_size: f64,
    rows: usize,
    cols: usize,
    blocked: Vec<bool>,
}

impl Grid {
    /// An all-free grid. `cell_size` must be positive.
    pub fn new(origin: Point, cell_size: f64, rows: usize, cols: usize) -> Self {
        Self {
            origin,
            cell_size,
            rows,
            cols,
            blocked: vec![false; rows * cols],
        }
    }

    /// Rasterize `blocking` over the bounds of the whole query.
    pub fn rasterize(
        blocking: &[Rect],
        start: &Rect,
        end: &Rect,
        settings: &RoutingSettings,
    ) -> Result<Self, RouteError> {
        let cell_size = settings.cell_size;
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(RouteError::invalid_config("cell_size", "must be > 0"));
        }

        let bounds = blocking
            .iter()
            .fold(start.union(end), |acc, r| acc.union(r))
            .expanded(settings.padding);

        let cols = (bounds.width / cell_size).ceil();
        let rows = (bounds.height / cell_size).ceil();
        if !(cols.is_finite() && rows.is_finite()) || cols < 1.0 || rows < 1.0 {
            return Err(RouteError::degenerate(format!(
                "grid of {} x {} cells",
                rows, cols
            )));
        }
        if rows * cols > MAX_GRID_CELLS as f64 {
            return Err(RouteError::degenerate(format!(
                "grid of {} x {} cells exceeds {} cells",
                rows, cols, MAX_GRID_CELLS
            )));
        }

        let mut grid = Grid::new(bounds.min(), cell_size, rows as usize, cols as usize);
        for rect in blocking {
            grid.block_rect(&rect.expanded(settings.safety_margin));
        }

        trace!(
            rows = grid.rows,
            cols = grid.cols,
            blocked = grid.blocked_count(),
            "rasterized routing grid"
        );
        Ok(grid)
    }

    /// Mark every cell touched by `rect`.
    pub fn block_rect(&mut self, rect: &Rect) {
        let Some((r0, r1)) = self.span(rect.y, rect.y + rect.height, self.origin.y, self.rows)
        else {
            return;
        };
        let Some((c0, c1)) = self.span(rect.x, rect.x + rect.width, self.origin.x, self.cols)
        else {
            return;
        };
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.blocked[row * self.cols + col] = true;
            }
        }
    }

    /// Clamped index range covered by `[lo, hi]` on one axis.
    fn span(&self, lo: f64, hi: f64, origin: f64, len: usize) -> Option<(usize, usize)> {
        let first = ((lo - origin) / self.cell_size).floor();
        let last = ((hi - origin) / self.cell_size).floor();
        if !(first.is_finite() && last.is_finite()) || last < 0.0 || first >= len as f64 {
            return None;
        }
        let first = first.max(0.0) as usize;
        let last = (last as usize).min(len - 1);
        Some((first, last))
    }

    pub fn block(&mut self, cell: Cell) {
        if self.contains(cell) {
            self.blocked[cell.row * self.cols + cell.col] = true;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        if self.contains(cell) {
            self.blocked[cell.row * self.cols + cell.col] = false;
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// World rectangle covered by the grid.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.cols as f64 * self.cell_size,
            self.rows as f64 * self.cell_size,
        )
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Row-major index of `cell`; the caller guarantees it is in range.
    pub fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Blocked state of `cell`; cells outside the grid are free.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.contains(cell) && self.blocked[self.index(cell)]
    }

    /// Blocked state of the cell under a world point; outside the grid is free.
    pub fn is_blocked_at(&self, p: &Point) -> bool {
        self.cell_containing(p)
            .map(|cell| self.is_blocked(cell))
            .unwrap_or(false)
    }

    /// Cell under a world point, if the point is on the grid.
    pub fn cell_containing(&self, p: &Point) -> Option<Cell> {
        let col = ((p.x - self.origin.x) / self.cell_size).floor();
        let row = ((p.y - self.origin.y) / self.cell_size).floor();
        if !(col.is_finite() && row.is_finite()) || col < 0.0 || row < 0.0 {
            return None;
        }
        let cell = Cell::new(row as usize, col as usize);
        self.contains(cell).then_some(cell)
    }

    /// Cell under a world point, clamped onto the grid.
    pub fn cell_at(&self, p: &Point) -> Cell {
        let clamp = |v: f64, len: usize| -> usize {
            if v.is_nan() || v < 0.0 {
                0
            } else {
                (v as usize).min(len.saturating_sub(1))
            }
        };
        Cell::new(
            clamp(((p.y - self.origin.y) / self.cell_size).floor(), self.rows),
            clamp(((p.x - self.origin.x) / self.cell_size).floor(), self.cols),
        )
    }

    /// World-space center of a cell.
    pub fn cell_center(&self, cell: Cell) -> Point {
        Point::new(
            self.origin.x + (cell.col as f64 + 0.5) * self.cell_size,
            self.origin.y + (cell.row as f64 + 0.5) * self.cell_size,
        )
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|b| **b).count()
    }
}
