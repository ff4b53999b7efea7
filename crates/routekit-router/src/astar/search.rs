//! A* search over the occupancy grid.

use routekit_core::{Cell, NoRouteReason};
use smallvec::SmallVec;
use std::collections::BinaryHeap;
use std::f64::consts::SQRT_2;
use tracing::{debug, trace};

use super::types::{OpenEntry, SearchConfig, SearchNode};
use crate::grid::Grid;
use crate::proximity::ProximityField;

/// Orthogonal moves first, then diagonals. The order fixes discovery
/// sequence and therefore tie-breaking.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// One search run over a grid.
///
/// The search may clear the start and end cells of the grid it borrows.
pub struct GridSearch<'a> {
    grid: &'a mut Grid,
    field: Option<&'a ProximityField>,
    config: SearchConfig,
    expansions: usize,
}

impl<'a> GridSearch<'a> {
    pub fn new(
        grid: &'a mut Grid,
        field: Option<&'a ProximityField>,
        config: SearchConfig,
    ) -> Self {
        Self {
            grid,
            field,
            config,
            expansions: 0,
        }
    }

    /// Nodes expanded by the last call to [`GridSearch::find_path`].
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Find a minimum-cost cell path from `start` to `end`, both included.
    pub fn find_path(&mut self, start: Cell, end: Cell) -> Result<Vec<Cell>, NoRouteReason> {
        self.expansions = 0;
        trace!(
            "[AStar] find_path: start=({},{}) end=({},{})",
            start.row,
            start.col,
            end.row,
            end.col
        );

        if !self.grid.contains(start) || !self.grid.contains(end) {
            debug!("[AStar] start or end outside the grid");
            return Err(NoRouteReason::OutOfBounds);
        }

        for cell in [start, end] {
            if self.grid.is_blocked(cell) {
                debug!(
                    "[AStar] clearing blocked endpoint cell ({},{})",
                    cell.row, cell.col
                );
                self.grid.clear(cell);
            }
        }

        if start == end {
            return Ok(vec![start]);
        }

        let cell_count = self.grid.rows() * self.grid.cols();
        let mut nodes: Vec<SearchNode> = Vec::new();
        let mut node_at: Vec<Option<usize>> = vec![None; cell_count];
        let mut closed = vec![false; cell_count];
        let mut open = BinaryHeap::new();

        let h_start = heuristic(start, end);
        nodes.push(SearchNode {
            cell: start,
            g_cost: 0.0,
            f_cost: h_start,
            parent: None,
            seq: 0,
        });
        node_at[self.grid.index(start)] = Some(0);
        open.push(OpenEntry {
            node: 0,
            g_cost: 0.0,
            f_cost: h_start,
            seq: 0,
        });

        while let Some(entry) = open.pop() {
            let current = nodes[entry.node].clone();
            let current_index = self.grid.index(current.cell);
            if closed[current_index] || entry.g_cost > current.g_cost {
                continue;
            }

            if self.expansions >= self.config.max_expansions {
                debug!(
                    "[AStar] FAILED: expansion cap of {} reached",
                    self.config.max_expansions
                );
                return Err(NoRouteReason::ExpansionCapReached {
                    cap: self.config.max_expansions,
                });
            }
            self.expansions += 1;
            closed[current_index] = true;

            if current.cell == end {
                let path = reconstruct(&nodes, entry.node);
                trace!(
                    "[AStar] SUCCESS: {} cells, cost={:.2}, expansions={}",
                    path.len(),
                    current.g_cost,
                    self.expansions
                );
                return Ok(path);
            }

            for (neighbor, step) in self.neighbors(current.cell) {
                let index = self.grid.index(neighbor);
                if closed[index] {
                    continue;
                }

                let tentative_g = current.g_cost + step + self.proximity_cost(neighbor);
                match node_at[index] {
                    Some(existing) => {
                        let node = &mut nodes[existing];
                        if tentative_g < node.g_cost {
                            node.g_cost = tentative_g;
                            node.f_cost = tentative_g + heuristic(neighbor, end);
                            node.parent = Some(entry.node);
                            open.push(OpenEntry {
                                node: existing,
                                g_cost: node.g_cost,
                                f_cost: node.f_cost,
                                seq: node.seq,
                            });
                        }
                    }
                    None => {
                        let id = nodes.len();
                        let f_cost = tentative_g + heuristic(neighbor, end);
                        nodes.push(SearchNode {
                            cell: neighbor,
                            g_cost: tentative_g,
                            f_cost,
                            parent: Some(entry.node),
                            seq: id,
                        });
                        node_at[index] = Some(id);
                        open.push(OpenEntry {
                            node: id,
                            g_cost: tentative_g,
                            f_cost,
                            seq: id,
                        });
                    }
                }
            }
        }

        debug!(
            "[AStar] FAILED: open set exhausted after {} expansions",
            self.expansions
        );
        Err(NoRouteReason::OpenSetExhausted)
    }

    /// Free neighbors with their base step cost.
    ///
    /// A diagonal is only allowed when both orthogonal cells it passes
    /// between are free.
    fn neighbors(&self, cell: Cell) -> SmallVec<[(Cell, f64); 8]> {
        let mut out = SmallVec::new();
        for (dr, dc) in DIRECTIONS {
            let Some(next) = offset(cell, dr, dc) else {
                continue;
            };
            if !self.grid.contains(next) || self.grid.is_blocked(next) {
                continue;
            }
            let diagonal = dr != 0 && dc != 0;
            if diagonal {
                let side_a = Cell::new(next.row, cell.col);
                let side_b = Cell::new(cell.row, next.col);
                if self.grid.is_blocked(side_a) || self.grid.is_blocked(side_b) {
                    continue;
                }
            }
            out.push((next, if diagonal { SQRT_2 } else { 1.0 }));
        }
        out
    }

    fn proximity_cost(&self, cell: Cell) -> f64 {
        match self.field {
            Some(field) if self.config.proximity_weight > 0.0 => {
                field.score(cell) * self.config.proximity_weight
            }
            _ => 0.0,
        }
    }
}

/// Convenience wrapper running a single search.
pub fn find_path(
    grid: &mut Grid,
    field: Option<&ProximityField>,
    start: Cell,
    end: Cell,
    config: &SearchConfig,
) -> Result<Vec<Cell>, NoRouteReason> {
    GridSearch::new(grid, field, config.clone()).find_path(start, end)
}

/// Chebyshev distance; never overestimates with unit and √2 steps.
fn heuristic(from: Cell, to: Cell) -> f64 {
    from.chebyshev_distance(&to) as f64
}

fn offset(cell: Cell, dr: isize, dc: isize) -> Option<Cell> {
    Some(Cell::new(
        cell.row.checked_add_signed(dr)?,
        cell.col.checked_add_signed(dc)?,
    ))
}

fn reconstruct(nodes: &[SearchNode], goal: usize) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(index) = current {
        path.push(nodes[index].cell);
        current = nodes[index].parent;
    }
    path.reverse();
    path
}
