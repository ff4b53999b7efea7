//! Polyline reduction.
//!
//! Two passes:
//! - [`simplify`]: sequential thinning that drops points closer than a
//!   tolerance to the last kept point. Works on freehand input as well as on
//!   search output.
//! - [`line_of_sight_reduce`]: removes grid zig-zags by jumping to the
//!   farthest point reachable along a segment that crosses no blocked cell.

use routekit_core::Point;

use crate::grid::Grid;

/// Keep first and last points, and every intermediate point at least
/// `tolerance` away from the previously kept one.
///
/// Inputs with fewer than two points are returned unchanged.
pub fn simplify(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut kept = Vec::with_capacity(points.len());
    kept.push(points[0]);

    for p in &points[1..last] {
        let anchor = kept[kept.len() - 1];
        if anchor.distance_to(p) >= tolerance {
            kept.push(*p);
        }
    }

    kept.push(points[last]);
    kept
}

/// Replace runs of points by the longest clear segment from each kept point.
///
/// The next point along the input is always accepted, so the output never
/// takes a shortcut the input did not already take.
pub fn line_of_sight_reduce(points: &[Point], grid: &Grid) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut reduced = vec![points[0]];
    let mut i = 0;

    while i < points.len() - 1 {
        let farthest = ((i + 2)..points.len())
            .rev()
            .find(|&j| segment_is_clear(&points[i], &points[j], grid))
            .unwrap_or(i + 1);

        reduced.push(points[farthest]);
        i = farthest;
    }

    reduced
}

/// Whether every sample along `a`-`b`, taken every half cell, is on a free cell.
pub fn segment_is_clear(a: &Point, b: &Point, grid: &Grid) -> bool {
    let step = grid.cell_size() / 2.0;
    let samples = (a.distance_to(b) / step).ceil().max(1.0) as usize;

    (0..=samples).all(|i| {
        let t = i as f64 / samples as f64;
        !grid.is_blocked_at(&a.lerp(b, t))
    })
}
