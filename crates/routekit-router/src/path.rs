//! Routed path output type.

use routekit_core::{polyline_length, Point};
use serde::Serialize;

/// A finished route: at least two points, first and last pinned to the
/// endpoints the route was requested between.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutedPath {
    points: Vec<Point>,
}

impl RoutedPath {
    /// Wrap `points`, forcing the ends to `start` and `end`.
    ///
    /// Fewer than two points are replaced by the straight segment.
    pub fn pinned(mut points: Vec<Point>, start: Point, end: Point) -> Self {
        pin_endpoints(&mut points, start, end);
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Polyline length in world units.
    pub fn length(&self) -> f64 {
        polyline_length(&self.points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<RoutedPath> for Vec<Point> {
    fn from(path: RoutedPath) -> Self {
        path.points
    }
}

/// Overwrite the first and last points, growing `points` to two if needed.
pub(crate) fn pin_endpoints(points: &mut Vec<Point>, start: Point, end: Point) {
    if points.len() < 2 {
        points.clear();
        points.push(start);
        points.push(end);
        return;
    }
    let last = points.len() - 1;
    points[0] = start;
    points[last] = end;
}
