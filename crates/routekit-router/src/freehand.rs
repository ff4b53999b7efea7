//! Finishing freehand-drawn paths.
//!
//! A stroke recorded from the pointer is dense and jittery. It goes through
//! the same thinning and smoothing as a routed path, but never through the
//! grid: the user chose where it runs.

use routekit_core::Point;
use routekit_settings::SmoothingSettings;
use tracing::trace;

use crate::path::RoutedPath;
use crate::simplify::simplify;
use crate::smoothing::smooth;

/// Thin and smooth a raw stroke; the raw first and last points are kept.
///
/// Returns `None` for strokes with fewer than two points.
pub fn finish_freehand(points: &[Point], settings: &SmoothingSettings) -> Option<RoutedPath> {
    if points.len() < 2 {
        return None;
    }
    let (first, last) = (points[0], points[points.len() - 1]);

    let thinned = simplify(points, settings.freehand_tolerance);
    let smoothed = smooth(&thinned, settings);
    trace!(
        "freehand stroke: {} raw -> {} thinned -> {} smoothed",
        points.len(),
        thinned.len(),
        smoothed.len()
    );
    Some(RoutedPath::pinned(smoothed, first, last))
}
