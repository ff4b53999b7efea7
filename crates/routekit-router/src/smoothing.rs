//! Path smoothing.
//!
//! Turns a simplified polyline into something that reads as a drawn route:
//! - Rounded corners: each interior vertex is replaced by two points cut back
//!   along its adjacent segments
//! - Catmull-Rom: a uniform spline through every vertex
//!
//! Both strategies keep the first and last points exactly.

use routekit_core::{Point, SmoothError};
use routekit_settings::{SmoothingMode, SmoothingSettings};
use tracing::trace;

/// Smooth `points` with the configured strategy.
///
/// Inputs the chosen strategy cannot handle come back unchanged.
pub fn smooth(points: &[Point], settings: &SmoothingSettings) -> Vec<Point> {
    match settings.mode {
        SmoothingMode::None => points.to_vec(),
        SmoothingMode::Rounded => round_corners(points, settings.corner_radius),
        SmoothingMode::CatmullRom => catmull_rom(
            points,
            settings.spline_substeps,
            settings.min_sample_spacing,
        )
        .unwrap_or_else(|err| {
            trace!("catmull-rom skipped: {}", err);
            points.to_vec()
        }),
    }
}

/// Replace every interior vertex by two points `cut` away from it, where
/// `cut = min(radius, prev_len / 2, next_len / 2)`.
///
/// A vertex with a zero-length neighbouring segment is emitted as is.
pub fn round_corners(points: &[Point], radius: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(points.len() * 2);
    out.push(points[0]);

    for w in points.windows(3) {
        let (prev, vertex, next) = (w[0], w[1], w[2]);
        let into = vertex.direction_to(&prev);
        let out_of = vertex.direction_to(&next);

        match (into, out_of) {
            (Some(back), Some(ahead)) => {
                let cut = radius
                    .min(vertex.distance_to(&prev) / 2.0)
                    .min(vertex.distance_to(&next) / 2.0);
                out.push(vertex + back * cut);
                out.push(vertex + ahead * cut);
            }
            _ => out.push(vertex),
        }
    }

    out.push(points[points.len() - 1]);
    out
}

/// Sample a uniform Catmull-Rom spline through `points`.
///
/// The first and last points are duplicated as phantom control points so that
/// every input segment becomes a span. This departs from padding only the
/// first point of a three-point input: with both ends padded the last segment
/// is a spline span too, and collinear input stays on its line. Each span contributes `substeps`
/// samples; a sample is kept only when it lies more than `min_spacing` from
/// the previous kept one. The output ends exactly at the last input point.
pub fn catmull_rom(
    points: &[Point],
    substeps: usize,
    min_spacing: f64,
) -> Result<Vec<Point>, SmoothError> {
    if points.len() < 3 {
        return Err(SmoothError::InsufficientSplinePoints { got: points.len() });
    }

    let substeps = substeps.max(1);
    let last = points[points.len() - 1];

    let mut control = Vec::with_capacity(points.len() + 2);
    control.push(points[0]);
    control.extend_from_slice(points);
    control.push(last);

    let mut out = vec![points[0]];
    for span in control.windows(4) {
        for step in 1..=substeps {
            let t = step as f64 / substeps as f64;
            let sample = catmull_rom_point(&span[0], &span[1], &span[2], &span[3], t);
            if out[out.len() - 1].distance_to(&sample) > min_spacing {
                out.push(sample);
            }
        }
    }

    let tail = out.len() - 1;
    if out[tail] != last {
        if out.len() > 1 && out[tail].distance_to(&last) <= min_spacing {
            out[tail] = last;
        } else {
            out.push(last);
        }
    }

    Ok(out)
}

fn catmull_rom_point(p0: &Point, p1: &Point, p2: &Point, p3: &Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let blend = |a: f64, b: f64, c: f64, d: f64| {
        0.5 * ((2.0 * b)
            + (-a + c) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };
    Point::new(
        blend(p0.x, p1.x, p2.x, p3.x),
        blend(p0.y, p1.y, p2.y, p3.y),
    )
}
