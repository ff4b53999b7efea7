use proptest::prelude::*;
use routekit_core::{Cell, Point};
use routekit_router::grid::Grid;
use routekit_router::simplify::{line_of_sight_reduce, segment_is_clear, simplify};
use routekit_router::smoothing::{catmull_rom, round_corners};

fn polyline() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-200.0f64..200.0, -200.0f64..200.0), 0..40)
        .prop_map(|pts| pts.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

proptest! {
    #[test]
    fn simplify_is_idempotent(points in polyline(), tolerance in 0.1f64..50.0) {
        let once = simplify(&points, tolerance);
        let twice = simplify(&once, tolerance);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn simplify_keeps_endpoints(points in polyline(), tolerance in 0.0f64..50.0) {
        let out = simplify(&points, tolerance);
        prop_assert_eq!(out.first(), points.first());
        prop_assert_eq!(out.last(), points.last());
        prop_assert!(out.len() <= points.len());
    }

    #[test]
    fn rounded_corners_keep_endpoints(points in polyline(), radius in 0.0f64..40.0) {
        let out = round_corners(&points, radius);
        prop_assert_eq!(out.first(), points.first());
        prop_assert_eq!(out.last(), points.last());
    }
}

#[test]
fn test_catmull_rom_on_straight_line_stays_collinear() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(50.0, 25.0),
        Point::new(100.0, 50.0),
    ];
    let out = catmull_rom(&pts, 10, 0.5).unwrap();
    for p in &out {
        let cross = p.x * 50.0 - p.y * 100.0;
        assert!(cross.abs() < 1e-6, "{:?} off the line", p);
    }
    assert_eq!(out.first(), pts.first());
    assert_eq!(out.last(), pts.last());
}

#[test]
fn test_line_of_sight_output_is_clear() {
    let mut grid = Grid::new(Point::new(0.0, 0.0), 10.0, 12, 12);
    for row in 0..9 {
        grid.block(Cell::new(row, 5));
    }
    let cells = [
        (1, 1), (2, 2), (3, 3), (4, 4), (5, 4), (6, 4), (7, 4), (8, 4), (9, 4),
        (9, 5), (9, 6), (8, 7), (7, 8), (6, 9), (5, 10),
    ];
    let points: Vec<Point> = cells
        .iter()
        .map(|&(r, c)| grid.cell_center(Cell::new(r, c)))
        .collect();

    let reduced = line_of_sight_reduce(&points, &grid);
    assert!(reduced.len() < points.len());
    assert_eq!(reduced.first(), points.first());
    assert_eq!(reduced.last(), points.last());
    for w in reduced.windows(2) {
        assert!(segment_is_clear(&w[0], &w[1], &grid));
    }
}
