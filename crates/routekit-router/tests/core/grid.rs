use routekit_core::{Cell, Point, Rect};
use routekit_router::grid::Grid;
use routekit_settings::RoutingSettings;

fn rasterize(blocking: &[Rect]) -> Grid {
    let start = Rect::new(0.0, 0.0, 40.0, 40.0);
    let end = Rect::new(300.0, 0.0, 40.0, 40.0);
    Grid::rasterize(blocking, &start, &end, &RoutingSettings::default()).unwrap()
}

#[test]
fn test_bounds_cover_query_plus_padding() {
    let grid = rasterize(&[]);
    let bounds = grid.bounds();
    assert!(bounds.x <= -40.0);
    assert!(bounds.y <= -40.0);
    assert!(bounds.x + bounds.width >= 380.0);
    assert!(bounds.y + bounds.height >= 80.0);
    assert_eq!(grid.blocked_count(), 0);
}

#[test]
fn test_outside_points_count_as_free() {
    let grid = rasterize(&[Rect::new(140.0, -50.0, 20.0, 140.0)]);
    assert!(!grid.is_blocked_at(&Point::new(-10_000.0, 0.0)));
    assert!(grid.cell_containing(&Point::new(-10_000.0, 0.0)).is_none());
    assert_eq!(grid.cell_at(&Point::new(-10_000.0, -10_000.0)), Cell::new(0, 0));
}

#[test]
fn test_cell_center_round_trips() {
    let grid = rasterize(&[]);
    let cell = Cell::new(2, 5);
    assert_eq!(grid.cell_at(&grid.cell_center(cell)), cell);
}

#[test]
fn test_invalid_cell_size_rejected() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let settings = RoutingSettings::default().with_cell_size(bad);
        let err = Grid::rasterize(&[], &rect, &rect, &settings).unwrap_err();
        assert!(err.is_config_error(), "cell size {} accepted", bad);
    }
}
