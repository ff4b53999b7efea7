use routekit_core::{Point, Rect};
use routekit_router::hit_test::{
    check_endpoint_drag, hit_threshold, nearest_path, path_hit, rect_hit, EndpointCheck,
    HitTester,
};
use routekit_router::Router;
use routekit_settings::HitTestSettings;

#[test]
fn test_click_on_routed_path() {
    let path = Router::default()
        .route_between(
            &Rect::new(0.0, 0.0, 40.0, 40.0),
            &Rect::new(300.0, 0.0, 40.0, 40.0),
            &[],
        )
        .unwrap();
    let settings = HitTestSettings::default();

    let threshold = hit_threshold(settings.path_threshold_px, 2.0);
    assert!(path_hit(&Point::new(150.0, 22.0), path.points(), threshold));
    assert!(!path_hit(&Point::new(150.0, 24.0), path.points(), threshold));

    let zoomed_out = hit_threshold(settings.path_threshold_px, 0.5);
    assert!(path_hit(&Point::new(150.0, 29.0), path.points(), zoomed_out));
}

#[test]
fn test_nearest_of_several_paths() {
    let paths = vec![
        vec![Point::new(0.0, 0.0), Point::new(100.0, 100.0)],
        vec![Point::new(0.0, 100.0), Point::new(100.0, 0.0)],
        vec![Point::new(200.0, 200.0)],
    ];
    assert_eq!(nearest_path(&Point::new(198.0, 201.0), &paths, 5.0), Some(2));
    assert_eq!(nearest_path(&Point::new(20.0, 78.0), &paths, 5.0), Some(1));
    let empty: Vec<Vec<Point>> = Vec::new();
    assert_eq!(nearest_path(&Point::new(0.0, 0.0), &empty, 5.0), None);
}

#[test]
fn test_rect_hit_on_edges() {
    let rects = [Rect::new(10.0, 10.0, 20.0, 20.0)];
    assert_eq!(rect_hit(&Point::new(10.0, 10.0), &rects), Some(0));
    assert_eq!(rect_hit(&Point::new(30.0, 30.0), &rects), Some(0));
    assert_eq!(rect_hit(&Point::new(30.1, 30.0), &rects), None);
}

#[test]
fn test_endpoint_drag_lists_every_crossing() {
    let blocking = [
        Rect::new(50.0, -10.0, 10.0, 20.0),
        Rect::new(100.0, -10.0, 10.0, 20.0),
        Rect::new(100.0, 100.0, 10.0, 20.0),
    ];
    let check = check_endpoint_drag(&Point::new(0.0, 0.0), &Point::new(200.0, 0.0), &blocking);
    assert_eq!(check, EndpointCheck::Crosses(vec![0, 1]));
    assert!(!check.is_clear());

    let inside = check_endpoint_drag(&Point::new(0.0, 0.0), &Point::new(105.0, 110.0), &blocking);
    assert_eq!(inside, EndpointCheck::Crosses(vec![2]));
}

#[test]
fn test_configured_tester_picks_topmost_box() {
    let mut settings = HitTestSettings::default();
    settings.rect_tolerance_px = 6.0;
    let tester = HitTester::new(&settings, 3.0);

    let rects = [
        Rect::new(0.0, 0.0, 40.0, 40.0),
        Rect::new(30.0, 0.0, 40.0, 40.0),
    ];
    assert_eq!(tester.rect_at(&Point::new(35.0, 41.0), &rects), Some(1));
    assert_eq!(tester.rect_at(&Point::new(-1.5, 20.0), &rects), Some(0));
    assert_eq!(tester.rect_at(&Point::new(-3.0, 20.0), &rects), None);
}
