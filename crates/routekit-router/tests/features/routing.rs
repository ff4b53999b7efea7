use routekit_core::{
    segment_intersects_rect, NoRouteReason, Point, Rect, RouteError, Scene, ZoneKind,
};
use routekit_router::simplify::segment_is_clear;
use routekit_router::Router;
use routekit_settings::{Config, RoutingSettings, SmoothingMode, SmoothingSettings};

fn start() -> Rect {
    Rect::new(0.0, 0.0, 40.0, 40.0)
}

fn end() -> Rect {
    Rect::new(300.0, 0.0, 40.0, 40.0)
}

fn wall() -> Rect {
    Rect::new(140.0, -50.0, 20.0, 140.0)
}

fn router(mode: SmoothingMode) -> Router {
    Router::new(
        RoutingSettings::default(),
        SmoothingSettings::default().with_mode(mode),
    )
}

#[test]
fn test_clear_line_is_nearly_straight() {
    let path = router(SmoothingMode::Rounded)
        .route_between(&start(), &end(), &[])
        .unwrap();
    let direct = start().center().distance_to(&end().center());
    assert!(path.length() <= direct * 1.1);
    assert_eq!(path.start(), start().center());
    assert_eq!(path.end(), end().center());
}

#[test]
fn test_wall_forces_detour() {
    for mode in [
        SmoothingMode::None,
        SmoothingMode::Rounded,
        SmoothingMode::CatmullRom,
    ] {
        let path = router(mode)
            .route_between(&start(), &end(), &[wall()])
            .unwrap();
        let points = path.points();

        assert_eq!(path.start(), Point::new(20.0, 20.0));
        assert_eq!(path.end(), Point::new(320.0, 20.0));
        assert!(
            points.iter().any(|p| p.y < -50.0 || p.y > 90.0),
            "{} route does not leave the wall's span",
            mode
        );
        assert!(path.length() > 300.0);

        if mode != SmoothingMode::CatmullRom {
            for w in points.windows(2) {
                assert!(!segment_intersects_rect(&w[0], &w[1], &wall()));
            }
        }
    }
}

#[test]
fn test_unsmoothed_route_stays_on_free_cells() {
    let obstacles = [
        wall(),
        Rect::new(60.0, 60.0, 40.0, 120.0),
        Rect::new(220.0, -120.0, 30.0, 130.0),
    ];
    let plan = router(SmoothingMode::None)
        .plan(&start(), &end(), &obstacles)
        .unwrap();

    for w in plan.simplified.windows(2) {
        assert!(segment_is_clear(&w[0], &w[1], &plan.grid));
    }
    assert_eq!(plan.path.points(), plan.simplified.as_slice());
}

#[test]
fn test_walled_field_exhausts_tiny_budget() {
    let mut routing = RoutingSettings::default();
    routing.max_expansions = 10;
    let router = Router::new(routing, SmoothingSettings::default());

    let walls: Vec<Rect> = (0..8)
        .map(|i| {
            let x = 60.0 + i as f64 * 30.0;
            let y = -200.0 + (i % 2) as f64 * 60.0;
            Rect::new(x, y, 10.0, 300.0)
        })
        .collect();
    let err = router.route_between(&start(), &end(), &walls).unwrap_err();

    assert_eq!(
        err,
        RouteError::NoRouteFound {
            reason: NoRouteReason::ExpansionCapReached { cap: 10 }
        }
    );
    assert!(err.is_no_route());
}

#[test]
fn test_scene_zones() {
    let mut scene = Scene::new();
    let a = scene.add_object(start());
    let b = scene.add_object(end());
    let zone = scene.add_zone(ZoneKind::Restricted, wall());
    let router = router(SmoothingMode::None);

    let restricted = router.route(&scene, a, b).unwrap();
    assert!(restricted.len() > 2);

    scene.remove(zone);
    scene.add_zone(ZoneKind::Traversable, wall());
    let traversable = router.route(&scene, a, b).unwrap();
    assert_eq!(traversable.len(), 2);
    assert!(traversable.length() < restricted.length());
}

#[test]
fn test_other_objects_block() {
    let mut scene = Scene::new();
    let a = scene.add_object(start());
    let b = scene.add_object(end());
    scene.add_object(wall());

    let path = router(SmoothingMode::None).route(&scene, a, b).unwrap();
    for w in path.points().windows(2) {
        assert!(!segment_intersects_rect(&w[0], &w[1], &wall()));
    }
}

#[test]
fn test_router_from_config() {
    let mut config = Config::default();
    config.smoothing.mode = SmoothingMode::CatmullRom;
    config.routing.cell_size = 10.0;
    let router = Router::from_config(&config);
    assert_eq!(router.routing().cell_size, 10.0);
    assert!(router.route_between(&start(), &end(), &[wall()]).is_ok());
}
