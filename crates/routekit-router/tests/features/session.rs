use routekit_core::{EntityId, Rect, RouteError, Scene};
use routekit_router::{RouteSession, Router};

fn scene() -> (Scene, EntityId, EntityId) {
    let mut scene = Scene::new();
    let a = scene.add_object(Rect::new(0.0, 0.0, 40.0, 40.0));
    let b = scene.add_object(Rect::new(300.0, 0.0, 40.0, 40.0));
    scene.add_obstacle(Rect::new(140.0, -50.0, 20.0, 140.0));
    (scene, a, b)
}

#[test]
fn test_complete_without_begin_is_rejected() {
    let (scene, _, b) = scene();
    let mut session = RouteSession::new(Router::default());
    let err = session.complete_route(&scene, b).unwrap_err();
    assert_eq!(err, RouteError::NoPendingRoute);
    assert!(!err.is_no_route());
}

#[test]
fn test_unknown_end_entity() {
    let (scene, a, _) = scene();
    let mut session = RouteSession::new(Router::default());
    session.begin_route(a);
    assert_eq!(
        session.complete_route(&scene, EntityId(1000)),
        Err(RouteError::UnknownEntity(EntityId(1000)))
    );
    assert_eq!(
        session.complete_route(&scene, EntityId(1000)),
        Err(RouteError::NoPendingRoute)
    );
}

#[test]
fn test_unknown_start_entity() {
    let (scene, _, b) = scene();
    let mut session = RouteSession::new(Router::default());
    session.begin_route(EntityId(77));
    assert_eq!(
        session.complete_route(&scene, b),
        Err(RouteError::UnknownEntity(EntityId(77)))
    );
}

#[test]
fn test_same_entity_is_degenerate() {
    let (scene, a, _) = scene();
    let mut session = RouteSession::new(Router::default());
    session.begin_route(a);
    let err = session.complete_route(&scene, a).unwrap_err();
    assert!(matches!(err, RouteError::DegenerateQuery { .. }));
    assert!(err.is_no_route());
}

#[test]
fn test_full_gesture_routes_around_obstacle() {
    let (scene, a, b) = scene();
    let mut session = RouteSession::new(Router::default());
    session.begin_route(a);
    let path = session.complete_route(&scene, b).unwrap();
    assert!(path.len() > 2);
    assert_eq!(path.end(), scene.get(b).unwrap().center());
    assert!(session.pending_start().is_none());
}
