use mazeroute::{
    geometry::Point,
    math::point_in_any_polygon,
    output::{render, RouteRecord},
    problem::{InputError, Problem},
    router::{Router, RouterError},
};

mod common;

#[test]
fn test_no_obstacle_route_is_a_single_straight_segment() {
    let problem = common::problem((0, 0), (0, 5), vec![]);
    let route = common::solve(&problem).unwrap();
    let records = render(&route);

    assert_eq!(
        records,
        vec![
            RouteRecord::Line {
                x1: 0,
                y1: 0,
                x2: 0,
                y2: 5
            },
            RouteRecord::Marker { cx: 0, cy: 5 },
        ]
    );
}

#[test]
fn test_route_detours_around_an_obstacle() {
    let problem = common::problem(
        (0, 0),
        (0, 6),
        vec![vec![(-2, 2), (2, 2), (2, 4), (-2, 4)]],
    );
    let route = common::solve(&problem).unwrap();

    for point in &route {
        assert!(
            !point_in_any_polygon(*point, &problem.polygons),
            "route passes through an obstacle at {:?}",
            point
        );
    }

    let records = render(&route);
    common::assert_route_contract(&records, problem.start, problem.finish);
    // A straight run is impossible here, so the route must have corners.
    assert!(records.len() > 2);
}

#[test]
fn test_enclosed_start_is_unreachable() {
    let problem = common::problem(
        (0, 0),
        (5, 5),
        vec![vec![(-1, -1), (1, -1), (1, 1), (-1, 1)]],
    );

    assert!(matches!(
        common::solve(&problem),
        Err(RouterError::Unreachable(..))
    ));
}

#[test]
fn test_coincident_endpoints_render_no_segments() {
    let problem = common::problem((3, 3), (3, 3), vec![]);
    let route = common::solve(&problem).unwrap();

    assert_eq!(route, vec![Point::new(3, 3)]);
    assert!(render(&route).is_empty());
}

#[test]
fn test_routing_is_deterministic() {
    let problem = common::problem(
        (0, 0),
        (0, 6),
        vec![vec![(-2, 2), (2, 2), (2, 4), (-2, 4)]],
    );

    let first = serde_json::to_string(&render(&common::solve(&problem).unwrap())).unwrap();
    let second = serde_json::to_string(&render(&common::solve(&problem).unwrap())).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_route_endpoints_and_continuity() {
    let problem = common::problem(
        (0, 0),
        (6, 6),
        vec![vec![(1, 1), (4, 1), (4, 4), (1, 4)]],
    );
    let route = common::solve(&problem).unwrap();

    common::assert_route_contract(&render(&route), problem.start, problem.finish);
}

#[test]
fn test_anchor_walkers_keep_their_indices() {
    let problem = common::problem((0, 0), (0, 5), vec![]);
    let router = Router::new(&problem);
    let walkers = router.walkers();

    assert_eq!(walkers.len(), 4);
    assert_eq!(walkers[0].origin(), problem.start);
    assert_eq!(walkers[1].origin(), problem.finish);
    assert!(!walkers[0].is_secondary());
    assert!(!walkers[1].is_secondary());
    assert!(walkers[2].is_secondary());
    assert!(walkers[3].is_secondary());
}

#[test]
fn test_problem_loads_from_json() {
    let document = r#"{
        "start": {"x": 0, "y": 0},
        "finish": {"x": 0, "y": 5},
        "polygons": [[{"x": 1, "y": 1}, {"x": 3, "y": 1}, {"x": 2, "y": 3}]]
    }"#;

    let problem = Problem::load(document.as_bytes()).unwrap();

    assert_eq!(problem.start, Point::new(0, 0));
    assert_eq!(problem.finish, Point::new(0, 5));
    assert_eq!(problem.polygons.len(), 1);
    assert_eq!(problem.polygons[0].vertices().len(), 3);
}

#[test]
fn test_degenerate_polygon_is_rejected() {
    let document = r#"{
        "start": {"x": 0, "y": 0},
        "finish": {"x": 0, "y": 5},
        "polygons": [[{"x": 1, "y": 1}, {"x": 3, "y": 1}]]
    }"#;

    assert!(matches!(
        Problem::load(document.as_bytes()),
        Err(InputError::DegeneratePolygon(0))
    ));
}

#[test]
fn test_output_round_trips_through_serde() {
    let problem = common::problem((0, 0), (0, 5), vec![]);
    let records = render(&common::solve(&problem).unwrap());

    let encoded = serde_json::to_string(&records).unwrap();
    let decoded: Vec<RouteRecord> = serde_json::from_str(&encoded).unwrap();

    assert_eq!(records, decoded);
}
