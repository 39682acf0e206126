use mazeroute::{
    geometry::{Point, Polygon},
    output::RouteRecord,
    problem::Problem,
    router::{Router, RouterError},
};

pub fn problem(start: (i64, i64), finish: (i64, i64), polygons: Vec<Vec<(i64, i64)>>) -> Problem {
    Problem {
        start: Point::new(start.0, start.1),
        finish: Point::new(finish.0, finish.1),
        polygons: polygons
            .into_iter()
            .map(|vertices| {
                Polygon::new(
                    vertices
                        .into_iter()
                        .map(|(x, y)| Point::new(x, y))
                        .collect(),
                )
            })
            .collect(),
    }
}

pub fn solve(problem: &Problem) -> Result<Vec<Point>, RouterError> {
    Router::new(problem).route()
}

/// Asserts the serialized-route contract: records alternate line-then-marker,
/// each marker sits on its line's far endpoint, consecutive lines share an
/// endpoint, and the route runs from `start` to `finish`.
pub fn assert_route_contract(records: &[RouteRecord], start: Point, finish: Point) {
    assert!(!records.is_empty(), "route has no segments");
    assert_eq!(records.len() % 2, 0, "records must alternate line/marker");

    let mut previous_end: Option<(i64, i64)> = None;

    for pair in records.chunks(2) {
        let RouteRecord::Line { x1, y1, x2, y2 } = pair[0] else {
            panic!("expected a line record, got {:?}", pair[0]);
        };
        let RouteRecord::Marker { cx, cy } = pair[1] else {
            panic!("expected a marker record, got {:?}", pair[1]);
        };

        assert_eq!((cx, cy), (x2, y2), "marker must sit on the line's endpoint");

        if let Some(end) = previous_end {
            assert_eq!(end, (x1, y1), "consecutive segments must share an endpoint");
        } else {
            assert_eq!((x1, y1), (start.x, start.y));
        }

        previous_end = Some((x2, y2));
    }

    assert_eq!(previous_end, Some((finish.x, finish.y)));
}
