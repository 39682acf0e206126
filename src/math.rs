use crate::geometry::{Point, Polygon};

/// Even-odd ray-casting containment test.
///
/// An edge counts iff the horizontal ray from `point` crosses its half-open
/// y-interval and the edge's x at that height lies strictly left of the point.
/// The half-open convention makes a point on a shared edge of two adjacent
/// polygons belong to exactly one of them.
pub fn point_in_polygon(point: Point, polygon: &Polygon) -> bool {
    let vertices = polygon.vertices();
    let px = point.x as f64;
    let py = point.y as f64;
    let mut inside = false;

    for (index, vertex) in vertices.iter().enumerate() {
        let prev = if index == 0 {
            vertices[vertices.len() - 1]
        } else {
            vertices[index - 1]
        };

        let (vx, vy) = (vertex.x as f64, vertex.y as f64);
        let (wx, wy) = (prev.x as f64, prev.y as f64);

        let crosses_ray = (vy < py && py <= wy) || (wy < py && py <= vy);
        if crosses_ray && px > (wx - vx) * (py - vy) / (wy - vy) + vx {
            inside = !inside;
        }
    }

    inside
}

pub fn point_in_any_polygon(point: Point, polygons: &[Polygon]) -> bool {
    polygons
        .iter()
        .any(|polygon| point_in_polygon(point, polygon))
}
