use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// One drawing primitive of the serialized route. Serializes untagged, so the
/// output is a flat array of `{x1,y1,x2,y2}` and `{cx,cy}` objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteRecord {
    Line { x1: i64, y1: i64, x2: i64, y2: i64 },
    Marker { cx: i64, cy: i64 },
}

/// Serializes an ordered point sequence as alternating line segments and
/// junction markers, one marker after each line at its far endpoint. Straight
/// stretches of grid steps collapse into a single line.
pub fn render(route: &[Point]) -> Vec<RouteRecord> {
    collapse_collinear(route)
        .iter()
        .tuple_windows()
        .flat_map(|(from, to)| {
            [
                RouteRecord::Line {
                    x1: from.x,
                    y1: from.y,
                    x2: to.x,
                    y2: to.y,
                },
                RouteRecord::Marker { cx: to.x, cy: to.y },
            ]
        })
        .collect()
}

/// Drops every point that continues straight in the direction of its
/// predecessor, keeping only the route's corners. Reversals are kept so a
/// degenerate about-turn still serializes as two segments.
fn collapse_collinear(route: &[Point]) -> Vec<Point> {
    let mut corners: Vec<Point> = Vec::new();

    for &point in route {
        while corners.len() >= 2 {
            let a = corners[corners.len() - 2];
            let b = corners[corners.len() - 1];

            let collinear =
                (b.x - a.x) * (point.y - b.y) == (b.y - a.y) * (point.x - b.x);
            let same_sense = (b.x - a.x).signum() == (point.x - b.x).signum()
                && (b.y - a.y).signum() == (point.y - b.y).signum();

            if collinear && same_sense {
                corners.pop();
            } else {
                break;
            }
        }

        corners.push(point);
    }

    corners
}
