use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// The four grid directions, cyclic in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn rotated(self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Clockwise => match self {
                Direction::Up => Direction::Right,
                Direction::Right => Direction::Down,
                Direction::Down => Direction::Left,
                Direction::Left => Direction::Up,
            },
            Rotation::CounterClockwise => match self {
                Direction::Up => Direction::Left,
                Direction::Left => Direction::Down,
                Direction::Down => Direction::Right,
                Direction::Right => Direction::Up,
            },
        }
    }
}

/// Fixed walking bounds for a run. The max bounds derive from the finish
/// endpoint and the min bounds from the start endpoint; this asymmetry is
/// load-bearing for output compatibility and must not be evened out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

/// A closed boundary: the last vertex implicitly connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

/// Returns the neighbor one grid unit away in `direction`, or `None` when the
/// moved coordinate would leave `limits`. Up increases y, Down decreases it.
pub fn step(point: Point, direction: Direction, limits: &Limits) -> Option<Point> {
    match direction {
        Direction::Up if point.y + 1 <= limits.y_max => Some(Point::new(point.x, point.y + 1)),
        Direction::Right if point.x + 1 <= limits.x_max => Some(Point::new(point.x + 1, point.y)),
        Direction::Down if point.y - 1 >= limits.y_min => Some(Point::new(point.x, point.y - 1)),
        Direction::Left if point.x - 1 >= limits.x_min => Some(Point::new(point.x - 1, point.y)),
        _ => None,
    }
}
