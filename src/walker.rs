use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::{
    geometry::{step, Direction, Point, Polygon, Rotation},
    math,
    problem::Scene,
};

/// A primary anchor walker can make no further progress, which makes the whole
/// problem unsolvable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("walker seeded at ({}, {}) can make no further progress", origin.x, origin.y)]
pub struct WalkerStuck {
    pub origin: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerStatus {
    Advanced(Point),
    Retreated(Point),
    /// A stopped secondary walker; it takes no further part in the search but
    /// its visited cells remain valid meeting ground for other walkers.
    Halted,
}

/// A wall-following route-finder that advances one cell per tick under a fixed
/// rotating direction priority and retreats along its predecessor tree on dead
/// ends.
#[derive(Debug, Clone)]
pub struct Walker {
    origin: Point,
    cursor: Point,
    direction_priority: [Direction; 4],
    visited: HashSet<Point>,
    came_from: HashMap<Point, Point>,
    secondary: bool,
    stopped: bool,
}

impl Walker {
    /// The priority list is `heading` rotated four times in `rotation`'s sense.
    /// A walker whose origin already lies inside an obstacle starts stopped.
    pub fn new(
        origin: Point,
        heading: Direction,
        rotation: Rotation,
        secondary: bool,
        polygons: &[Polygon],
    ) -> Self {
        let mut direction_priority = [heading; 4];
        let mut direction = heading;

        for slot in direction_priority.iter_mut() {
            *slot = direction;
            direction = direction.rotated(rotation);
        }

        Self {
            origin,
            cursor: origin,
            direction_priority,
            visited: HashSet::from([origin]),
            came_from: HashMap::new(),
            secondary,
            stopped: math::point_in_any_polygon(origin, polygons),
        }
    }

    /// One tick: advance into the first open direction, otherwise retreat one
    /// cell. Exhausting the origin with nothing untried stops the walker; for a
    /// primary anchor that is fatal.
    pub fn step(&mut self, scene: &Scene) -> Result<WalkerStatus, WalkerStuck> {
        if self.stopped {
            return self.halt();
        }

        for direction in self.direction_priority {
            let Some(next) = step(self.cursor, direction, &scene.limits) else {
                continue;
            };

            if self.visited.contains(&next) || math::point_in_any_polygon(next, &scene.polygons) {
                continue;
            }

            self.visited.insert(next);
            self.came_from.insert(next, self.cursor);
            self.cursor = next;
            log::trace!("walker advanced to ({}, {})", next.x, next.y);
            return Ok(WalkerStatus::Advanced(next));
        }

        match self.came_from.get(&self.cursor) {
            Some(&previous) => {
                self.cursor = previous;
                log::trace!("walker retreated to ({}, {})", previous.x, previous.y);
                Ok(WalkerStatus::Retreated(previous))
            }
            None => {
                self.stopped = true;
                self.halt()
            }
        }
    }

    fn halt(&self) -> Result<WalkerStatus, WalkerStuck> {
        if self.secondary {
            Ok(WalkerStatus::Halted)
        } else {
            Err(WalkerStuck {
                origin: self.origin,
            })
        }
    }

    /// Continuous lattice path between two visited cells, walking the
    /// predecessor tree up from `from` to the fork shared with `to` and back
    /// down. Both cells must have been visited by this walker.
    pub fn path_between(&self, from: Point, to: Point) -> Vec<Point> {
        let from_chain = self.path_from_origin(from);
        let to_chain = self.path_from_origin(to);

        let common = from_chain
            .iter()
            .zip(&to_chain)
            .take_while(|(a, b)| a == b)
            .count();

        // Both chains start at the origin, so the shared prefix is nonempty.
        let mut path: Vec<Point> = from_chain[common - 1..].iter().rev().copied().collect();
        path.extend(&to_chain[common..]);
        path
    }

    fn path_from_origin(&self, point: Point) -> Vec<Point> {
        let mut path = vec![point];
        let mut current = point;

        while let Some(&previous) = self.came_from.get(&current) {
            path.push(previous);
            current = previous;
        }

        path.reverse();
        path
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn head(&self) -> Point {
        self.cursor
    }

    pub fn has_visited(&self, point: Point) -> bool {
        self.visited.contains(&point)
    }

    pub fn is_secondary(&self) -> bool {
        self.secondary
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
