use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Limits, Point, Polygon};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to parse problem: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("polygon {0} has fewer than 3 vertices")]
    DegeneratePolygon(usize),
}

/// A routing problem: two endpoints and the obstacle polygons between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub start: Point,
    pub finish: Point,
    pub polygons: Vec<Polygon>,
}

/// The immutable context every walker tick reads.
#[derive(Debug, Clone)]
pub struct Scene {
    pub polygons: Vec<Polygon>,
    pub limits: Limits,
}

impl Problem {
    pub fn load(reader: impl Read) -> Result<Self, InputError> {
        let problem: Problem = serde_json::from_reader(reader)?;

        for (index, polygon) in problem.polygons.iter().enumerate() {
            if polygon.vertices().len() < 3 {
                return Err(InputError::DegeneratePolygon(index));
            }
        }

        Ok(problem)
    }

    /// Walking bounds: a 2-unit margin, max bounds taken from `finish` and min
    /// bounds from `start`.
    pub fn limits(&self) -> Limits {
        Limits {
            x_max: self.finish.x + 2,
            x_min: self.start.x - 2,
            y_max: self.finish.y + 2,
            y_min: self.start.y - 2,
        }
    }

    pub fn scene(&self) -> Scene {
        Scene {
            polygons: self.polygons.clone(),
            limits: self.limits(),
        }
    }
}
