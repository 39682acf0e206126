use std::ops::ControlFlow;

use thiserror::Error;

use crate::{
    connectivity::ConnectivityGraph,
    geometry::{Direction, Point, Rotation},
    problem::{Problem, Scene},
    route::{build_route, RouteError},
    stepper::Step,
    walker::{Walker, WalkerStuck},
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterError {
    #[error("no route exists: {0}")]
    Unreachable(#[from] WalkerStuck),
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Advances all walkers one round at a time until the two anchors connect.
///
/// One step is one full round: check connectivity, tick every walker exactly
/// once in index order, fold the new heads into the graph. Connectivity is
/// never evaluated mid-round, which keeps the result independent of walker
/// ordering.
#[derive(Debug)]
pub struct RouteStepper {
    walkers: Vec<Walker>,
    graph: ConnectivityGraph,
    round: u64,
}

impl Step<Scene, Vec<Point>> for RouteStepper {
    type Error = RouterError;

    fn step(&mut self, scene: &Scene) -> Result<ControlFlow<Vec<Point>>, RouterError> {
        if self.graph.anchors_connected() {
            let route = build_route(&self.walkers, &self.graph)?;
            log::debug!(
                "anchors connected after {} rounds, route has {} points",
                self.round,
                route.len()
            );
            return Ok(ControlFlow::Break(route));
        }

        for walker in self.walkers.iter_mut() {
            walker.step(scene)?;
        }

        self.graph.update(&self.walkers);
        self.round += 1;
        Ok(ControlFlow::Continue(()))
    }
}

pub struct Router {
    scene: Scene,
    stepper: RouteStepper,
}

impl Router {
    /// Seeds the fixed walker set: the two primary anchors at the endpoints
    /// (indices 0 and 1), plus two corner helpers that widen the search. The
    /// seed heads are folded into the graph immediately so coincident seeds
    /// connect before any tick.
    pub fn new(problem: &Problem) -> Self {
        let scene = problem.scene();
        let polygons = &scene.polygons;

        let walkers = vec![
            Walker::new(
                problem.start,
                Direction::Up,
                Rotation::Clockwise,
                false,
                polygons,
            ),
            Walker::new(
                problem.finish,
                Direction::Down,
                Rotation::Clockwise,
                false,
                polygons,
            ),
            Walker::new(
                Point::new(problem.start.x, problem.finish.y),
                Direction::Right,
                Rotation::CounterClockwise,
                true,
                polygons,
            ),
            Walker::new(
                Point::new(problem.finish.x, problem.start.y),
                Direction::Left,
                Rotation::CounterClockwise,
                true,
                polygons,
            ),
        ];

        let mut graph = ConnectivityGraph::new(walkers.len());
        graph.update(&walkers);

        Self {
            scene,
            stepper: RouteStepper {
                walkers,
                graph,
                round: 0,
            },
        }
    }

    /// Runs rounds to completion. Terminates within a number of rounds bounded
    /// by the limits area: every cell is advanced into at most once and
    /// retreated from at most once per walker.
    pub fn route(&mut self) -> Result<Vec<Point>, RouterError> {
        self.stepper.finish(&self.scene)
    }

    pub fn walkers(&self) -> &[Walker] {
        &self.stepper.walkers
    }
}
