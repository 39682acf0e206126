use thiserror::Error;

use crate::{
    connectivity::{ConnectivityGraph, FINISH_ANCHOR, START_ANCHOR},
    geometry::Point,
    walker::Walker,
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    #[error("anchor walkers are not connected")]
    AnchorsDisconnected,
    #[error("no recorded meeting point between walkers {0} and {1}")]
    MissingMeetingPoint(usize, usize),
}

/// Concatenates walker legs along the anchor chain into one continuous route
/// from the start anchor's origin to the finish anchor's origin.
///
/// Each leg runs over a single walker's path: the first leg enters at the true
/// route origin, every later leg at the meeting point shared with the previous
/// walker; each leg exits at the meeting point shared with the next walker,
/// the last leg at the finish itself. Junction points are emitted once.
pub fn build_route(
    walkers: &[Walker],
    graph: &ConnectivityGraph,
) -> Result<Vec<Point>, RouteError> {
    let chain = graph.anchor_chain().ok_or(RouteError::AnchorsDisconnected)?;

    let mut route: Vec<Point> = Vec::new();
    let mut entry = walkers[START_ANCHOR].origin();

    for (position, &index) in chain.iter().enumerate() {
        let exit = match chain.get(position + 1) {
            Some(&next) => graph
                .meeting_point(index, next)
                .ok_or(RouteError::MissingMeetingPoint(index, next))?,
            None => walkers[FINISH_ANCHOR].origin(),
        };

        let leg = walkers[index].path_between(entry, exit);
        let skip = usize::from(!route.is_empty());
        route.extend(leg.into_iter().skip(skip));
        entry = exit;
    }

    Ok(route)
}
