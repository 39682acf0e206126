use petgraph::{
    algo,
    graph::{NodeIndex, UnGraph},
};

use crate::{geometry::Point, walker::Walker};

pub const START_ANCHOR: usize = 0;
pub const FINISH_ANCHOR: usize = 1;

/// Which walkers' paths currently touch. One node per walker (node index ==
/// walker index); an edge carries the point where the pair first met. Edges
/// are never removed.
#[derive(Debug, Default)]
pub struct ConnectivityGraph {
    graph: UnGraph<(), Point>,
}

impl ConnectivityGraph {
    pub fn new(walker_count: usize) -> Self {
        let mut graph = UnGraph::default();

        for _ in 0..walker_count {
            graph.add_node(());
        }

        Self { graph }
    }

    /// Records, for every ordered pair of distinct walkers, whether walker i's
    /// current head lies on walker j's path. Only the head needs checking:
    /// older head positions were checked in earlier rounds.
    pub fn update(&mut self, walkers: &[Walker]) {
        for (i, walker) in walkers.iter().enumerate() {
            let head = walker.head();

            for (j, other) in walkers.iter().enumerate() {
                if i == j || !other.has_visited(head) {
                    continue;
                }

                let (a, b) = (NodeIndex::new(i), NodeIndex::new(j));

                if self.graph.find_edge(a, b).is_none() {
                    log::debug!("walkers {} and {} met at ({}, {})", i, j, head.x, head.y);
                    self.graph.add_edge(a, b, head);
                }
            }
        }
    }

    /// The driver loop's termination condition: are the two anchors
    /// transitively connected?
    pub fn anchors_connected(&self) -> bool {
        algo::has_path_connecting(
            &self.graph,
            NodeIndex::new(START_ANCHOR),
            NodeIndex::new(FINISH_ANCHOR),
            None,
        )
    }

    /// Fewest-hop chain of walker indices linking the start anchor to the
    /// finish anchor, if the anchors are connected.
    pub fn anchor_chain(&self) -> Option<Vec<usize>> {
        let finish = NodeIndex::new(FINISH_ANCHOR);
        let (_, chain) = algo::astar(
            &self.graph,
            NodeIndex::new(START_ANCHOR),
            |node| node == finish,
            |_| 1,
            |_| 0,
        )?;

        Some(chain.into_iter().map(NodeIndex::index).collect())
    }

    pub fn meeting_point(&self, i: usize, j: usize) -> Option<Point> {
        self.graph
            .find_edge(NodeIndex::new(i), NodeIndex::new(j))
            .and_then(|edge| self.graph.edge_weight(edge))
            .copied()
    }
}
