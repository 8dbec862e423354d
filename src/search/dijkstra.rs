use serde::{Deserialize, Serialize};
use tracing::debug;

use super::path::{reconstruct, Path};
use crate::{
    error::{Error, Result},
    graphs::{Graph, VertexId, Weight, INFINITY},
    queue::{heap_queue::HeapQueue, DijkstraQueue, DijkstraQueueElement},
};

/// Distances and predecessors of every vertex as seen from a single source.
///
/// `distances[v]` is [`INFINITY`] and `previous[v]` is `None` for every
/// vertex the search did not reach. The source has distance zero and no
/// predecessor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTree {
    pub source: VertexId,
    pub distances: Vec<Weight>,
    pub previous: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.distances
            .get(vertex as usize)
            .copied()
            .filter(|&distance| distance != INFINITY)
    }

    /// Vertices from the source to `destination`, empty if it was not reached.
    pub fn reconstruct(&self, destination: VertexId) -> Vec<VertexId> {
        reconstruct(&self.distances, &self.previous, destination)
    }

    pub fn path(&self, destination: VertexId) -> Option<Path> {
        let weight = self.distance(destination)?;
        Some(Path {
            vertices: self.reconstruct(destination),
            weight,
        })
    }
}

/// Single source Dijkstra on a binary heap.
pub fn shortest_path(graph: &dyn Graph, source: VertexId) -> Result<ShortestPathTree> {
    shortest_path_with_queue(graph, source, &mut HeapQueue::new())
}

/// Single source Dijkstra over `queue`.
///
/// Stale queue elements of already settled vertices are skipped when popped,
/// so the queue never needs a decrease-key operation. Every vertex is settled
/// at most once.
pub fn shortest_path_with_queue(
    graph: &dyn Graph,
    source: VertexId,
    queue: &mut dyn DijkstraQueue,
) -> Result<ShortestPathTree> {
    if !graph.contains_vertex(source) {
        return Err(Error::VertexOutOfRange {
            vertex: source,
            number_of_vertices: graph.number_of_vertices(),
        });
    }

    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut distances = vec![INFINITY; number_of_vertices];
    let mut previous = vec![None; number_of_vertices];
    let mut is_settled = vec![false; number_of_vertices];

    queue.clear();
    distances[source as usize] = 0;
    queue.push(DijkstraQueueElement::new(0, source));

    let mut settled = 0;
    while let Some(DijkstraQueueElement { weight, vertex: tail }) = queue.pop() {
        if is_settled[tail as usize] {
            continue;
        }
        is_settled[tail as usize] = true;
        settled += 1;

        for edge in graph.edges(tail) {
            let head = edge.head as usize;
            if is_settled[head] {
                continue;
            }

            let alternative_distance = weight.saturating_add(edge.weight);
            if alternative_distance < distances[head] {
                distances[head] = alternative_distance;
                previous[head] = Some(tail);
                queue.push(DijkstraQueueElement::new(alternative_distance, edge.head));
            }
        }
    }

    debug!(source, settled, vertices = number_of_vertices, "dijkstra finished");

    Ok(ShortestPathTree {
        source,
        distances,
        previous,
    })
}
