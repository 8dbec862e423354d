use serde::{Deserialize, Serialize};

use crate::graphs::{VertexId, Weight, INFINITY};

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path in the graph and the
/// total weight associated with traversing this path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub weight: Weight,
}

/// Walks the predecessor pointers back from `destination` to the vertex
/// without predecessor and returns the vertices in source to destination
/// order.
///
/// Returns an empty vector if `destination` is out of range or was not
/// reached.
pub fn reconstruct(
    distances: &[Weight],
    previous: &[Option<VertexId>],
    destination: VertexId,
) -> Vec<VertexId> {
    match distances.get(destination as usize) {
        Some(&distance) if distance != INFINITY => {}
        _ => return Vec::new(),
    }

    let mut route = vec![destination];
    let mut current = destination;
    while let Some(predecessor) = previous.get(current as usize).copied().flatten() {
        current = predecessor;
        route.push(current);
    }
    route.reverse();
    route
}
