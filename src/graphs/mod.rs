pub mod edge;
pub mod graph_factory;
pub mod vec_vec_graph;

use self::edge::WeightedEdge;

pub type VertexId = u32;
pub type Weight = u32;

/// Distance of every vertex that was not reached by a search.
pub const INFINITY: Weight = Weight::MAX;

pub trait Graph {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.edges(vertex).len() as u32)
            .sum::<u32>()
    }

    /// Outgoing edges of `tail` in insertion order.
    ///
    /// Panics if `tail` is not a vertex of the graph.
    fn edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + '_>;

    fn vertices(&self) -> std::ops::Range<VertexId> {
        0..self.number_of_vertices()
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.number_of_vertices()
    }
}
