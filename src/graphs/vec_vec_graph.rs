use serde::{Deserialize, Serialize};

use super::{
    edge::{TaillessEdge, WeightedEdge},
    Graph, VertexId,
};

/// Adjacency list graph. Every vertex owns the list of its outgoing edges in
/// the order they were added. Parallel edges and self loops are kept.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct VecVecGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl VecVecGraph {
    pub fn with_vertices(number_of_vertices: u32) -> VecVecGraph {
        VecVecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    /// Builds a graph just large enough to hold every endpoint of `edges`.
    pub fn from_edges(edges: &[WeightedEdge]) -> VecVecGraph {
        let number_of_vertices = edges
            .iter()
            .map(|edge| std::cmp::max(edge.tail, edge.head) + 1)
            .max()
            .unwrap_or(0);

        let mut graph = VecVecGraph::with_vertices(number_of_vertices);
        edges.iter().for_each(|edge| graph.add_edge(edge));
        graph
    }

    /// Appends `edge` to the adjacency list of its tail, growing the vertex set
    /// if one of the endpoints is not yet part of the graph.
    pub fn add_edge(&mut self, edge: &WeightedEdge) {
        let max_edge_endpoint = std::cmp::max(edge.tail, edge.head) as usize;
        if max_edge_endpoint >= self.edges.len() {
            self.edges.resize(max_edge_endpoint + 1, Vec::new());
        }

        self.edges[edge.tail as usize].push(edge.tailless());
    }
}

impl Graph for VecVecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + '_> {
        // The iterator owns `tail` so the produced edges can carry it.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: VertexId,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        Box::new(EdgeIterator {
            edge_iter: self.edges[tail as usize].iter(),
            tail,
        })
    }
}
