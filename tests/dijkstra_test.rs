use std::{io::Write, path::Path};

use ladder_paths::{
    graphs::{
        edge::WeightedEdge, graph_factory::GraphFactory, vec_vec_graph::VecVecGraph, Graph,
        VertexId, Weight, INFINITY,
    },
    queue::QueueKind,
    search::dijkstra::{shortest_path, shortest_path_with_queue, ShortestPathTree},
    Error,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_graph(rng: &mut StdRng, number_of_vertices: u32, number_of_edges: u32) -> VecVecGraph {
    let mut graph = VecVecGraph::with_vertices(number_of_vertices);
    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        let weight = rng.gen_range(0..20);
        graph.add_edge(&WeightedEdge::new(tail, head, weight));
    }
    graph
}

fn bellman_ford(graph: &dyn Graph, source: VertexId) -> Vec<Weight> {
    let mut distances = vec![INFINITY; graph.number_of_vertices() as usize];
    distances[source as usize] = 0;
    for _ in graph.vertices() {
        for tail in graph.vertices() {
            if distances[tail as usize] == INFINITY {
                continue;
            }
            for edge in graph.edges(tail) {
                let alternative = distances[tail as usize] + edge.weight;
                if alternative < distances[edge.head as usize] {
                    distances[edge.head as usize] = alternative;
                }
            }
        }
    }
    distances
}

fn path_weight(graph: &dyn Graph, vertices: &[VertexId]) -> Weight {
    vertices
        .windows(2)
        .map(|pair| {
            graph
                .edges(pair[0])
                .filter(|edge| edge.head == pair[1])
                .map(|edge| edge.weight)
                .min()
                .expect("consecutive vertices must share an edge")
        })
        .sum()
}

fn assert_consistent(graph: &dyn Graph, tree: &ShortestPathTree) {
    assert_eq!(tree.distances[tree.source as usize], 0);
    assert_eq!(tree.previous[tree.source as usize], None);

    for vertex in graph.vertices() {
        let vertices = tree.reconstruct(vertex);
        if tree.distances[vertex as usize] == INFINITY {
            assert!(vertices.is_empty());
            assert_eq!(tree.previous[vertex as usize], None);
            continue;
        }
        assert_eq!(vertices.first(), Some(&tree.source));
        assert_eq!(vertices.last(), Some(&vertex));
        assert_eq!(path_weight(graph, &vertices), tree.distances[vertex as usize]);
    }
}

#[test]
fn small_graph_from_file() {
    let graph = GraphFactory::from_file(Path::new("tests/data/small.txt")).unwrap();
    let tree = shortest_path(&graph, 0).unwrap();

    assert_eq!(tree.distances, vec![0, 3, 6, 5]);
    assert_eq!(tree.previous, vec![None, Some(0), Some(0), Some(1)]);
    assert_eq!(tree.reconstruct(3), vec![0, 1, 3]);
    assert_eq!(tree.path(3).map(|path| path.weight), Some(5));
    assert_consistent(&graph, &tree);
}

#[test]
fn unreachable_vertices_keep_infinity() {
    let graph = GraphFactory::from_file(Path::new("tests/data/disconnected.txt")).unwrap();
    let tree = shortest_path(&graph, 0).unwrap();

    assert_eq!(tree.distances[..3], [0, 5, 6]);
    assert!(tree.distances[3..].iter().all(|&distance| distance == INFINITY));
    assert_eq!(tree.reconstruct(2), vec![0, 1, 2]);
    assert!(tree.reconstruct(4).is_empty());
    assert!(tree.path(5).is_none());
    assert!(tree.reconstruct(100).is_empty());

    let tree = shortest_path(&graph, 3).unwrap();
    assert_eq!(tree.reconstruct(5), vec![3, 4, 5]);
    assert!(tree.reconstruct(0).is_empty());
}

#[test]
fn matches_bellman_ford_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let number_of_vertices = rng.gen_range(1..40);
        let number_of_edges = rng.gen_range(0..number_of_vertices * 4);
        let graph = random_graph(&mut rng, number_of_vertices, number_of_edges);
        let source = rng.gen_range(0..number_of_vertices);

        let expected = bellman_ford(&graph, source);
        for kind in [QueueKind::Heap, QueueKind::Radix] {
            let mut queue = kind.create();
            let tree = shortest_path_with_queue(&graph, source, queue.as_mut()).unwrap();
            assert_eq!(tree.distances, expected);
            assert_consistent(&graph, &tree);
        }
    }
}

#[test]
fn source_out_of_range_is_rejected() {
    let graph = VecVecGraph::with_vertices(3);
    assert!(matches!(
        shortest_path(&graph, 3),
        Err(Error::VertexOutOfRange { vertex: 3, .. })
    ));
}

#[test]
fn load_failures_are_reported() {
    let missing = GraphFactory::from_file(Path::new("tests/data/missing.txt"));
    assert!(matches!(missing, Err(Error::Io { .. })));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "3\n0 1 2\n1 x 4").unwrap();
    let malformed = GraphFactory::from_file(file.path());
    assert!(matches!(malformed, Err(Error::Parse { line: 3, .. })));
}
