use std::path::{Path, PathBuf};

use clap::Parser;
use itertools::Itertools;
use ladder_paths::{
    graphs::{graph_factory::GraphFactory, Graph, VertexId},
    logging,
    queue::QueueKind,
    search::dijkstra::{shortest_path_with_queue, ShortestPathTree},
    utility::get_progressspinner,
};
use tracing::error;

/// Prints a shortest path from `source` to every vertex of each graph.
///
/// A graph file holds the number of vertices followed by `tail head weight`
/// triples. A graph that cannot be read is reported and skipped.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph files
    #[arg(short, long, num_args = 1.., required = true)]
    graph: Vec<PathBuf>,
    /// Vertex all paths start at
    #[arg(short, long, default_value = "0")]
    source: VertexId,
    /// Priority queue used by the search
    #[arg(short, long, value_enum, default_value_t = QueueKind::Heap, env = "LADDER_PATHS_QUEUE")]
    queue: QueueKind,
    /// Print the paths as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Log search statistics
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut failures = 0;
    for path in &args.graph {
        if let Err(err) = report_graph(path, &args) {
            error!("{}", err);
            eprintln!("Error reading file {}: {}", path.display(), err);
            failures += 1;
        }
    }

    if failures == args.graph.len() {
        std::process::exit(1);
    }
}

fn report_graph(path: &Path, args: &Args) -> ladder_paths::Result<()> {
    let spinner = get_progressspinner(&format!("Reading {}", path.display()));
    let graph = GraphFactory::from_file(path);
    spinner.finish_and_clear();
    let graph = graph?;

    let mut queue = args.queue.create();
    let tree = shortest_path_with_queue(&graph, args.source, queue.as_mut())?;

    if args.json {
        let paths: Vec<_> = graph
            .vertices()
            .map(|vertex| (vertex, tree.path(vertex)))
            .collect();
        match serde_json::to_string_pretty(&paths) {
            Ok(json) => println!("{}", json),
            Err(err) => error!("unable to serialize paths: {}", err),
        }
        return Ok(());
    }

    println!("=== Testing Dijkstra with file: {} ===", path.display());
    for vertex in graph.vertices() {
        print!("Shortest path {} -> {}: ", tree.source, vertex);
        print_path(&tree, vertex);
        println!();
    }
    println!("=== End test for {} ===\n", path.display());

    Ok(())
}

fn print_path(tree: &ShortestPathTree, destination: VertexId) {
    match tree.path(destination) {
        Some(path) => {
            println!("{} ", path.vertices.iter().join(" "));
            println!("Total cost is {}", path.weight);
        }
        None => println!("No path found."),
    }
}
