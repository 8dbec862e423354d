use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::info;

use super::{edge::WeightedEdge, vec_vec_graph::VecVecGraph, Graph, VertexId, Weight};
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Reads a graph from a whitespace separated text file.
    ///
    /// Lines starting with `#` are comments. The first value is the number of
    /// vertices `n`, followed by one `tail head weight` triple per edge. Edges
    /// may span lines; vertices must lie in `0..n`.
    pub fn from_file(path: &Path) -> Result<VecVecGraph> {
        let file = File::open(path).map_err(|source| Error::io(path, source))?;
        let graph = Self::from_reader(BufReader::new(file), path)?;

        info!(
            path = %path.display(),
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            "read graph"
        );
        Ok(graph)
    }

    /// Same as [`GraphFactory::from_file`], `path` only labels errors.
    pub fn from_reader(reader: impl BufRead, path: &Path) -> Result<VecVecGraph> {
        let mut tokens = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::io(path, source))?;
            let line_number = index + 1;
            if line.trim_start().starts_with('#') {
                continue;
            }
            tokens.extend(
                line.split_whitespace()
                    .map(|token| (line_number, token.to_string())),
            );
        }

        let mut tokens = tokens.into_iter();
        let Some((line, token)) = tokens.next() else {
            return Err(Error::parse(path, 0, "missing number of vertices"));
        };
        let number_of_vertices: u32 = parse_value(path, line, &token, "number of vertices")?;

        let mut graph = VecVecGraph::with_vertices(number_of_vertices);
        while let Some((line, tail)) = tokens.next() {
            let tail: VertexId = parse_value(path, line, &tail, "tail")?;
            let (line, head) = tokens
                .next()
                .ok_or_else(|| Error::parse(path, line, "no head found"))?;
            let head: VertexId = parse_value(path, line, &head, "head")?;
            let (line, weight) = tokens
                .next()
                .ok_or_else(|| Error::parse(path, line, "no weight found"))?;
            let weight: Weight = parse_value(path, line, &weight, "weight")?;

            for vertex in [tail, head] {
                if vertex >= number_of_vertices {
                    return Err(Error::parse(
                        path,
                        line,
                        format!(
                            "vertex {} out of range for {} vertices",
                            vertex, number_of_vertices
                        ),
                    ));
                }
            }

            graph.add_edge(&WeightedEdge::new(tail, head, weight));
        }

        Ok(graph)
    }
}

fn parse_value<T: std::str::FromStr>(
    path: &Path,
    line: usize,
    token: &str,
    what: &str,
) -> Result<T> {
    token.parse().map_err(|_| {
        Error::parse(path, line, format!("unable to parse {} '{}'", what, token))
    })
}
