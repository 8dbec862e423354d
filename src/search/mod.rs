pub mod dijkstra;
pub mod path;
