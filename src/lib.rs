//! graphwalk — generic undirected graph with resumable BFS/DFS traversal.
//!
//! Vertices are arbitrary value types with equality and hashing; the graph
//! owns an insertion-order-preserving adjacency map plus an unordered-pair
//! edge set. Breadth-first and depth-first orders are each available as a
//! lazy pull-based iterator and as an eager callback walk, and both entry
//! points share one traversal implementation per algorithm.

pub mod cli;
pub mod graph;
pub mod traverse;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder, Neighbors, UndirectedGraph, Vertices};
pub use traverse::{
    bfs_visit, connected_components, dfs_visit, BreadthFirstIter, DepthFirstIter,
};
pub use types::{Edge, GraphError, GraphResult};
