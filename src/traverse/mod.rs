//! Graph traversal — breadth-first and depth-first, each as a lazy
//! resumable iterator and as an eager callback walk.
//!
//! Both algorithms mark a vertex visited at *discovery* time (the moment it
//! is queued or becomes the DFS lookahead), never at emission time. That
//! single discipline bounds queue/stack size by the vertex count and keeps
//! the iterator and callback entry points in exact agreement: each callback
//! helper is implemented by draining the corresponding iterator.

pub mod bfs;
pub mod dfs;

use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::UndirectedGraph;

pub use bfs::{bfs_visit, BreadthFirstIter};
pub use dfs::{dfs_visit, DepthFirstIter};

/// Partition the graph into connected components.
///
/// Components are discovered by breadth-first search from each not-yet-seen
/// vertex in insertion order; members of each component appear in BFS order
/// from that seed.
pub fn connected_components<V: Eq + Hash>(graph: &UndirectedGraph<V>) -> Vec<Vec<&V>> {
    let mut seen: HashSet<&V> = HashSet::new();
    let mut components = Vec::new();
    for v in graph.vertices() {
        if seen.contains(v) {
            continue;
        }
        // The seed comes from the graph itself, so construction cannot fail.
        let Ok(iter) = BreadthFirstIter::new(graph, v) else {
            continue;
        };
        let mut members = Vec::new();
        for m in iter {
            seen.insert(m);
            members.push(m);
        }
        components.push(members);
    }
    components
}
