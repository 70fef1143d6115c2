//! Breadth-first traversal.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::graph::UndirectedGraph;
use crate::types::{GraphError, GraphResult};

/// A pull-based, resumable breadth-first iterator over one connected
/// component.
///
/// The iterator borrows the graph immutably for its whole lifetime and owns
/// its traversal state (visited set + FIFO queue), so any number of
/// iterators can walk the same graph independently. Neighbors are marked
/// visited the moment they are enqueued; a vertex reachable through several
/// predecessors is therefore queued at most once and emitted exactly once.
///
/// Dropping a partially consumed iterator is always safe — no resources are
/// held beyond the borrow, and the graph is never mutated.
pub struct BreadthFirstIter<'g, V> {
    graph: &'g UndirectedGraph<V>,
    visited: HashSet<&'g V>,
    queue: VecDeque<&'g V>,
}

impl<'g, V: Eq + Hash> BreadthFirstIter<'g, V> {
    /// Start a breadth-first walk rooted at `root`.
    ///
    /// Fails with [`GraphError::RootNotFound`] before any traversal state is
    /// built if `root` is not a vertex of `graph`.
    pub fn new(graph: &'g UndirectedGraph<V>, root: &V) -> GraphResult<Self> {
        let root = graph.vertex(root).ok_or(GraphError::RootNotFound)?;
        let mut visited = HashSet::new();
        visited.insert(root);
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Ok(Self {
            graph,
            visited,
            queue,
        })
    }
}

impl<'g, V: Eq + Hash> Iterator for BreadthFirstIter<'g, V> {
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.queue.pop_front()?;
        for n in self.graph.neighbors(v) {
            // insert() returning true means "not seen before": mark at
            // enqueue time so converging paths cannot queue a vertex twice.
            if self.visited.insert(n) {
                self.queue.push_back(n);
            }
        }
        Some(v)
    }
}

impl<V: Eq + Hash> FusedIterator for BreadthFirstIter<'_, V> {}

/// Eager, push-style breadth-first walk.
///
/// Invokes `visit` once per reachable vertex in the same order
/// [`BreadthFirstIter`] would produce, then discards all traversal state.
/// A panic in the callback propagates and aborts the remaining visitation.
pub fn bfs_visit<V, F>(graph: &UndirectedGraph<V>, root: &V, mut visit: F) -> GraphResult<()>
where
    V: Eq + Hash,
    F: FnMut(&V),
{
    for v in BreadthFirstIter::new(graph, root)? {
        visit(v);
    }
    Ok(())
}
