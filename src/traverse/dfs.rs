//! Depth-first traversal.

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::graph::{Neighbors, UndirectedGraph};
use crate::types::{GraphError, GraphResult};

/// A pull-based, resumable, non-recursive depth-first iterator.
///
/// Depth-first order is produced with an explicit stack of neighbor-iterator
/// frames instead of recursion, so auxiliary space is bounded by the depth
/// of the graph (one frame per level) rather than by the native call stack —
/// a deep chain cannot overflow it. Each frame is the remaining,
/// not-yet-consumed neighbor sequence of a previously emitted vertex.
///
/// The next vertex to emit is computed one step ahead into `lookahead`;
/// the iterator is exhausted exactly when `lookahead` is empty. Exhaustion
/// is terminal. A vertex is marked visited at discovery time, when it
/// becomes the lookahead, so it can never be entered through a second path.
pub struct DepthFirstIter<'g, V> {
    graph: &'g UndirectedGraph<V>,
    visited: HashSet<&'g V>,
    frames: Vec<Neighbors<'g, V>>,
    lookahead: Option<&'g V>,
}

impl<'g, V: Eq + Hash> DepthFirstIter<'g, V> {
    /// Start a depth-first walk rooted at `root`.
    ///
    /// Fails with [`GraphError::RootNotFound`] before any traversal state is
    /// built if `root` is not a vertex of `graph`.
    pub fn new(graph: &'g UndirectedGraph<V>, root: &V) -> GraphResult<Self> {
        let root = graph.vertex(root).ok_or(GraphError::RootNotFound)?;
        let mut visited = HashSet::new();
        visited.insert(root);
        Ok(Self {
            graph,
            visited,
            frames: vec![graph.neighbors(root)],
            lookahead: Some(root),
        })
    }

    /// Compute the next lookahead: pull candidates from the top frame,
    /// skipping already-visited ones; pop exhausted frames to backtrack;
    /// descend by pushing the chosen candidate's neighbor frame.
    fn advance(&mut self) {
        loop {
            let candidate = match self.frames.last_mut() {
                // All frames drained: the walk is complete.
                None => {
                    self.lookahead = None;
                    return;
                }
                Some(frame) => frame.next(),
            };
            match candidate {
                None => {
                    // Backtrack one level.
                    self.frames.pop();
                }
                Some(c) => {
                    if self.visited.insert(c) {
                        self.frames.push(self.graph.neighbors(c));
                        self.lookahead = Some(c);
                        return;
                    }
                }
            }
        }
    }
}

impl<'g, V: Eq + Hash> Iterator for DepthFirstIter<'g, V> {
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.lookahead.take()?;
        self.advance();
        Some(v)
    }
}

impl<V: Eq + Hash> FusedIterator for DepthFirstIter<'_, V> {}

/// Eager, push-style depth-first walk.
///
/// Invokes `visit` once per reachable vertex in the same pre-order
/// [`DepthFirstIter`] would produce, then discards all traversal state.
/// A panic in the callback propagates and aborts the remaining visitation.
pub fn dfs_visit<V, F>(graph: &UndirectedGraph<V>, root: &V, mut visit: F) -> GraphResult<()>
where
    V: Eq + Hash,
    F: FnMut(&V),
{
    for v in DepthFirstIter::new(graph, root)? {
        visit(v);
    }
    Ok(())
}
