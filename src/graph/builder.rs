//! Fluent API for building UndirectedGraph instances.

use std::hash::Hash;

use super::UndirectedGraph;

/// Fluent builder for constructing an [`UndirectedGraph`].
///
/// Vertices named only as edge endpoints are added automatically at build
/// time, so small test graphs can be described entirely in terms of their
/// edges. Self-pairs and duplicate edges degrade to no-ops through the
/// graph's own bool-returning mutators.
pub struct GraphBuilder<V> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V> GraphBuilder<V> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a single vertex.
    pub fn vertex(&mut self, v: V) -> &mut Self {
        self.vertices.push(v);
        self
    }

    /// Add several vertices in order.
    pub fn vertices<I: IntoIterator<Item = V>>(&mut self, iter: I) -> &mut Self {
        self.vertices.extend(iter);
        self
    }

    /// Add an edge between `a` and `b`, creating either endpoint on demand.
    pub fn edge(&mut self, a: V, b: V) -> &mut Self {
        self.edges.push((a, b));
        self
    }
}

impl<V: Clone> GraphBuilder<V> {
    /// Add a chain of edges connecting consecutive vertices of `iter`.
    pub fn path<I: IntoIterator<Item = V>>(&mut self, iter: I) -> &mut Self {
        let mut prev: Option<V> = None;
        for v in iter {
            if let Some(p) = prev.replace(v.clone()) {
                self.edges.push((p, v));
            } else {
                // Single-vertex paths still contribute their vertex.
                self.vertices.push(v);
            }
        }
        self
    }
}

impl<V: Eq + Hash + Clone> GraphBuilder<V> {
    /// Build the final graph. Vertices are inserted first in the order they
    /// were given, then edges, auto-creating endpoints not named explicitly.
    pub fn build(&self) -> UndirectedGraph<V> {
        let mut graph = UndirectedGraph::new();
        for v in &self.vertices {
            graph.add_vertex(v.clone());
        }
        for (a, b) in &self.edges {
            graph.add_vertex(a.clone());
            graph.add_vertex(b.clone());
            graph.add_edge(a.clone(), b.clone());
        }
        graph
    }
}

impl<V> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
