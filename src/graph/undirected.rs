//! Adjacency-map-backed undirected graph.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::types::Edge;

use super::Graph;

/// An undirected graph over vertex type `V`.
///
/// Storage is deliberately dual: an adjacency map gives O(1) neighbor lookup
/// for traversal, and an edge set gives O(1) edge-count and existence queries
/// without double-counting (the unordered [`Edge`] identity makes `(a, b)`
/// and `(b, a)` the same element, so no "sum of adjacency sizes / 2" is
/// needed). Both containers preserve insertion order, which makes neighbor
/// visitation order deterministic and exact-order traversal tests meaningful.
///
/// Invariants held after every public operation:
/// - symmetry: `b ∈ neighbors(a)` iff `a ∈ neighbors(b)`
/// - no self-loops
/// - every vertex referenced by an edge or adjacency set is a graph vertex
/// - the edge set and the adjacency map describe the same edge relation
///
/// The graph is not safe for concurrent mutation; an in-flight iterator
/// borrows the graph immutably, so the borrow checker already rejects
/// structural mutation during traversal.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V> {
    /// Vertex -> set of adjacent vertices.
    adjacency: IndexMap<V, IndexSet<V>>,
    /// All edges, each unordered pair stored once.
    edges: IndexSet<Edge<V>>,
}

impl<V> UndirectedGraph<V> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
            edges: IndexSet::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> Vertices<'_, V> {
        Vertices(self.adjacency.keys())
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> indexmap::set::Iter<'_, Edge<V>> {
        self.edges.iter()
    }
}

impl<V: Eq + Hash> UndirectedGraph<V> {
    /// Whether `v` is a vertex of this graph.
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// The graph's own reference to the vertex equal to `v`, if present.
    /// Traversal state borrows these instead of cloning vertex values.
    pub fn vertex(&self, v: &V) -> Option<&V> {
        self.adjacency.get_key_value(v).map(|(k, _)| k)
    }

    /// Neighbors of `v` in the order their edges were added. Empty for an
    /// absent vertex, so iterator code needs no missing-vertex special case.
    pub fn neighbors(&self, v: &V) -> Neighbors<'_, V> {
        Neighbors(self.adjacency.get(v).map(|set| set.iter()))
    }

    /// Number of edges incident to `v`; zero for an absent vertex.
    pub fn degree(&self, v: &V) -> usize {
        self.adjacency.get(v).map_or(0, IndexSet::len)
    }

    /// Whether an edge connects `a` and `b`, in either orientation.
    pub fn contains_edge(&self, a: &V, b: &V) -> bool {
        self.adjacency
            .get(a)
            .map_or(false, |set| set.contains(b))
    }
}

impl<V: Eq + Hash + Clone> UndirectedGraph<V> {
    /// Add `v` with an empty adjacency set. No-op (`false`) if already
    /// present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, IndexSet::new());
        true
    }

    /// Remove `v` and cascade: drop its adjacency entry, remove it from
    /// every other adjacency set, and drop every incident edge. No-op
    /// (`false`) if `v` is absent.
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        let Some(neighbors) = self.adjacency.shift_remove(v) else {
            return false;
        };
        for n in &neighbors {
            if let Some(set) = self.adjacency.get_mut(n) {
                set.shift_remove(v);
            }
        }
        self.edges.retain(|e| !e.is_incident(v));
        true
    }

    /// Connect `a` and `b`. No-op (`false`) if `a == b`, either endpoint is
    /// not a vertex, or the edge already exists.
    pub fn add_edge(&mut self, a: V, b: V) -> bool {
        if a == b || !self.adjacency.contains_key(&a) || !self.adjacency.contains_key(&b) {
            return false;
        }
        if !self.edges.insert(Edge::new(a.clone(), b.clone())) {
            return false;
        }
        if let Some(set) = self.adjacency.get_mut(&a) {
            set.insert(b.clone());
        }
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.insert(a);
        }
        true
    }

    /// Disconnect `a` and `b`. No-op (`false`) if `a == b` or the edge does
    /// not exist.
    pub fn remove_edge(&mut self, a: &V, b: &V) -> bool {
        if a == b {
            return false;
        }
        if !self.edges.shift_remove(&Edge::new(a.clone(), b.clone())) {
            return false;
        }
        if let Some(set) = self.adjacency.get_mut(a) {
            set.shift_remove(b);
        }
        if let Some(set) = self.adjacency.get_mut(b) {
            set.shift_remove(a);
        }
        true
    }

    /// Union `other` into this graph. Existing adjacency sets are extended,
    /// never overwritten. No-op (`false`) if `other` has no vertices.
    pub fn add_all(&mut self, other: &Self) -> bool {
        if other.adjacency.is_empty() {
            return false;
        }
        for v in other.adjacency.keys() {
            self.add_vertex(v.clone());
        }
        for e in &other.edges {
            let (a, b) = e.endpoints();
            self.add_edge(a.clone(), b.clone());
        }
        true
    }
}

impl<V> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality compares the adjacency map only. The edge set is
/// derivable from adjacency, so including it could only ever agree or
/// contradict, never add information.
impl<V: Eq + Hash> PartialEq for UndirectedGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<V: Eq + Hash> Eq for UndirectedGraph<V> {}

impl<V: Eq + Hash + Clone> Graph<V> for UndirectedGraph<V> {
    fn add_vertex(&mut self, v: V) -> bool {
        UndirectedGraph::add_vertex(self, v)
    }

    fn remove_vertex(&mut self, v: &V) -> bool {
        UndirectedGraph::remove_vertex(self, v)
    }

    fn add_edge(&mut self, a: V, b: V) -> bool {
        UndirectedGraph::add_edge(self, a, b)
    }

    fn remove_edge(&mut self, a: &V, b: &V) -> bool {
        UndirectedGraph::remove_edge(self, a, b)
    }

    fn add_all(&mut self, other: &Self) -> bool {
        UndirectedGraph::add_all(self, other)
    }

    fn contains_vertex(&self, v: &V) -> bool {
        UndirectedGraph::contains_vertex(self, v)
    }

    fn vertex_count(&self) -> usize {
        UndirectedGraph::vertex_count(self)
    }

    fn edge_count(&self) -> usize {
        UndirectedGraph::edge_count(self)
    }

    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        UndirectedGraph::vertices(self)
    }

    fn neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        UndirectedGraph::neighbors(self, v)
    }
}

/// Iterator over a graph's vertices in insertion order.
pub struct Vertices<'g, V>(indexmap::map::Keys<'g, V, IndexSet<V>>);

impl<'g, V> Iterator for Vertices<'g, V> {
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for Vertices<'_, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<V> std::iter::FusedIterator for Vertices<'_, V> {}

/// Iterator over a vertex's neighbors in edge-insertion order. Yields
/// nothing for a vertex that is not in the graph.
pub struct Neighbors<'g, V>(Option<indexmap::set::Iter<'g, V>>);

impl<'g, V> Iterator for Neighbors<'g, V> {
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.0 {
            Some(it) => it.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<V> ExactSizeIterator for Neighbors<'_, V> {
    fn len(&self) -> usize {
        self.0.as_ref().map_or(0, ExactSizeIterator::len)
    }
}

impl<V> std::iter::FusedIterator for Neighbors<'_, V> {}
