//! The abstract operation set every graph representation must support.

/// Contract for a mutable vertex/edge structure over vertex type `V`.
///
/// Mutators communicate every edge case as a `bool` rather than an error:
/// `false` means the call was a safe, observable no-op (duplicate add,
/// missing endpoint, self-pair, removal of something absent). Calling any
/// mutator twice with the same arguments is therefore always safe.
pub trait Graph<V> {
    /// Add `v` with an empty adjacency set. Returns `false` if `v` is
    /// already present.
    fn add_vertex(&mut self, v: V) -> bool;

    /// Remove `v`, its adjacency entry, every reverse adjacency entry
    /// pointing at it, and every incident edge. Returns `false` if `v` is
    /// absent.
    fn remove_vertex(&mut self, v: &V) -> bool;

    /// Connect `a` and `b`. Returns `false` if `a == b`, either endpoint is
    /// not a vertex, or the edge already exists.
    fn add_edge(&mut self, a: V, b: V) -> bool;

    /// Disconnect `a` and `b`. Returns `false` if `a == b`, either endpoint
    /// is not a vertex, or the edge does not exist.
    fn remove_edge(&mut self, a: &V, b: &V) -> bool;

    /// Union `other`'s vertices and edges into this graph, extending
    /// existing adjacency sets rather than overwriting them. Returns `false`
    /// if `other` has no vertices.
    fn add_all(&mut self, other: &Self) -> bool;

    /// Whether `v` is a vertex of this graph.
    fn contains_vertex(&self, v: &V) -> bool;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of distinct undirected edges.
    fn edge_count(&self) -> usize;

    /// All vertices, in insertion order.
    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a;

    /// Neighbors of `v`, in the order their edges were added. Empty for an
    /// absent vertex.
    fn neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a;
}
