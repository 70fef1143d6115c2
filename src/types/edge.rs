//! The core edge struct — an unordered pair of vertices.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// An undirected edge between two vertices.
///
/// Equality and hashing treat the pair as unordered: `Edge::new(a, b)` and
/// `Edge::new(b, a)` are the same edge. This lets an edge set count each
/// connection exactly once without picking a canonical endpoint order, which
/// would require `V: Ord`.
#[derive(Debug, Clone, Serialize)]
pub struct Edge<V> {
    a: V,
    b: V,
}

impl<V> Edge<V> {
    /// Create an edge between `a` and `b`. Endpoint order is irrelevant.
    pub fn new(a: V, b: V) -> Self {
        Self { a, b }
    }

    /// Both endpoints, in construction order.
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.a, &self.b)
    }
}

impl<V: Eq> Edge<V> {
    /// Whether `v` is one of this edge's endpoints.
    pub fn is_incident(&self, v: &V) -> bool {
        self.a == *v || self.b == *v
    }

    /// The endpoint opposite `v`, or `None` if `v` is not an endpoint.
    pub fn other(&self, v: &V) -> Option<&V> {
        if self.a == *v {
            Some(&self.b)
        } else if self.b == *v {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl<V: Eq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash each endpoint independently and feed the two digests in sorted
        // order, so (a, b) and (b, a) produce identical hashes. DefaultHasher
        // with default keys is deterministic within a process, which is all a
        // hash implementation needs.
        let da = digest(&self.a);
        let db = digest(&self.b);
        let (lo, hi) = if da <= db { (da, db) } else { (db, da) };
        state.write_u64(lo);
        state.write_u64(hi);
    }
}

fn digest<V: Hash>(v: &V) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}
