//! Graph contract and the adjacency-map-backed implementation.

pub mod builder;
pub mod contract;
pub mod undirected;

pub use builder::GraphBuilder;
pub use contract::Graph;
pub use undirected::{Neighbors, UndirectedGraph, Vertices};
