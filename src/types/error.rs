//! Error types for the graphwalk library.

use thiserror::Error;

/// All errors that can occur in the graphwalk library.
///
/// Graph mutators never return errors — every edge case (duplicate add,
/// missing endpoint, self-pair) collapses to a `bool` no-op. Errors are
/// reserved for iterator construction and for the CLI's edge-list loader.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Traversal root is not a vertex of the graph.
    #[error("root vertex is not in the graph")]
    RootNotFound,

    /// Named vertex not found (CLI-level lookup).
    #[error("vertex {0:?} not found")]
    VertexNotFound(String),

    /// Edge-list line that is neither a vertex, an edge, nor a comment.
    #[error("malformed edge-list line {line}: {text:?}")]
    MalformedEdgeList { line: usize, text: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graphwalk operations.
pub type GraphResult<T> = Result<T, GraphError>;
