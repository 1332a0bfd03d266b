//! Error types for graph validation and tree construction.
//!
//! Every failure is detected before traversal starts, so an `Err` always
//! means no tree was produced at all.

use thiserror::Error;

/// Result type alias for tree-building operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Invalid input rejected by graph validation or tree construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The graph has no vertices, so there is no start vertex.
    #[error("graph has no vertices; a start vertex is required")]
    EmptyGraph,

    /// An adjacency list references a vertex outside `0..vertex_count`.
    #[error("vertex {vertex} lists neighbor {neighbor}, outside 0..{vertex_count}")]
    VertexOutOfRange {
        /// Vertex whose adjacency list holds the bad entry.
        vertex: usize,
        /// The offending neighbor id.
        neighbor: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// A signed adjacency list references a negative vertex id.
    #[error("vertex {vertex} lists negative neighbor {neighbor}")]
    NegativeVertex {
        /// Vertex whose adjacency list holds the bad entry.
        vertex: usize,
        /// The offending neighbor id.
        neighbor: i64,
    },

    /// The requested traversal root does not exist.
    #[error("root {root} is outside 0..{vertex_count}")]
    RootOutOfRange {
        /// Requested root.
        root: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// Symmetry was required but an edge has no reverse edge.
    #[error("edge {from}->{to} has no reverse edge {to}->{from}")]
    AsymmetricEdge {
        /// Source of the one-way edge.
        from: usize,
        /// Target of the one-way edge.
        to: usize,
    },

    /// A tree value (typically deserialized) breaks the spanning-tree invariants.
    #[error("malformed tree: {0}")]
    MalformedTree(String),
}
