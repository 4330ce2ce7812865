//! Error types for graph queries and mutations.

/// Errors raised by [`Graph`](super::Graph) operations and the shortest-path engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex (or adjacency row) index was outside `[0, vertex_count)`.
    #[error("Invalid argument: index {index} is out of range for {vertex_count} vertices")]
    InvalidArgument {
        /// The offending index.
        index: usize,
        /// Number of vertices at the time of the call.
        vertex_count: usize,
    },

    /// The graph is internally inconsistent.
    #[error("Logic error: {0}")]
    LogicError(String),
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
