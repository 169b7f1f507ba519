//! Error types for graph construction, mutation and queries.

use thiserror::Error;

/// Errors raised by the graph, the engine handle and the JS boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid vertex count: {count} (maximum {max})")]
    InvalidVertexCount { count: i64, max: usize },

    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: i64, vertex_count: usize },

    #[error("negative edge weight: {weight}")]
    NegativeWeight { weight: i64 },

    #[error("edge ({u}, {v}) already exists")]
    DuplicateEdge { u: usize, v: usize },

    #[error("graph not initialized; call createGraph first")]
    NotInitialized,

    #[error("distance {distance} to vertex {vertex} does not fit in a 32-bit result")]
    DistanceOverflow { vertex: usize, distance: u64 },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GraphError::VertexOutOfRange {
            vertex: 7,
            vertex_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "vertex 7 out of range for graph with 4 vertices"
        );
        assert_eq!(
            GraphError::NotInitialized.to_string(),
            "graph not initialized; call createGraph first"
        );
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: GraphError = json_err.into();
        assert!(matches!(err, GraphError::Config(_)));
    }
}
