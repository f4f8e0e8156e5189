//! Error types for the adjgraph library.

use thiserror::Error;

use super::NodeId;

/// Errors from fallible lookups and edge-list parsing.
///
/// The core graph operations never fail; they treat unknown handles as
/// absent. These variants surface only where a caller asks for a checked
/// result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Handle does not belong to this graph.
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    /// No vertex carries this label.
    #[error("Unknown vertex label: {0}")]
    UnknownLabel(String),

    /// An edge-list entry could not be parsed.
    #[error("Invalid edge entry: {0:?}")]
    InvalidEdge(String),

    /// The edge list contained no entries.
    #[error("Edge list is empty")]
    EmptyEdgeList,
}

/// Convenience result type for adjgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
