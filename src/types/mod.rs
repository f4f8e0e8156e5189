//! Core data types for the adjgraph library.

pub mod error;
pub mod node;

pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};

/// Separator between the two endpoints of an edge-list entry.
pub const EDGE_SEPARATOR: char = '-';

/// Separator between edge-list entries.
pub const ENTRY_SEPARATOR: char = ',';
