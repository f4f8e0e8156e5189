//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod labeled;
pub mod shortest;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use labeled::LabeledGraph;
pub use undirected::Graph;
