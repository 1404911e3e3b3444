//! Error types for dependency graph operations.
//!
//! Every failure here is a contract violation by the caller (an index out of
//! range, a layer used before initialization, a malformed tree). Nothing is
//! retried; errors are surfaced as soon as they are detected.

use std::fmt;

use thiserror::Error;

/// The auxiliary arc layers a node can carry besides its primary head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcLayer {
    /// Secondary heads turning the primary tree into a DAG.
    Secondary,
    /// Predicate-argument arcs.
    Semantic,
}

impl fmt::Display for ArcLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArcLayer::Secondary => f.write_str("secondary"),
            ArcLayer::Semantic => f.write_str("semantic"),
        }
    }
}

/// Errors that can occur while querying or mutating a dependency graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DepError {
    /// A dependent was requested by a position the node does not have.
    #[error("node {node} has {len} dependents, index {index} is out of range")]
    DependentOutOfRange { node: i32, index: usize, len: usize },

    /// A vertex id outside `0..size` was passed to a weighted graph.
    #[error("vertex {vertex} is out of range for a graph of size {size}")]
    VertexOutOfRange { vertex: usize, size: usize },

    /// An arc layer was used before `init_*_heads` was called on the node.
    #[error("{layer} heads of node {node} are not initialized")]
    LayerUninitialized { layer: ArcLayer, node: i32 },

    /// Following primary heads from this node never reaches a rootless node.
    #[error("primary heads form a cycle through node {node}")]
    Cycle { node: i32 },

    /// The head/dependent links disagree with each other.
    #[error("inconsistent links at node {node}: {message}")]
    Inconsistent { node: i32, message: String },
}

/// Result type for dependency graph operations.
pub type DepResult<T> = Result<T, DepError>;
