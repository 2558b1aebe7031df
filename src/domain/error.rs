//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::node::{NodeId, Side};

/// Errors raised by the linkage primitives that variants use to build trees.
///
/// Structural queries never fail: absent or stale handles yield neutral results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("tree already has a root")]
    RootOccupied,

    #[error("{side} slot of {parent} is already occupied")]
    SlotOccupied { parent: NodeId, side: Side },

    #[error("node {0} is not part of this tree")]
    StaleNode(NodeId),

    #[error("node {0} has two children and cannot be spliced out")]
    TwoChildren(NodeId),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
