use thiserror::Error;

use crate::arena::NodeId;

/// Core errors are returned as values and never cross the
/// presentation boundary as panics.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("node not found: {0}")]
    NotFound(NodeId),

    #[error("node {parent} already has {limit} children")]
    CapacityExceeded { parent: NodeId, limit: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
