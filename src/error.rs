use crate::catalog::NodeRole;
use thiserror::Error;

/// Errors that can occur while mutating the workflow graph.
///
/// All variants are local, recoverable conditions: a failed mutation leaves
/// the store unchanged and is reported back to the input-handling layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Unrecognized node role: '{0}'")]
    InvalidRole(String),

    #[error("Node '{node_id}' not found")]
    NodeNotFound { node_id: String },

    #[error("Connection references node '{missing_node_id}', which does not exist")]
    InvalidConnection { missing_node_id: String },

    #[error("Connection from node '{node_id}' to itself is not allowed")]
    SelfLoop { node_id: String },

    #[error("Node '{node_id}' ({role}) declares no source slot named '{slot}'")]
    UnknownSlot {
        node_id: String,
        role: NodeRole,
        slot: String,
    },
}

impl GraphError {
    pub fn not_found(node_id: impl Into<String>) -> Self {
        GraphError::NodeNotFound {
            node_id: node_id.into(),
        }
    }
}
