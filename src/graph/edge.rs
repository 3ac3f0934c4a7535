use serde::{Deserialize, Serialize};

/// A directed connection between two live nodes.
///
/// Invariant: `source` and `target` always reference nodes currently present
/// in the owning `GraphStore`; node deletion removes touching edges in the
/// same operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Which declared source slot the connection leaves from. Required in
    /// practice for roles with multiple named slots (condition's
    /// `true`/`false` branches).
    #[serde(
        rename = "sourceHandle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_handle: Option<String>,
}

impl Edge {
    /// Whether another edge connects the same endpoints through the same slot.
    pub fn same_connection(&self, other: &Edge) -> bool {
        self.source == other.source
            && self.target == other.target
            && self.source_handle == other.source_handle
    }
}

/// A connection request as drawn by the user, before the store has validated
/// it and assigned an edge id. Mirrors the rendering collaborator's
/// `connectionDrawn` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
    #[serde(
        rename = "sourceHandle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_handle: Option<String>,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            source_handle: None,
        }
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.source_handle = Some(handle.into());
        self
    }
}
