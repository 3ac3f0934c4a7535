use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of node roles a workflow graph supports.
///
/// The wire-facing names are the lowercase strings the rendering collaborator
/// uses ("trigger", "action", "condition").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Trigger,
    Action,
    Condition,
}

impl NodeRole {
    pub const ALL: [NodeRole; 3] = [NodeRole::Trigger, NodeRole::Action, NodeRole::Condition];

    /// The label a freshly added node of this role receives when the caller
    /// supplies no data.
    pub fn default_label(&self) -> &'static str {
        match self {
            NodeRole::Trigger => "New Trigger",
            NodeRole::Action => "New Action",
            NodeRole::Condition => "New Condition",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeRole::Trigger => "trigger",
            NodeRole::Action => "action",
            NodeRole::Condition => "condition",
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeRole {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trigger" => Ok(NodeRole::Trigger),
            "action" => Ok(NodeRole::Action),
            "condition" => Ok(NodeRole::Condition),
            other => Err(GraphError::InvalidRole(other.to_string())),
        }
    }
}
