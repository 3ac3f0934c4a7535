use crate::catalog::NodeRole;
use serde::{Deserialize, Serialize};

/// A 2D canvas coordinate. The store only records it; layout and dragging
/// belong to the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Role-specific configuration carried alongside the label and description.
///
/// Keyed by role as a tagged variant so a malformed update (e.g. condition
/// settings on an action node) is unrepresentable at the payload level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleSettings {
    Trigger {
        /// The event name this trigger listens for.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event: Option<String>,
    },
    Action {
        /// Identifier of the handler the action invokes.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        handler: Option<String>,
        #[serde(default)]
        retries: u32,
    },
    Condition {
        /// The boolean expression evaluated to pick the `true`/`false` branch.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expression: Option<String>,
    },
}

impl RoleSettings {
    /// The role these settings belong to.
    pub fn role(&self) -> NodeRole {
        match self {
            RoleSettings::Trigger { .. } => NodeRole::Trigger,
            RoleSettings::Action { .. } => NodeRole::Action,
            RoleSettings::Condition { .. } => NodeRole::Condition,
        }
    }
}

/// The user-editable payload of a node. Replaced wholesale through
/// `GraphStore::update_node_data`, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Role-specific fields the config draft does not expose. A save through
    /// a `ConfigEditingSession` carries these over untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<RoleSettings>,
}

impl NodeData {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            settings: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_settings(mut self, settings: RoleSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

/// A typed vertex in the workflow graph.
///
/// The id is assigned by the store and immutable afterwards; everything else
/// mutates only through `GraphStore` operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub role: NodeRole,
    pub position: Position,
    pub data: NodeData,
}
