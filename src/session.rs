use crate::error::GraphError;
use crate::graph::GraphStore;

/// A transient editing buffer for the selected node's label and description.
///
/// The draft is seeded from the node's committed data when the selection
/// opens and commits back through `GraphStore::update_node_data` only on an
/// explicit `save`. Dropping the session (selection change, panel close)
/// discards the draft without touching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEditingSession {
    node_id: String,
    label: String,
    description: String,
}

impl ConfigEditingSession {
    /// Opens a session for the given node, seeding the draft from its
    /// committed data. Fails with `NodeNotFound` if the node is gone.
    pub fn open(store: &GraphStore, node_id: &str) -> Result<Self, GraphError> {
        let node = store
            .node(node_id)
            .ok_or_else(|| GraphError::not_found(node_id))?;
        Ok(Self {
            node_id: node_id.to_string(),
            label: node.data.label.clone(),
            description: node.data.description.clone().unwrap_or_default(),
        })
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Commits the draft into the store. The node's current data is re-read
    /// at save time so fields the draft does not expose (role-specific
    /// settings) are carried over untouched. The session stays open.
    ///
    /// Fails with `NodeNotFound` if the node was deleted since the draft
    /// opened; the store is left unchanged.
    pub fn save(&self, store: &mut GraphStore) -> Result<(), GraphError> {
        let node = store
            .node(&self.node_id)
            .ok_or_else(|| GraphError::not_found(&self.node_id))?;
        let mut data = node.data.clone();
        data.label = self.label.clone();
        data.description = if self.description.is_empty() {
            None
        } else {
            Some(self.description.clone())
        };
        store.update_node_data(&self.node_id, data)
    }

    /// Drops the draft. Never mutates the store; consuming the session makes
    /// the guarantee explicit at the call site.
    pub fn discard(self) {}
}
