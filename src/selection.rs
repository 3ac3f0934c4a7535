use crate::graph::GraphStore;

/// Tracks the at-most-one node currently being edited.
///
/// State machine `{NoSelection, Selected(id)}`. The selection holds only an
/// id into the store, never a copy of the node; any deletion of the selected
/// node must clear the selection in the same operation, which the editor
/// facade guarantees by routing every deletion path through here.
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<String>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any prior selection.
    pub fn select(&mut self, node_id: impl Into<String>) {
        self.selected = Some(node_id.into());
    }

    /// Explicit dismiss (Escape-equivalent input or panel close).
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, node_id: &str) -> bool {
        self.selected.as_deref() == Some(node_id)
    }

    /// Deletes the current selection through the store and transitions to
    /// `NoSelection`. A no-op without a selection; returns whether a node was
    /// actually removed.
    pub fn delete_selected(&mut self, store: &mut GraphStore) -> bool {
        match self.selected.take() {
            Some(id) => store.delete_node(&id),
            None => false,
        }
    }

    /// Reconciles the selection after an out-of-band store deletion: if the
    /// selected id is the one that vanished, drop it.
    pub fn node_removed(&mut self, node_id: &str) {
        if self.is_selected(node_id) {
            self.selected = None;
        }
    }
}
