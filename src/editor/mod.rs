pub mod input;

pub use input::*;

use crate::catalog::NodeRole;
use crate::error::GraphError;
use crate::graph::{
    Connection, Edge, GraphObserver, GraphSnapshot, GraphStore, Node, NodeData, Position,
};
use crate::selection::SelectionController;
use crate::session::ConfigEditingSession;

/// The editor facade: owns the graph store, the selection, and at most one
/// open config-editing session, and translates rendering-collaborator input
/// events into mutations.
///
/// Events are applied synchronously in delivery order; each one completes
/// fully (cascading edge removal, selection clearing, session teardown)
/// before the next is considered. Every deletion path runs through
/// `delete_node` so the selection invariant holds no matter which input
/// triggered it.
pub struct WorkflowEditor {
    store: GraphStore,
    selection: SelectionController,
    session: Option<ConfigEditingSession>,
}

impl Default for WorkflowEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowEditor {
    /// An editor over an empty graph.
    pub fn new() -> Self {
        Self {
            store: GraphStore::new(),
            selection: SelectionController::new(),
            session: None,
        }
    }

    /// An editor seeded with the demo workflow: a form-submission trigger
    /// feeding an email action feeding a status condition.
    pub fn seeded() -> Self {
        let nodes = vec![
            Node {
                id: "1".to_string(),
                role: NodeRole::Trigger,
                position: Position::new(250.0, 50.0),
                data: NodeData::labeled("When a form is submitted")
                    .with_description("Triggers when a user submits a form"),
            },
            Node {
                id: "2".to_string(),
                role: NodeRole::Action,
                position: Position::new(250.0, 200.0),
                data: NodeData::labeled("Send email notification")
                    .with_description("Sends an email with form data"),
            },
            Node {
                id: "3".to_string(),
                role: NodeRole::Condition,
                position: Position::new(250.0, 350.0),
                data: NodeData::labeled("Check form status")
                    .with_description("Evaluates if form is complete"),
            },
        ];
        let edges = vec![
            Edge {
                id: "e1-2".to_string(),
                source: "1".to_string(),
                target: "2".to_string(),
                source_handle: None,
            },
            Edge {
                id: "e2-3".to_string(),
                source: "2".to_string(),
                target: "3".to_string(),
                source_handle: None,
            },
        ];
        Self {
            store: GraphStore::from_parts(nodes, edges),
            selection: SelectionController::new(),
            session: None,
        }
    }

    /// Attaches the notification collaborator to the underlying store.
    pub fn with_observer(mut self, observer: Box<dyn GraphObserver>) -> Self {
        self.store.set_observer(observer);
        self
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn session(&self) -> Option<&ConfigEditingSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut ConfigEditingSession> {
        self.session.as_mut()
    }

    pub fn snapshot(&self) -> GraphSnapshot<'_> {
        self.store.snapshot()
    }

    /// Palette button: inserts a node with the role's default label and
    /// returns its id.
    pub fn add_node(&mut self, role: NodeRole, position: Position) -> String {
        self.store.add_node(role, position, None)
    }

    /// `nodeClicked` input event: selects the node and opens a config session
    /// seeded from its committed data. Replacing a prior selection discards
    /// that selection's draft.
    pub fn node_clicked(&mut self, node_id: &str) -> Result<(), GraphError> {
        let session = ConfigEditingSession::open(&self.store, node_id)?;
        self.selection.select(node_id);
        self.session = Some(session);
        Ok(())
    }

    /// `connectionDrawn` input event. On failure the graph is unchanged and
    /// the error is surfaced for the notification layer.
    pub fn connection_drawn(&mut self, connection: Connection) -> Result<String, GraphError> {
        self.store.add_edge(connection)
    }

    /// Drag-release: records the node's new canvas position.
    pub fn node_dragged(&mut self, node_id: &str, position: Position) -> Result<(), GraphError> {
        self.store.move_node(node_id, position)
    }

    /// `keyPressed` input event. Escape dismisses the selection and its
    /// draft; Delete and Backspace remove the selected node. Keys without a
    /// selection are no-ops.
    pub fn key_pressed(&mut self, key: Key) {
        match key {
            Key::Escape => {
                self.selection.clear();
                self.session = None;
            }
            Key::Delete | Key::Backspace => {
                self.session = None;
                self.selection.delete_selected(&mut self.store);
            }
        }
    }

    /// Deletes a node, cascading to its edges and reconciling selection and
    /// session in the same operation. No-op success on a missing id.
    pub fn delete_node(&mut self, node_id: &str) -> bool {
        let removed = self.store.delete_node(node_id);
        if removed && self.selection.is_selected(node_id) {
            self.selection.node_removed(node_id);
            self.session = None;
        }
        removed
    }

    /// Commits the open session's draft. Without an open session this is a
    /// no-op.
    pub fn save_session(&mut self) -> Result<(), GraphError> {
        match &self.session {
            Some(session) => session.save(&mut self.store),
            None => Ok(()),
        }
    }

    /// Config panel close: drops the draft and dismisses the selection.
    pub fn close_panel(&mut self) {
        self.session = None;
        self.selection.clear();
    }
}
