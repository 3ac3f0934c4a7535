//! Common test utilities: seeded graphs and a recording observer.
use kaiga::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mutation outcomes captured by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Recorded {
    ConnectionCreated { edge_id: String },
    DuplicateConnection { edge_id: String },
    NodeUpdated { node_id: String },
    NodeDeleted { node_id: String, removed_edges: usize },
}

/// Observer that records every notification for later assertions.
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<Recorded>>>,
}

impl GraphObserver for RecordingObserver {
    fn connection_created(&self, edge: &Edge) {
        self.events.borrow_mut().push(Recorded::ConnectionCreated {
            edge_id: edge.id.clone(),
        });
    }

    fn duplicate_connection(&self, edge: &Edge) {
        self.events.borrow_mut().push(Recorded::DuplicateConnection {
            edge_id: edge.id.clone(),
        });
    }

    fn node_updated(&self, node_id: &str) {
        self.events.borrow_mut().push(Recorded::NodeUpdated {
            node_id: node_id.to_string(),
        });
    }

    fn node_deleted(&self, node_id: &str, removed_edges: usize) {
        self.events.borrow_mut().push(Recorded::NodeDeleted {
            node_id: node_id.to_string(),
            removed_edges,
        });
    }
}

/// Creates a recording observer plus a shared handle to its event log.
#[allow(dead_code)]
pub fn recording_observer() -> (Box<RecordingObserver>, Rc<RefCell<Vec<Recorded>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    (
        Box::new(RecordingObserver {
            events: Rc::clone(&events),
        }),
        events,
    )
}

/// The demo graph from the seeded editor: nodes {1: trigger, 2: action,
/// 3: condition} and edges 1->2, 2->3.
#[allow(dead_code)]
pub fn demo_nodes() -> Vec<Node> {
    vec![
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
    ]
}

#[allow(dead_code)]
pub fn demo_edges() -> Vec<Edge> {
    vec![
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
    ]
}

/// A store seeded with the demo graph.
#[allow(dead_code)]
pub fn demo_store() -> GraphStore {
    GraphStore::with_seed(demo_nodes(), demo_edges()).expect("demo seed is valid")
}
