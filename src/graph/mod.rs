pub mod edge;
pub mod node;
pub mod observer;

pub use edge::*;
pub use node::*;
pub use observer::*;

use crate::catalog::NodeRole;
use crate::error::GraphError;
use ahash::AHashSet;
use serde::Serialize;

/// A consistent read-only view of the graph handed to the rendering
/// collaborator. Reflects every completed mutation and nothing else.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GraphSnapshot<'a> {
    pub nodes: &'a [Node],
    pub edges: &'a [Edge],
}

impl GraphSnapshot<'_> {
    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    /// All edges touching the given node, as source or target.
    pub fn edges_of(&self, node_id: &str) -> impl Iterator<Item = &Edge> + '_ {
        let node_id = node_id.to_string();
        self.edges
            .iter()
            .filter(move |e| e.source == node_id || e.target == node_id)
    }

    /// The JSON shape the rendering collaborator consumes.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "nodes": self.nodes,
            "edges": self.edges,
        })
    }
}

/// Canonical owner of the workflow graph's nodes and edges.
///
/// Every mutation is synchronous and atomic with respect to observers:
/// `delete_node` removes the node and its edges before returning, `add_edge`
/// inserts nothing unless the connection validates. Ids issued by the store
/// are never reused within its lifetime.
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// Every id ever issued or seeded. Generated ids skip entries in here,
    /// so a seed id like "node_3" can never collide with a later add.
    issued: AHashSet<String>,
    next_id: u64,
    observer: Box<dyn GraphObserver>,
}

impl std::fmt::Debug for GraphStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphStore")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("issued", &self.issued)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }

    /// Builds a store from pre-validated seed data. Seed ids are registered
    /// so later generated ids cannot collide with them.
    pub(crate) fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut issued = AHashSet::new();
        for node in &nodes {
            let fresh = issued.insert(node.id.clone());
            debug_assert!(fresh, "seed node id '{}' is not unique", node.id);
        }
        for edge in &edges {
            issued.insert(edge.id.clone());
        }
        Self {
            nodes,
            edges,
            issued,
            next_id: 0,
            observer: Box::new(NullObserver),
        }
    }

    /// Builds a store from initial nodes and edges, validating every seed
    /// edge with the same rules as `add_edge`.
    pub fn with_seed(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut store = Self::from_parts(nodes, Vec::new());
        for edge in &edges {
            store.validate_connection(&edge.source, &edge.target, edge.source_handle.as_deref())?;
            store.issued.insert(edge.id.clone());
        }
        store.edges = edges;
        Ok(store)
    }

    /// Attaches the notification collaborator. Replaces any prior observer.
    pub fn set_observer(&mut self, observer: Box<dyn GraphObserver>) {
        self.observer = observer;
    }

    pub fn with_observer(mut self, observer: Box<dyn GraphObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.node(node_id).is_some()
    }

    /// Inserts a new node and returns its freshly issued id. When no data is
    /// given, the label defaults from the role's catalog entry.
    pub fn add_node(&mut self, role: NodeRole, position: Position, data: Option<NodeData>) -> String {
        let id = self.issue_id("node");
        let data = data.unwrap_or_else(|| NodeData::labeled(role.default_label()));
        self.nodes.push(Node {
            id: id.clone(),
            role,
            position,
            data,
        });
        id
    }

    /// Replaces the full data record of a node. No partial patch: callers
    /// that want to keep fields must read them back first.
    pub fn update_node_data(&mut self, node_id: &str, data: NodeData) -> Result<(), GraphError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .ok_or_else(|| GraphError::not_found(node_id))?;
        node.data = data;
        self.observer.node_updated(node_id);
        Ok(())
    }

    /// Records a drag-release position for a node.
    pub fn move_node(&mut self, node_id: &str, position: Position) -> Result<(), GraphError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .ok_or_else(|| GraphError::not_found(node_id))?;
        node.position = position;
        Ok(())
    }

    /// Removes a node and, in the same operation, every edge that references
    /// it as source or target. Deleting an id that is not present is a
    /// successful no-op (the UI may double-fire deletes); the return value
    /// says whether anything was removed.
    pub fn delete_node(&mut self, node_id: &str) -> bool {
        let Some(index) = self.nodes.iter().position(|n| n.id == node_id) else {
            return false;
        };
        self.nodes.remove(index);
        let edges_before = self.edges.len();
        self.edges
            .retain(|e| e.source != node_id && e.target != node_id);
        let removed_edges = edges_before - self.edges.len();
        self.observer.node_deleted(node_id, removed_edges);
        true
    }

    /// Validates a drawn connection and inserts it with a fresh edge id.
    ///
    /// Checks, in order: both endpoints exist, the endpoints are distinct,
    /// and the handle (if any) is a slot the source role declares. Duplicate
    /// connections are inserted as-is, never merged; the observer is told
    /// about them separately.
    pub fn add_edge(&mut self, connection: Connection) -> Result<String, GraphError> {
        self.validate_connection(
            &connection.source,
            &connection.target,
            connection.source_handle.as_deref(),
        )?;

        let edge = Edge {
            id: self.issue_id("edge"),
            source: connection.source,
            target: connection.target,
            source_handle: connection.source_handle,
        };
        let duplicate = self.edges.iter().any(|e| e.same_connection(&edge));

        let id = edge.id.clone();
        self.edges.push(edge);
        if let Some(inserted) = self.edges.last() {
            if duplicate {
                self.observer.duplicate_connection(inserted);
            }
            self.observer.connection_created(inserted);
        }
        Ok(id)
    }

    /// Consistent view for the rendering collaborator.
    pub fn snapshot(&self) -> GraphSnapshot<'_> {
        GraphSnapshot {
            nodes: &self.nodes,
            edges: &self.edges,
        }
    }

    fn validate_connection(
        &self,
        source: &str,
        target: &str,
        handle: Option<&str>,
    ) -> Result<(), GraphError> {
        let source_node = self
            .node(source)
            .ok_or_else(|| GraphError::InvalidConnection {
                missing_node_id: source.to_string(),
            })?;
        if !self.contains_node(target) {
            return Err(GraphError::InvalidConnection {
                missing_node_id: target.to_string(),
            });
        }
        if source == target {
            return Err(GraphError::SelfLoop {
                node_id: source.to_string(),
            });
        }
        if let Some(handle) = handle {
            if !source_node.role.slots().declares(handle) {
                return Err(GraphError::UnknownSlot {
                    node_id: source.to_string(),
                    role: source_node.role,
                    slot: handle.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Issues an id of the form `{prefix}_{n}` that has never been issued or
    /// seeded before. The counter is store-global, so ids stay distinct
    /// across node and edge namespaces too.
    fn issue_id(&mut self, prefix: &str) -> String {
        loop {
            let candidate = format!("{}_{}", prefix, self.next_id);
            self.next_id += 1;
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
