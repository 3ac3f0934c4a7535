//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the kaiga crate so the core
//! surface is available through a single `use`.
//!
//! # Example
//!
//! ```rust
//! use kaiga::prelude::*;
//!
//! let mut editor = WorkflowEditor::seeded();
//! let id = editor.add_node(NodeRole::Action, Position::new(120.0, 240.0));
//! editor.node_clicked(&id).unwrap();
//! ```

// Editor facade and input events
pub use crate::editor::{Key, WorkflowEditor};

// Graph store and data model
pub use crate::graph::{
    Connection, Edge, GraphObserver, GraphSnapshot, GraphStore, Node, NodeData, Position,
    RoleSettings,
};

// Node catalog
pub use crate::catalog::{NodeRole, SlotLayout, SourceSlot};

// Selection and config editing
pub use crate::selection::SelectionController;
pub use crate::session::ConfigEditingSession;

// Error types
pub use crate::error::GraphError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GraphError>;
