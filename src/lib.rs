//! # Kaiga - Workflow Graph State Model
//!
//! **Kaiga** is the state core of an interactive visual workflow editor: a
//! directed graph of typed nodes (trigger, action, condition) connected by
//! edges, with a single active selection and a transient config-editing
//! draft. The crate owns the mutation protocol — unique id assignment, edge
//! referential integrity, connection legality per node role, and the
//! selection/draft lifecycle — while rendering, theming, and notifications
//! stay external collaborators.
//!
//! ## Core Workflow
//!
//! 1. **Build an editor**: `WorkflowEditor::new()` for an empty canvas or
//!    `WorkflowEditor::seeded()` for the demo graph.
//! 2. **Feed it input events**: the rendering collaborator forwards
//!    `node_clicked`, `connection_drawn`, `key_pressed`, and drag-release
//!    positions; palette buttons call `add_node`.
//! 3. **Redraw from snapshots**: after each event, `snapshot()` hands back a
//!    consistent view of every node and edge.
//! 4. **Observe outcomes**: attach a [`graph::GraphObserver`] to receive
//!    fire-and-forget notifications (connection created, node updated, node
//!    deleted) after mutations commit.
//!
//! ## Quick Start
//!
//! ```rust
//! use kaiga::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Start from the seeded demo graph: trigger -> action -> condition.
//!     let mut editor = WorkflowEditor::seeded();
//!
//!     // The user draws a connection out of the condition's "true" branch.
//!     editor.connection_drawn(Connection::new("3", "2").with_handle("true"))?;
//!
//!     // Clicking a node selects it and opens a config draft.
//!     editor.node_clicked("2")?;
//!     if let Some(session) = editor.session_mut() {
//!         session.set_label("Send welcome email");
//!     }
//!     editor.save_session()?;
//!
//!     // Delete removes the selected node and every edge touching it.
//!     editor.key_pressed(Key::Delete);
//!     assert!(editor.snapshot().node("2").is_none());
//!     assert!(editor.selection().selected().is_none());
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod editor;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod selection;
pub mod session;
