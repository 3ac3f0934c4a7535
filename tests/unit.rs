//! Unit tests for the node catalog, role parsing, and error display.
mod common;
use kaiga::prelude::*;
use std::str::FromStr;

#[test]
fn test_role_round_trips_through_wire_names() {
    for role in NodeRole::ALL {
        assert_eq!(NodeRole::from_str(role.as_str()), Ok(role));
        assert_eq!(format!("{}", role), role.as_str());
    }
}

#[test]
fn test_unknown_role_is_invalid() {
    let err = NodeRole::from_str("webhook").unwrap_err();
    assert_eq!(err, GraphError::InvalidRole("webhook".to_string()));
    // Wire names are exact, not case-folded.
    assert!(NodeRole::from_str("Trigger").is_err());
}

#[test]
fn test_trigger_has_no_target_slot() {
    let layout = NodeRole::Trigger.slots();
    assert!(!layout.has_target);
    assert_eq!(layout.source_slots.len(), 1);
    assert_eq!(layout.source_slots[0].name, None);
}

#[test]
fn test_action_has_target_and_one_source() {
    let layout = NodeRole::Action.slots();
    assert!(layout.has_target);
    assert_eq!(layout.source_slots.len(), 1);
    assert_eq!(layout.source_slots[0].name, None);
}

#[test]
fn test_condition_declares_true_and_false_branches() {
    let layout = NodeRole::Condition.slots();
    assert!(layout.has_target);
    let names: Vec<&str> = layout.slot_names().collect();
    assert_eq!(names, vec!["true", "false"]);
    assert!(layout.declares("true"));
    assert!(layout.declares("false"));
    assert!(!layout.declares("maybe"));
}

#[test]
fn test_anonymous_slots_never_match_named_handles() {
    assert!(!NodeRole::Trigger.slots().declares("true"));
    assert!(!NodeRole::Action.slots().declares("output"));
}

#[test]
fn test_default_labels() {
    assert_eq!(NodeRole::Trigger.default_label(), "New Trigger");
    assert_eq!(NodeRole::Action.default_label(), "New Action");
    assert_eq!(NodeRole::Condition.default_label(), "New Condition");
}

#[test]
fn test_error_display_names_offending_ids() {
    let err = GraphError::NodeNotFound {
        node_id: "node_7".to_string(),
    };
    assert!(err.to_string().contains("node_7"));

    let err = GraphError::InvalidConnection {
        missing_node_id: "node_9".to_string(),
    };
    assert!(err.to_string().contains("node_9"));

    let err = GraphError::SelfLoop {
        node_id: "node_3".to_string(),
    };
    assert!(err.to_string().contains("node_3"));
    assert!(err.to_string().contains("itself"));

    let err = GraphError::UnknownSlot {
        node_id: "node_5".to_string(),
        role: NodeRole::Condition,
        slot: "maybe".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("node_5"));
    assert!(message.contains("condition"));
    assert!(message.contains("maybe"));

    let err = GraphError::InvalidRole("webhook".to_string());
    assert!(err.to_string().contains("webhook"));
}

#[test]
fn test_role_settings_know_their_role() {
    let settings = RoleSettings::Condition {
        expression: Some("status == \"complete\"".to_string()),
    };
    assert_eq!(settings.role(), NodeRole::Condition);
}

#[test]
fn test_edge_serializes_with_camel_case_handle() {
    let edge = Edge {
        id: "edge_0".to_string(),
        source: "3".to_string(),
        target: "1".to_string(),
        source_handle: Some("true".to_string()),
    };
    let json = serde_json::to_value(&edge).expect("edge serializes");
    assert_eq!(json["sourceHandle"], "true");
    // Absent handles are omitted, matching the rendering collaborator's shape.
    let bare = Edge {
        source_handle: None,
        ..edge
    };
    let json = serde_json::to_value(&bare).expect("edge serializes");
    assert!(json.get("sourceHandle").is_none());
}

#[test]
fn test_connection_deserializes_from_wire_shape() {
    let connection: Connection =
        serde_json::from_str(r#"{"source":"3","target":"1","sourceHandle":"false"}"#)
            .expect("wire shape parses");
    assert_eq!(
        connection,
        Connection::new("3", "1").with_handle("false")
    );
}

#[test]
fn test_snapshot_json_shape() {
    let store = common::demo_store();
    let json = store.snapshot().to_json();
    assert_eq!(json["nodes"].as_array().map(|a| a.len()), Some(3));
    assert_eq!(json["edges"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(json["nodes"][0]["role"], "trigger");
}
