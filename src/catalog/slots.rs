use super::role::NodeRole;

/// A single outbound connection point declared by a node role.
///
/// Trigger and action nodes expose one anonymous slot; condition nodes expose
/// two named slots for their boolean branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSlot {
    pub name: Option<&'static str>,
}

/// The declared connection-slot layout of a node role. Pure data, resolved
/// statically per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLayout {
    /// Whether nodes of this role accept inbound connections. Only triggers
    /// have no target slot.
    pub has_target: bool,
    pub source_slots: &'static [SourceSlot],
}

const UNNAMED: &[SourceSlot] = &[SourceSlot { name: None }];
const BRANCHES: &[SourceSlot] = &[
    SourceSlot { name: Some("true") },
    SourceSlot {
        name: Some("false"),
    },
];

const TRIGGER_SLOTS: SlotLayout = SlotLayout {
    has_target: false,
    source_slots: UNNAMED,
};
const ACTION_SLOTS: SlotLayout = SlotLayout {
    has_target: true,
    source_slots: UNNAMED,
};
const CONDITION_SLOTS: SlotLayout = SlotLayout {
    has_target: true,
    source_slots: BRANCHES,
};

impl NodeRole {
    /// Looks up the connection-slot layout declared for this role.
    pub fn slots(&self) -> SlotLayout {
        match self {
            NodeRole::Trigger => TRIGGER_SLOTS,
            NodeRole::Action => ACTION_SLOTS,
            NodeRole::Condition => CONDITION_SLOTS,
        }
    }
}

impl SlotLayout {
    /// Whether this layout declares a source slot with the given name.
    /// An anonymous slot never matches a named handle.
    pub fn declares(&self, handle: &str) -> bool {
        self.source_slots.iter().any(|s| s.name == Some(handle))
    }

    pub fn slot_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.source_slots.iter().filter_map(|s| s.name)
    }
}
