use super::edge::Edge;

/// Fire-and-forget notification sink for committed mutations.
///
/// The store calls these hooks after a mutation has fully applied; an
/// observer can surface toasts or log outcomes but never gates or reorders
/// the mutation itself. All hooks default to no-ops.
pub trait GraphObserver {
    fn connection_created(&self, _edge: &Edge) {}

    /// A connection identical to an existing one (same endpoints, same slot)
    /// was inserted. Duplicates are permitted and never merged; this hook
    /// exists so a UI can warn about probable misclicks.
    fn duplicate_connection(&self, _edge: &Edge) {}

    fn node_updated(&self, _node_id: &str) {}

    fn node_deleted(&self, _node_id: &str, _removed_edges: usize) {}
}

/// Observer that ignores every event. Used when no collaborator is attached.
pub struct NullObserver;

impl GraphObserver for NullObserver {}
