//! Per-row expand/collapse state.
//!
//! Ephemeral view state keyed by node identity. It lives outside the
//! store on purpose: expansion is not tree data and is never persisted
//! into nodes.

use std::collections::HashSet;

use crate::domain::{NodeId, TreeStore};

/// The set of currently expanded rows.
#[derive(Debug, Default)]
pub struct ExpandState {
    open: HashSet<NodeId>,
}

impl ExpandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, id: NodeId) -> bool {
        self.open.contains(&id)
    }

    /// Flip a row's state; returns the new state.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if !self.open.insert(id) {
            self.open.remove(&id);
        }
        self.is_open(id)
    }

    pub fn expand(&mut self, id: NodeId) {
        self.open.insert(id);
    }

    pub fn collapse(&mut self, id: NodeId) {
        self.open.remove(&id);
    }

    /// Mark every row that has children as expanded.
    pub fn expand_all(&mut self, store: &TreeStore) {
        for (id, node) in store.iter() {
            if node.has_children() {
                self.open.insert(id);
            }
        }
    }

    /// Drop state for ids that no longer resolve (e.g. after a removal).
    pub fn prune(&mut self, store: &TreeStore) {
        self.open.retain(|&id| store.node(id).is_some());
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_payload;

    fn sample_store() -> TreeStore {
        let payload = parse_payload(
            br#"[{"data": {"ID": 1, "Name": "Parent"},
                 "children": {"kids": {"records": [{"data": {"ID": 2, "Name": "Child"}}]}}}]"#,
        )
        .unwrap();
        let mut store = TreeStore::new();
        store.load(payload);
        store
    }

    #[test]
    fn test_toggle_flips_state() {
        let store = sample_store();
        let root = store.roots()[0];
        let mut expand = ExpandState::new();

        assert!(!expand.is_open(root));
        assert!(expand.toggle(root));
        assert!(expand.is_open(root));
        assert!(!expand.toggle(root));
    }

    #[test]
    fn test_prune_drops_removed_rows() {
        let mut store = sample_store();
        let root = store.roots()[0];
        let mut expand = ExpandState::new();
        expand.expand_all(&store);
        assert!(expand.is_open(root));

        store.remove(root);
        expand.prune(&store);
        assert!(!expand.is_open(root));
    }
}
