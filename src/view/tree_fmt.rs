//! termtree rendering of the hierarchy.

use termtree::Tree;

use crate::domain::{NodeId, TreeStore};

/// Conversion into `termtree` trees, one per root record.
pub trait TreeStringConvert {
    fn to_tree_strings(&self) -> Vec<Tree<String>>;
}

impl TreeStringConvert for TreeStore {
    fn to_tree_strings(&self) -> Vec<Tree<String>> {
        self.roots()
            .iter()
            .map(|&root| subtree(self, root))
            .collect()
    }
}

fn subtree(store: &TreeStore, id: NodeId) -> Tree<String> {
    let Some(node) = store.node(id) else {
        return Tree::new("<missing>".to_string());
    };

    // Non-empty groups become labeled intermediate nodes so the named
    // grouping stays visible in the output.
    let leaves: Vec<Tree<String>> = node
        .groups
        .iter()
        .filter(|(_, group)| !group.is_empty())
        .map(|(name, group)| {
            let records: Vec<_> = group
                .records
                .iter()
                .map(|&child| subtree(store, child))
                .collect();
            Tree::new(format!("[{}]", name)).with_leaves(records)
        })
        .collect();

    Tree::new(node.label()).with_leaves(leaves)
}
