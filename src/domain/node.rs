//! Tree nodes and child groups.

use generational_arena::Index;
use indexmap::IndexMap;

use crate::domain::value::FieldValue;

/// Stable identifier of a node inside a [`TreeStore`](crate::domain::TreeStore).
///
/// Generational: once a node is removed, its id never resolves again, even
/// if the arena slot is reused. Two nodes with identical field data always
/// have distinct ids.
pub type NodeId = Index;

/// One named, ordered collection of child nodes attached to a parent.
#[derive(Debug, Clone, Default)]
pub struct ChildGroup {
    /// Child node ids, in payload order.
    pub records: Vec<NodeId>,
}

impl ChildGroup {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One record in the hierarchy.
#[derive(Debug)]
pub struct Node {
    /// Ordered field mapping. Field `ID` is conventionally present but is
    /// not unique across the tree.
    pub data: IndexMap<String, FieldValue>,
    /// Id of the parent node, None for root nodes.
    pub parent: Option<NodeId>,
    /// Named child groups, in payload order. A group that emptied out by
    /// removal stays in the map; emptiness is checked per group.
    pub groups: IndexMap<String, ChildGroup>,
}

impl Node {
    /// True iff at least one child group has a non-empty record list.
    ///
    /// Key presence alone is never consulted, so an empty group and an
    /// absent group are interchangeable.
    pub fn has_children(&self) -> bool {
        self.groups.values().any(|group| !group.is_empty())
    }

    /// Value of `field`, if this node carries it.
    pub fn field(&self, field: &str) -> Option<&FieldValue> {
        self.data.get(field)
    }

    /// Short label for tree displays: the first field value, or `<empty>`.
    pub fn label(&self) -> String {
        self.data
            .values()
            .next()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "<empty>".to_string())
    }
}
