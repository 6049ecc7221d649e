//! The record store: canonical tree ownership and identity-based removal.

use generational_arena::Arena;
use indexmap::IndexMap;
use tracing::{debug, instrument};

use crate::domain::error::StoreResult;
use crate::domain::node::{ChildGroup, Node, NodeId};
use crate::domain::payload::{parse_payload, RawNode};

/// Owns the hierarchy of records and serves all reads and removals.
///
/// Nodes live in a generational arena; consumers address them by
/// [`NodeId`], never by field equality. Records with identical data
/// (including identical `ID`) are distinct entities, and removal only
/// ever touches the exact node asked for.
///
/// There is one logical writer: `load` and `remove` take `&mut self`,
/// which serializes mutations for free.
#[derive(Debug, Default)]
pub struct TreeStore {
    arena: Arena<Node>,
    roots: Vec<NodeId>,
    headers: Vec<String>,
}

impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON payload and load it into a fresh store.
    pub fn from_json(bytes: &[u8]) -> StoreResult<Self> {
        let mut store = Self::new();
        store.load(parse_payload(bytes)?);
        Ok(store)
    }

    /// Replace the whole tree with `payload`.
    ///
    /// Assigns fresh ids to every record; ids handed out before a reload
    /// go stale and removing them becomes a no-op. The header list is
    /// derived here, from the field order of the first root record, and
    /// stays frozen until the next load.
    #[instrument(level = "debug", skip_all, fields(roots = payload.len()))]
    pub fn load(&mut self, payload: Vec<RawNode>) {
        self.arena = Arena::new();
        self.headers = payload
            .first()
            .map(|raw| raw.data.keys().cloned().collect())
            .unwrap_or_default();
        self.roots = payload
            .into_iter()
            .map(|raw| self.insert_raw(raw, None))
            .collect();
        debug!(nodes = self.arena.len(), "tree loaded");
    }

    fn insert_raw(&mut self, raw: RawNode, parent: Option<NodeId>) -> NodeId {
        let id = self.arena.insert(Node {
            data: raw.data,
            parent,
            groups: IndexMap::new(),
        });

        let groups: IndexMap<String, ChildGroup> = raw
            .children
            .into_iter()
            .map(|(name, group)| {
                let records = group
                    .records
                    .into_iter()
                    .map(|child| self.insert_raw(child, Some(id)))
                    .collect();
                (name, ChildGroup { records })
            })
            .collect();

        if let Some(node) = self.arena.get_mut(id) {
            node.groups = groups;
        }
        id
    }

    /// Root record ids, in payload order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Resolve an id against the current tree.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    /// The ordered column header list derived at load time.
    ///
    /// Not recomputed on removal, even when the tree empties out;
    /// recomputing would make columns flicker during interactive
    /// deletion.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// True iff `id` resolves and at least one of its child groups has a
    /// non-empty record list.
    pub fn has_children(&self, id: NodeId) -> bool {
        self.node(id).map(Node::has_children).unwrap_or(false)
    }

    /// Remove exactly the node `target`, along with its whole subtree.
    ///
    /// Siblings keep their order; no other node is touched, including
    /// nodes whose field data compares equal to the target's. A stale or
    /// foreign id is a no-op and returns `false` — a second delete click
    /// on the same row must be safe.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, target: NodeId) -> bool {
        if !self.arena.contains(target) {
            debug!("stale id, nothing removed");
            return false;
        }

        // Detach from the parent's group (or the root list). The group
        // may empty out; it stays in the map, has_children scans records.
        let parent = self.arena.get(target).and_then(|node| node.parent);
        match parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.arena.get_mut(parent_id) {
                    for group in parent_node.groups.values_mut() {
                        group.records.retain(|&child| child != target);
                    }
                }
            }
            None => self.roots.retain(|&root| root != target),
        }

        // Drop the subtree; children are removed with their parent, never
        // re-parented.
        let mut stack = vec![target];
        let mut dropped = 0usize;
        while let Some(id) = stack.pop() {
            if let Some(node) = self.arena.remove(id) {
                dropped += 1;
                for group in node.groups.values() {
                    stack.extend(group.records.iter().copied());
                }
            }
        }
        debug!(dropped, "subtree removed");
        true
    }

    /// Resolve a structural path of the form `0` or `0/kids/1`:
    /// a root position followed by alternating group name and record
    /// position.
    pub fn node_at_path(&self, path: &str) -> Option<NodeId> {
        let mut segments = path.split('/');

        let root_pos: usize = segments.next()?.parse().ok()?;
        let mut current = self.roots.get(root_pos).copied()?;

        loop {
            let Some(group_name) = segments.next() else {
                return Some(current);
            };
            let record_pos: usize = segments.next()?.parse().ok()?;
            current = self
                .node(current)?
                .groups
                .get(group_name)?
                .records
                .get(record_pos)
                .copied()?;
        }
    }

    /// Ids of records without children, in depth-first order.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| !node.has_children())
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of records currently in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Maximum depth over all roots; an empty tree has depth 0.
    pub fn depth(&self) -> usize {
        self.roots
            .iter()
            .map(|&root| self.node_depth(root))
            .max()
            .unwrap_or(0)
    }

    fn node_depth(&self, id: NodeId) -> usize {
        match self.node(id) {
            Some(node) => {
                1 + node
                    .groups
                    .values()
                    .flat_map(|group| &group.records)
                    .map(|&child| self.node_depth(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    /// Depth-first pre-order traversal over all roots.
    pub fn iter(&self) -> TreeIter<'_> {
        TreeIter::new(self)
    }
}

/// Pre-order iterator over `(NodeId, &Node)`.
pub struct TreeIter<'a> {
    store: &'a TreeStore,
    stack: Vec<NodeId>,
}

impl<'a> TreeIter<'a> {
    fn new(store: &'a TreeStore) -> Self {
        // Push roots in reverse for left-to-right traversal
        let stack = store.roots.iter().rev().copied().collect();
        Self { store, stack }
    }
}

impl<'a> Iterator for TreeIter<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.store.node(id)?;
        for group in node.groups.values().rev() {
            for &child in group.records.iter().rev() {
                self.stack.push(child);
            }
        }
        Some((id, node))
    }
}
