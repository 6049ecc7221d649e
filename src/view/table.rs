//! Flattened row model and plain-text table rendering.
//!
//! The store stays hierarchical; the terminal wants a flat sequence of
//! rows. Expanded rows contribute one sub-header row per non-empty child
//! group (listing that group's own field names) followed by the group's
//! records, recursively.

use itertools::Itertools;
use tracing::instrument;

use crate::domain::{Node, NodeId, TreeStore};
use crate::view::expand::ExpandState;

const INDENT: &str = "  ";

/// One visible line of the table.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// A record row.
    Record { id: NodeId, depth: usize },
    /// A sub-header row introducing one child group of an expanded row.
    GroupHeader {
        group: String,
        fields: Vec<String>,
        depth: usize,
    },
}

/// Flatten the tree into the rows a consumer would currently see.
#[instrument(level = "trace", skip_all)]
pub fn visible_rows(store: &TreeStore, expand: &ExpandState) -> Vec<Row> {
    let mut rows = Vec::new();
    for &root in store.roots() {
        push_rows(store, expand, root, 0, &mut rows);
    }
    rows
}

fn push_rows(
    store: &TreeStore,
    expand: &ExpandState,
    id: NodeId,
    depth: usize,
    rows: &mut Vec<Row>,
) {
    let Some(node) = store.node(id) else {
        return;
    };
    rows.push(Row::Record { id, depth });

    if !expand.is_open(id) || !node.has_children() {
        return;
    }
    for (name, group) in &node.groups {
        if group.is_empty() {
            continue;
        }
        rows.push(Row::GroupHeader {
            group: name.clone(),
            fields: group_fields(store, &group.records),
            depth: depth + 1,
        });
        for &child in &group.records {
            push_rows(store, expand, child, depth + 1, rows);
        }
    }
}

/// Field names of a group's sub-header: the first record's own keys.
fn group_fields(store: &TreeStore, records: &[NodeId]) -> Vec<String> {
    records
        .first()
        .and_then(|&id| store.node(id))
        .map(|node| node.data.keys().cloned().collect())
        .unwrap_or_default()
}

/// Render the table as plain text.
///
/// Record cells are positional against the nearest header context: the
/// load-time header list at the top level, the group's sub-header fields
/// below. A record lacking a field renders an empty cell.
pub fn render_table(store: &TreeStore, expand: &ExpandState) -> String {
    let mut out = String::new();
    if store.is_empty() {
        out.push_str("No data available\n");
        return out;
    }

    let top = store.headers().iter().join(" | ");
    out.push_str(&top);
    out.push('\n');
    out.push_str(&"-".repeat(top.chars().count().max(1)));
    out.push('\n');

    // Header context per depth; a group sub-header always precedes the
    // records it describes.
    let mut context: Vec<Vec<String>> = vec![store.headers().to_vec()];

    for row in visible_rows(store, expand) {
        match row {
            Row::GroupHeader {
                group,
                fields,
                depth,
            } => {
                context.truncate(depth);
                context.push(fields.clone());
                out.push_str(&format!(
                    "{}[{}] {}\n",
                    INDENT.repeat(depth),
                    group,
                    fields.iter().join(" | "),
                ));
            }
            Row::Record { id, depth } => {
                if let Some(node) = store.node(id) {
                    let fields = context.get(depth).or_else(|| context.last());
                    out.push_str(&record_line(store, expand, node, id, depth, fields));
                }
            }
        }
    }
    out
}

fn record_line(
    store: &TreeStore,
    expand: &ExpandState,
    node: &Node,
    id: NodeId,
    depth: usize,
    fields: Option<&Vec<String>>,
) -> String {
    let icon = if !store.has_children(id) {
        " "
    } else if expand.is_open(id) {
        "▼"
    } else {
        "▶"
    };
    let cells = match fields {
        Some(fields) if !fields.is_empty() => fields
            .iter()
            .map(|field| {
                node.field(field)
                    .map(|value| value.to_string())
                    .unwrap_or_default()
            })
            .join(" | "),
        _ => node.data.values().map(|value| value.to_string()).join(" | "),
    };
    format!("{}{} {}\n", INDENT.repeat(depth), icon, cells)
}
