//! Tests for TreeStore: identity-based removal and derived state

use rstest::{fixture, rstest};

use rstree::domain::{FieldValue, NodeId, TreeStore};
use rstree::util::testing::init_test_setup;

fn load(json: &str) -> TreeStore {
    init_test_setup();
    TreeStore::from_json(json.as_bytes()).unwrap()
}

fn name_of(store: &TreeStore, id: NodeId) -> String {
    store
        .node(id)
        .and_then(|node| node.field("Name"))
        .map(|value| value.to_string())
        .unwrap_or_default()
}

fn root_names(store: &TreeStore) -> Vec<String> {
    store
        .roots()
        .iter()
        .map(|&id| name_of(store, id))
        .collect()
}

fn count_with_id(store: &TreeStore, wanted: i64) -> usize {
    store
        .iter()
        .filter(|(_, node)| node.field("ID") == Some(&FieldValue::from(wanted)))
        .count()
}

/// Three root records, the first two sharing ID 1 but distinct identity.
#[fixture]
fn duplicate_store() -> TreeStore {
    load(
        r#"[{"data": {"ID": 1, "Name": "A"}},
            {"data": {"ID": 1, "Name": "B"}},
            {"data": {"ID": 2, "Name": "C"}}]"#,
    )
}

/// One parent with a single child in group "g".
#[fixture]
fn nested_store() -> TreeStore {
    load(
        r#"[{"data": {"ID": 1, "Name": "Parent"},
             "children": {"g": {"records": [{"data": {"ID": 2, "Name": "Child"}}]}}}]"#,
    )
}

/// Two roots; the first has two groups and a grandchild under "left".
#[fixture]
fn deep_store() -> TreeStore {
    load(
        r#"[{"data": {"ID": 1, "Name": "Root"},
             "children": {
               "left": {"records": [
                 {"data": {"ID": 2, "Name": "Mid"},
                  "children": {"sub": {"records": [{"data": {"ID": 3, "Name": "Grand"}}]}}},
                 {"data": {"ID": 2, "Name": "MidTwin"}}]},
               "right": {"records": [{"data": {"ID": 4, "Name": "Other"}}]}}},
            {"data": {"ID": 5, "Name": "Second"}}]"#,
    )
}

// ============================================================
// Identity Precision Tests
// ============================================================

#[rstest]
fn given_duplicate_ids_when_removing_second_root_then_only_that_instance_is_removed(
    duplicate_store: TreeStore,
) {
    let mut store = duplicate_store;
    let second = store.roots()[1];
    assert_eq!(name_of(&store, second), "B");

    assert!(store.remove(second));

    assert_eq!(root_names(&store), vec!["A", "C"]);
    assert_eq!(count_with_id(&store, 1), 1, "sibling with equal ID must survive");
}

#[rstest]
fn given_duplicate_ids_when_removing_then_survivor_count_drops_by_exactly_one(
    duplicate_store: TreeStore,
) {
    let mut store = duplicate_store;
    let before = count_with_id(&store, 1);

    store.remove(store.roots()[0]);

    assert_eq!(count_with_id(&store, 1), before - 1);
}

// ============================================================
// Stale Reference Tests
// ============================================================

#[rstest]
fn given_removed_id_when_removing_again_then_second_call_is_a_noop(duplicate_store: TreeStore) {
    let mut store = duplicate_store;
    let target = store.roots()[1];

    assert!(store.remove(target));
    let snapshot = root_names(&store);

    assert!(!store.remove(target), "stale remove must report a no-op");
    assert_eq!(root_names(&store), snapshot);
    assert_eq!(store.len(), 2);
}

#[rstest]
fn given_reload_when_loading_new_payload_then_prior_ids_are_stale(duplicate_store: TreeStore) {
    let mut store = duplicate_store;
    let old_root = store.roots()[0];

    store.load(
        rstree::domain::parse_payload(br#"[{"data": {"ID": 9, "Name": "Fresh"}}]"#).unwrap(),
    );

    assert!(!store.remove(old_root));
    assert_eq!(root_names(&store), vec!["Fresh"]);
}

// ============================================================
// Recursive Reach Tests
// ============================================================

#[rstest]
fn given_nested_child_when_removing_then_parent_keeps_group_and_reports_no_children(
    nested_store: TreeStore,
) {
    let mut store = nested_store;
    let parent = store.roots()[0];
    let child = store.node_at_path("0/g/0").unwrap();

    assert!(store.has_children(parent));
    assert!(store.remove(child));

    assert!(!store.has_children(parent));
    assert_eq!(store.len(), 1);
    // The emptied group stays in the mapping; has_children scans records.
    let parent_node = store.node(parent).unwrap();
    assert!(parent_node.groups.get("g").is_some_and(|g| g.is_empty()));
}

#[rstest]
fn given_deep_tree_when_removing_mid_node_then_its_subtree_goes_and_siblings_stay(
    deep_store: TreeStore,
) {
    let mut store = deep_store;
    let mid = store.node_at_path("0/left/0").unwrap();
    let grand = store.node_at_path("0/left/0/sub/0").unwrap();
    assert_eq!(name_of(&store, mid), "Mid");

    assert!(store.remove(mid));

    // Mid and Grand are gone; nothing else moved.
    assert!(store.node(mid).is_none());
    assert!(store.node(grand).is_none(), "children go with their parent");
    assert_eq!(name_of(&store, store.node_at_path("0/left/0").unwrap()), "MidTwin");
    assert_eq!(name_of(&store, store.node_at_path("0/right/0").unwrap()), "Other");
    assert_eq!(root_names(&store), vec!["Root", "Second"]);
    assert_eq!(store.len(), 4);
}

#[rstest]
fn given_sibling_order_when_removing_middle_root_then_order_is_preserved(deep_store: TreeStore) {
    let mut store = deep_store;
    let twin = store.node_at_path("0/left/1").unwrap();

    // Removing the first record of "left" keeps the twin in place.
    store.remove(store.node_at_path("0/left/0").unwrap());
    assert_eq!(store.node_at_path("0/left/0"), Some(twin));
}

// ============================================================
// Header Stability Tests
// ============================================================

#[rstest]
fn given_any_number_of_removals_when_reading_headers_then_header_list_is_stable(
    duplicate_store: TreeStore,
) {
    let mut store = duplicate_store;
    assert_eq!(store.headers(), ["ID", "Name"]);

    while let Some(&root) = store.roots().first() {
        store.remove(root);
    }

    assert!(store.is_empty());
    assert_eq!(store.headers(), ["ID", "Name"], "headers are frozen at load time");
}

#[test]
fn given_empty_payload_when_loading_then_no_headers_and_no_rows() {
    let store = load("[]");
    assert!(store.is_empty());
    assert!(store.headers().is_empty());
    assert_eq!(store.depth(), 0);
}

// ============================================================
// has_children Tests
// ============================================================

#[test]
fn given_only_empty_groups_when_checking_has_children_then_reports_false() {
    let store = load(
        r#"[{"data": {"ID": 1, "Name": "Solo"},
             "children": {"g": {"records": []}, "h": {"records": []}}}]"#,
    );
    assert!(!store.has_children(store.roots()[0]));
}

#[test]
fn given_one_nonempty_group_among_empty_ones_when_checking_has_children_then_reports_true() {
    let store = load(
        r#"[{"data": {"ID": 1, "Name": "Mixed"},
             "children": {"empty": {"records": []},
                          "full": {"records": [{"data": {"ID": 2, "Name": "Kid"}}]}}}]"#,
    );
    assert!(store.has_children(store.roots()[0]));
}

// ============================================================
// Traversal & Addressing Tests
// ============================================================

#[rstest]
fn given_tree_when_iterating_then_preorder_visits_parents_before_children(deep_store: TreeStore) {
    let names: Vec<String> = deep_store
        .iter()
        .map(|(id, _)| name_of(&deep_store, id))
        .collect();
    assert_eq!(
        names,
        vec!["Root", "Mid", "Grand", "MidTwin", "Other", "Second"]
    );
}

#[rstest]
fn given_structural_paths_when_resolving_then_bad_paths_yield_none(deep_store: TreeStore) {
    assert!(deep_store.node_at_path("0").is_some());
    assert!(deep_store.node_at_path("2").is_none());
    assert!(deep_store.node_at_path("0/nope/0").is_none());
    assert!(deep_store.node_at_path("0/left/7").is_none());
    assert!(deep_store.node_at_path("x").is_none());
    assert!(deep_store.node_at_path("0/left").is_none());
}

#[rstest]
fn given_deep_tree_when_measuring_then_depth_len_and_leaves_agree(deep_store: TreeStore) {
    assert_eq!(deep_store.depth(), 3);
    assert_eq!(deep_store.len(), 6);

    let leaves: Vec<String> = deep_store
        .leaves()
        .into_iter()
        .map(|id| name_of(&deep_store, id))
        .collect();
    assert_eq!(leaves, vec!["Grand", "MidTwin", "Other", "Second"]);
}
