//! Items move between their logical parent and the overlay root while
//! dragging, without ever being mounted twice.

use crate::helpers::{CallLog, ItemHarness, item_props};
use pageboard::element::ElementNode;
use pageboard::portal::Portal;

#[test]
fn test_resting_item_renders_in_flow() {
    let log = CallLog::new();
    let mut harness = ItemHarness::new();
    let root = harness.render(&item_props("a", 0, &log));

    assert_eq!(harness.tree.parent(root).unwrap(), Some(harness.container));
    assert!(harness.tree.is_descendant_of(root, harness.container).unwrap());
}

#[test]
fn test_dragging_item_escapes_its_container() {
    let log = CallLog::new();
    let mut harness = ItemHarness::new();
    let props = item_props("a", 0, &log);
    harness.render(&props);

    harness.start_drag("a");
    let root = harness.render(&props);
    let overlay = harness.tree.overlay_root().node();

    assert_eq!(harness.tree.parent(root).unwrap(), Some(overlay));
    assert!(!harness.tree.is_descendant_of(root, harness.container).unwrap());
    assert_eq!(
        harness.tree.ancestors(root).unwrap(),
        vec![overlay, harness.tree.body()]
    );
    assert_eq!(harness.tree.logical_parent("a"), Some(harness.container));
    assert!(harness.tree.children(harness.container).unwrap().is_empty());
}

#[test]
fn test_drop_returns_item_to_container() {
    let log = CallLog::new();
    let mut harness = ItemHarness::new();
    let props = item_props("a", 0, &log);
    harness.render(&props);
    harness.start_drag("a");
    harness.render(&props);

    harness.drop_item();
    let root = harness.render(&props);

    assert_eq!(harness.tree.parent(root).unwrap(), Some(harness.container));
    assert!(harness.tree.children(harness.tree.overlay_root().node()).unwrap().is_empty());
}

#[test]
fn test_switching_targets_never_duplicates_the_item() {
    let log = CallLog::new();
    let mut harness = ItemHarness::new();
    let props = item_props("a", 0, &log);

    harness.render(&props);
    let resting_count = harness.tree.node_count();

    harness.start_drag("a");
    harness.render(&props);
    assert_eq!(harness.tree.node_count(), resting_count);

    harness.render(&props);
    assert_eq!(harness.tree.node_count(), resting_count);

    harness.drop_item();
    harness.render(&props);
    assert_eq!(harness.tree.node_count(), resting_count);
}

#[test]
fn test_repeated_drags_keep_node_storage_bounded() {
    let log = CallLog::new();
    let mut harness = ItemHarness::new();
    let props = item_props("a", 0, &log);

    harness.render(&props);
    harness.start_drag("a");
    harness.render(&props);
    harness.drop_item();
    harness.render(&props);
    let slots = harness.tree.slot_count();

    for _ in 0..50 {
        harness.start_drag("a");
        for _ in 0..20 {
            harness.render(&props);
        }
        harness.drop_item();
        harness.render(&props);
    }
    assert_eq!(harness.tree.slot_count(), slots);
}

#[test]
fn test_engine_ref_follows_the_mounted_node() {
    let log = CallLog::new();
    let mut harness = ItemHarness::new();
    let props = item_props("a", 0, &log);

    let resting = harness.render(&props);
    assert_eq!(harness.engine.attached_node("a"), Some(resting));

    harness.start_drag("a");
    let dragging = harness.render(&props);
    assert_ne!(dragging, resting);
    assert_eq!(harness.engine.attached_node("a"), Some(dragging));
    assert!(!harness.tree.contains(resting));

    assert!(harness.tree.unmount("a").unwrap());
    assert_eq!(harness.engine.attached_node("a"), None);
}

#[test]
fn test_in_flow_rerender_keeps_sibling_order() {
    let log = CallLog::new();
    let mut harness = ItemHarness::new();
    let container = harness.container;
    let first = harness
        .tree
        .commit(container, "first", Portal::in_flow(ElementNode::div().class("first")))
        .unwrap();
    harness.render(&item_props("a", 1, &log));
    harness
        .tree
        .commit(container, "last", Portal::in_flow(ElementNode::div().class("last")))
        .unwrap();

    let root = harness.render(&item_props("a", 1, &log).selected(true));

    let children = harness.tree.children(container).unwrap();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0], first);
    assert_eq!(children[1], root);
}

#[test]
fn test_overlay_root_is_stable() {
    let log = CallLog::new();
    let mut harness = ItemHarness::new();
    let overlay = harness.tree.overlay_root();
    let props = item_props("a", 0, &log);

    harness.render(&props);
    harness.start_drag("a");
    harness.render(&props);
    harness.drop_item();
    harness.render(&props);

    assert_eq!(harness.tree.overlay_root(), overlay);
    assert!(harness.tree.contains(overlay.node()));
    assert_eq!(harness.tree.parent(overlay.node()).unwrap(), Some(harness.tree.body()));
}
