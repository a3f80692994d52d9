//! Interaction routing through a mounted item: action buttons, contents
//! and the item root, in flow and while dragging.

use crate::helpers::{CallLog, ItemHarness, item_props};
use pageboard::element::ElementNode;
use pageboard::events::EventKind;
use pageboard::portal::Portal;
use pageboard::tree::{NodeId, RenderTree};

fn action_buttons(harness: &ItemHarness, root: NodeId) -> Vec<NodeId> {
    let actions = harness
        .tree
        .find_by_class(root, "DraggableComponent-actions")
        .unwrap()
        .unwrap();
    harness
        .tree
        .children(actions)
        .unwrap()
        .iter()
        .copied()
        .filter(|child| harness.tree.tag(*child).unwrap() == "button")
        .collect()
}

/// A harness whose container has its own click handler recording
/// `page_click`.
fn harness_with_clickable_page(log: &CallLog) -> ItemHarness {
    let mut tree = RenderTree::new();
    let body = tree.body();
    let page = tree
        .commit(
            body,
            "page",
            Portal::in_flow(ElementNode::div().class("page").on_click(log.recorder("page_click"))),
        )
        .unwrap();
    ItemHarness::with_container(tree, page)
}

#[test]
fn test_duplicate_button_does_not_select() {
    let log = CallLog::new();
    let mut harness = ItemHarness::new();
    let root = harness.render(&item_props("a", 0, &log));
    log.clear();

    let buttons = action_buttons(&harness, root);
    let event = harness.tree.dispatch(buttons[0], EventKind::Click).unwrap();

    assert!(event.is_propagation_stopped());
    assert_eq!(log.calls(), vec!["duplicate"]);
}

#[test]
fn test_delete_button_does_not_select() {
    let log = CallLog::new();
    let mut harness = ItemHarness::new();
    let root = harness.render(&item_props("a", 0, &log));
    log.clear();

    let buttons = action_buttons(&harness, root);
    harness.tree.dispatch(buttons[1], EventKind::Click).unwrap();

    assert_eq!(log.calls(), vec!["delete"]);
}

#[test]
fn test_click_on_icon_reaches_its_button() {
    let log = CallLog::new();
    let mut harness = ItemHarness::new();
    let root = harness.render(&item_props("a", 0, &log));
    log.clear();

    let delete = action_buttons(&harness, root)[1];
    let icon = harness.tree.children(delete).unwrap()[0];
    harness.tree.dispatch(icon, EventKind::Click).unwrap();

    assert_eq!(log.calls(), vec!["delete"]);
}

#[test]
fn test_contents_click_bubbles_to_item() {
    let log = CallLog::new();
    let mut harness = harness_with_clickable_page(&log);
    let root = harness.render(&item_props("a", 0, &log));
    log.clear();

    let contents = harness
        .tree
        .find_by_class(root, "DraggableComponent-contents")
        .unwrap()
        .unwrap();
    let event = harness.tree.dispatch(contents, EventKind::Click).unwrap();

    assert!(!event.is_propagation_stopped());
    assert_eq!(event.target, Some(contents));
    assert_eq!(log.calls(), vec!["click", "page_click"]);
}

#[test]
fn test_overlay_item_bubbles_to_logical_parent() {
    let log = CallLog::new();
    let mut harness = harness_with_clickable_page(&log);
    let props = item_props("a", 0, &log);
    harness.render(&props);
    harness.start_drag("a");
    let root = harness.render(&props);
    log.clear();

    assert_eq!(
        harness.tree.parent(root).unwrap(),
        Some(harness.tree.overlay_root().node())
    );
    harness.tree.dispatch(root, EventKind::Click).unwrap();
    assert_eq!(log.calls(), vec!["click", "page_click"]);

    log.clear();
    let buttons = action_buttons(&harness, root);
    harness.tree.dispatch(buttons[0], EventKind::Click).unwrap();
    assert_eq!(log.calls(), vec!["duplicate"]);
}

#[test]
fn test_hover_events_reach_item_callbacks() {
    let log = CallLog::new();
    let mut harness = ItemHarness::new();
    let root = harness.render(&item_props("a", 0, &log));
    log.clear();

    harness.tree.dispatch(root, EventKind::MouseOver).unwrap();
    harness.tree.dispatch(root, EventKind::MouseOut).unwrap();

    assert_eq!(log.calls(), vec!["mouse_over", "mouse_out"]);
}

#[test]
fn test_dispatch_on_unknown_node_fails() {
    let log = CallLog::new();
    let mut harness = ItemHarness::new();
    let props = item_props("a", 0, &log);
    let stale = harness.render(&props);
    harness.render(&props);

    assert!(harness.tree.dispatch(stale, EventKind::Click).is_err());
}
