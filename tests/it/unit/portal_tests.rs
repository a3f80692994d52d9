//! Unit tests for the overlay portal item.

use gpui::{point, px, size};
use pageboard::dnd::{DragBinding, DragHandleProps, DragTransform};
use pageboard::element::ElementNode;
use pageboard::events::{EventKind, InteractionEvent};
use pageboard::portal::{PortalItem, RenderTarget};
use pageboard::style::StyleMap;
use pageboard::tree::RenderTree;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

fn dragging_binding() -> DragBinding {
    let mut binding = DragBinding::detached().with_style(
        StyleMap::new()
            .with("position", "fixed")
            .with("transform", "translate(5px, 5px)"),
    );
    binding
        .draggable_props
        .attributes
        .insert("data-rbd-draggable-id".into(), "a".into());
    binding.drag_handle_props = Some(DragHandleProps {
        attributes: BTreeMap::from([("role".to_string(), "button".to_string())]),
    });
    binding.transform = Some(DragTransform {
        origin: point(px(0.0), px(0.0)),
        offset: point(px(5.0), px(5.0)),
        size: size(px(10.0), px(10.0)),
    });
    binding
}

#[test]
fn test_target_follows_dragging_flag() {
    let tree = RenderTree::new();
    let overlay = tree.overlay_root();

    let resting = PortalItem::new(DragBinding::detached(), false).render(&overlay);
    assert_eq!(resting.target, RenderTarget::InFlow);
    assert!(!resting.is_overlay());

    let dragging = PortalItem::new(dragging_binding(), true).render(&overlay);
    assert_eq!(dragging.target, RenderTarget::Overlay(overlay));
}

#[test]
fn test_node_is_identical_in_both_targets() {
    let overlay = RenderTree::new().overlay_root();
    let build = |dragging| {
        PortalItem::new(dragging_binding(), dragging)
            .class("Item")
            .child(ElementNode::text("hello"))
            .render(&overlay)
            .node
    };

    let in_flow = build(false);
    let overlaid = build(true);
    assert_eq!(in_flow.outline(), overlaid.outline());
    assert_eq!(in_flow.style, overlaid.style);
    assert_eq!(in_flow.attributes, overlaid.attributes);
}

#[test]
fn test_engine_attributes_and_handle_props_merge() {
    let overlay = RenderTree::new().overlay_root();
    let node = PortalItem::new(dragging_binding(), true).render(&overlay).node;

    assert_eq!(node.attributes.get("data-rbd-draggable-id").map(String::as_str), Some("a"));
    assert_eq!(node.attributes.get("role").map(String::as_str), Some("button"));
    assert!(node.node_ref.is_some());
}

#[test]
fn test_caller_style_cannot_move_the_item() {
    let overlay = RenderTree::new().overlay_root();
    let caller = StyleMap::new()
        .with("position", "relative")
        .with("transform", "none")
        .with("color", "blue");

    let node = PortalItem::new(dragging_binding(), true)
        .style(caller)
        .render(&overlay)
        .node;

    assert_eq!(node.style.get("position"), Some("fixed"));
    assert_eq!(node.style.get("transform"), Some("translate(5px, 5px)"));
    assert_eq!(node.style.get("color"), Some("blue"));
}

#[test]
fn test_caller_style_applies_at_rest() {
    let overlay = RenderTree::new().overlay_root();
    let node = PortalItem::new(DragBinding::detached(), false)
        .style(StyleMap::new().with("transform", "scale(2)"))
        .render(&overlay)
        .node;
    assert_eq!(node.style.get("transform"), Some("scale(2)"));
}

#[test]
fn test_caller_handlers_attach_to_root() {
    let overlay = RenderTree::new().overlay_root();
    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();

    let node = PortalItem::new(DragBinding::detached(), false)
        .on_click(Rc::new(move |_: &mut InteractionEvent| counter.set(counter.get() + 1)))
        .render(&overlay)
        .node;

    let handler = node.handlers.get(EventKind::Click).unwrap();
    handler(&mut InteractionEvent::click());
    assert_eq!(clicks.get(), 1);
    assert!(node.handlers.get(EventKind::MouseOver).is_none());
}
