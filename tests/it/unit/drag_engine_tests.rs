//! Unit tests for the pointer drag engine.

use gpui::{point, px, size};
use pageboard::dnd::{
    DragBinding, DragEngine, DragSnapshot, DraggableRegistration, DropOutcome, PointerDragEngine,
};

fn register(engine: &mut PointerDragEngine, id: &str, index: usize, disabled: bool) -> (DragBinding, DragSnapshot) {
    let registration = DraggableRegistration {
        draggable_id: id.to_string(),
        index,
        is_drag_disabled: disabled,
    };
    engine.draggable(&registration, |binding, snapshot| (binding, snapshot))
}

fn press(engine: &mut PointerDragEngine, id: &str) -> bool {
    engine.pointer_down(
        id,
        point(px(10.0), px(10.0)),
        point(px(0.0), px(40.0)),
        size(px(200.0), px(50.0)),
    )
}

#[test]
fn test_unregistered_item_cannot_start() {
    let mut engine = PointerDragEngine::new();
    assert!(!press(&mut engine, "ghost"));
    assert!(engine.phase().is_idle());
}

#[test]
fn test_disabled_item_cannot_start() {
    let mut engine = PointerDragEngine::new();
    let (binding, _) = register(&mut engine, "a", 0, true);

    assert!(binding.drag_handle_props.is_none());
    assert!(!press(&mut engine, "a"));
}

#[test]
fn test_threshold_is_respected() {
    let mut engine = PointerDragEngine::new().with_threshold(20.0);
    register(&mut engine, "a", 0, false);
    assert!(press(&mut engine, "a"));

    assert!(!engine.pointer_move(point(px(22.0), px(22.0))));
    assert!(engine.phase().is_pending());
    assert!(engine.pointer_move(point(px(30.0), px(30.0))));
    assert_eq!(engine.dragging_id(), Some("a"));
}

#[test]
fn test_negative_threshold_clamps_to_zero() {
    let engine = PointerDragEngine::new().with_threshold(-3.0);
    assert_eq!(engine.threshold(), 0.0);
}

#[test]
fn test_only_one_gesture_at_a_time() {
    let mut engine = PointerDragEngine::new();
    register(&mut engine, "a", 0, false);
    register(&mut engine, "b", 1, false);

    assert!(press(&mut engine, "a"));
    assert!(!press(&mut engine, "b"));
}

#[test]
fn test_dragging_binding() {
    let mut engine = PointerDragEngine::new();
    register(&mut engine, "a", 3, false);
    register(&mut engine, "b", 4, false);
    press(&mut engine, "a");
    engine.pointer_move(point(px(30.0), px(60.0)));

    let (binding, snapshot) = register(&mut engine, "a", 3, false);
    assert!(snapshot.is_dragging);
    let transform = binding.transform.unwrap();
    assert_eq!(transform.position(), point(px(20.0), px(90.0)));

    insta::assert_json_snapshot!(binding.draggable_props.style, @r#"
    {
      "box-sizing": "border-box",
      "height": "50px",
      "left": "0px",
      "pointer-events": "none",
      "position": "fixed",
      "top": "40px",
      "transform": "translate(20px, 50px)",
      "transition": "none",
      "width": "200px",
      "z-index": "5000"
    }
    "#);

    // Other items are unaffected
    let (other, other_snapshot) = register(&mut engine, "b", 4, false);
    assert!(!other_snapshot.is_dragging);
    assert!(other.transform.is_none());
    assert!(other.draggable_props.style.is_empty());
}

#[test]
fn test_binding_attributes() {
    let mut engine = PointerDragEngine::new();
    let (binding, _) = register(&mut engine, "a", 0, false);

    let attributes = &binding.draggable_props.attributes;
    assert_eq!(attributes.get("data-rbd-draggable-id").map(String::as_str), Some("a"));
    assert_eq!(
        attributes.get("data-rbd-draggable-context-id").map(String::as_str),
        Some(engine.context_id())
    );
    let handle = binding.drag_handle_props.unwrap();
    assert_eq!(handle.attributes.get("role").map(String::as_str), Some("button"));
}

#[test]
fn test_drop_reports_source_index() {
    let mut engine = PointerDragEngine::new();
    register(&mut engine, "a", 2, false);
    press(&mut engine, "a");
    engine.pointer_move(point(px(40.0), px(40.0)));

    assert_eq!(
        engine.pointer_up(),
        Some(DropOutcome {
            draggable_id: "a".to_string(),
            source_index: 2,
        })
    );
    assert!(engine.phase().is_idle());
}

#[test]
fn test_cancel() {
    let mut engine = PointerDragEngine::new();
    register(&mut engine, "a", 0, false);
    press(&mut engine, "a");
    assert_eq!(engine.cancel(), None);

    press(&mut engine, "a");
    engine.pointer_move(point(px(40.0), px(40.0)));
    assert_eq!(engine.cancel().as_deref(), Some("a"));
    assert_eq!(engine.pointer_up(), None);
}

#[test]
fn test_latest_registration_wins() {
    let mut engine = PointerDragEngine::new();
    register(&mut engine, "a", 0, false);
    register(&mut engine, "a", 5, true);

    let registration = engine.registration("a").unwrap();
    assert_eq!(registration.index, 5);
    assert!(registration.is_drag_disabled);
}
