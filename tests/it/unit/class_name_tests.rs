//! Unit tests for class_name module.

use pageboard::class_name::ClassNameFactory;
use std::collections::HashMap;

#[test]
fn test_plain_names() {
    let names = ClassNameFactory::new("DraggableComponent");
    assert_eq!(names.root(), "DraggableComponent");
    assert_eq!(names.descendant("actionsLabel"), "DraggableComponent-actionsLabel");
    assert_eq!(
        names.modifier_token("isLocked").as_deref(),
        Some("DraggableComponent--isLocked")
    );
}

#[test]
fn test_modifiers_without_active_flags_is_root() {
    let names = ClassNameFactory::new("DraggableComponent");
    assert_eq!(
        names.modifiers(&[("isSelected", false), ("isDragging", false)]),
        "DraggableComponent"
    );
}

#[test]
fn test_modifiers_keep_input_order() {
    let names = ClassNameFactory::new("Item");
    assert_eq!(
        names.modifiers(&[("b", true), ("a", true), ("c", false)]),
        "Item Item--b Item--a"
    );
}

#[test]
fn test_style_map_hashes_names() {
    let styles = HashMap::from([
        ("Item".to_string(), "_Item_x1".to_string()),
        ("Item-overlay".to_string(), "_Item-overlay_x2".to_string()),
        ("Item--isSelected".to_string(), "_Item--isSelected_x3".to_string()),
    ]);
    let names = ClassNameFactory::new("Item").with_styles(styles);

    assert_eq!(names.root(), "_Item_x1");
    assert_eq!(names.descendant("overlay"), "_Item-overlay_x2");
    // Unmapped descendants render without a class
    assert_eq!(names.descendant("contents"), "");
    assert_eq!(
        names.modifiers(&[("isSelected", true), ("isLocked", true)]),
        "_Item_x1 _Item--isSelected_x3"
    );
}

#[test]
fn test_base_class_prefix() {
    let names = ClassNameFactory::new("Item").with_base_class("pb-");
    assert_eq!(names.root(), "pb-Item");
    assert_eq!(names.descendant("overlay"), "pb-Item-overlay");
    assert_eq!(names.root_name(), "Item");
}
