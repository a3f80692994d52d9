//! Unit tests for visual_state module.

use pageboard::class_name::ClassNameFactory;
use pageboard::visual_state::{FLAG_NAMES, VisualState};

#[test]
fn test_flag_order() {
    assert_eq!(
        FLAG_NAMES,
        [
            "isSelected",
            "isModifierHeld",
            "isDragging",
            "isLocked",
            "forceHover",
            "indicativeHover",
        ]
    );
}

#[test]
fn test_every_flag_combination() {
    let names = ClassNameFactory::new("DraggableComponent");

    for bits in 0u8..64 {
        let state = VisualState::from_bits(bits);

        let mut expected = String::from("DraggableComponent");
        for (i, name) in FLAG_NAMES.iter().enumerate() {
            if bits & (1 << i) != 0 {
                expected.push_str(" DraggableComponent--");
                expected.push_str(name);
            }
        }

        assert_eq!(state.class_name(&names), expected, "bits {bits:06b}");
        assert_eq!(state.active().count(), bits.count_ones() as usize);
    }
}

#[test]
fn test_highlight_comes_from_either_hover_flag() {
    assert!(!VisualState::default().is_highlighted());
    assert!(
        VisualState {
            force_hover: true,
            ..Default::default()
        }
        .is_highlighted()
    );
    assert!(
        VisualState {
            indicative_hover: true,
            ..Default::default()
        }
        .is_highlighted()
    );
}

#[test]
fn test_serializes_with_class_names() {
    let state = VisualState {
        is_selected: true,
        is_locked: true,
        ..Default::default()
    };

    insta::assert_json_snapshot!(state, @r#"
    {
      "isSelected": true,
      "isModifierHeld": false,
      "isDragging": false,
      "isLocked": true,
      "forceHover": false,
      "indicativeHover": false
    }
    "#);
}
