//! Unit tests for style module.

use pageboard::style::{Cursor, ENGINE_OWNED_PROPERTIES, StyleMap, merge_item_style};

#[test]
fn test_layers_apply_lowest_first() {
    let base = StyleMap::new()
        .with("color", "red")
        .with("transition", "opacity 1s")
        .with("cursor", "pointer");
    let engine = StyleMap::new()
        .with("transition", "none")
        .with("transform", "translate(4px, 8px)");

    let merged = merge_item_style(Some(&base), &engine, Cursor::Grab);

    insta::assert_json_snapshot!(merged, @r#"
    {
      "color": "red",
      "cursor": "grab",
      "transform": "translate(4px, 8px)",
      "transition": "none"
    }
    "#);
}

#[test]
fn test_without_base_style() {
    let merged = merge_item_style(None, &StyleMap::new(), Cursor::Initial);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged.get("cursor"), Some("initial"));
}

#[test]
fn test_cursor_follows_modifier_only() {
    assert_eq!(Cursor::for_item(false), Cursor::Grab);
    assert_eq!(Cursor::for_item(true), Cursor::Initial);
    assert_eq!(Cursor::Grab.to_string(), "grab");
    assert_eq!(Cursor::Initial.as_css(), "initial");
}

#[test]
fn test_cursor_values_are_grab_and_initial_only() {
    assert_eq!(serde_json::from_str::<Cursor>(r#""grab""#).unwrap(), Cursor::Grab);
    assert_eq!(serde_json::from_str::<Cursor>(r#""initial""#).unwrap(), Cursor::Initial);
    assert!(serde_json::from_str::<Cursor>(r#""grabbing""#).is_err());
}

#[test]
fn test_style_map_edits() {
    let mut style: StyleMap = [("a", "1"), ("b", "2")].into_iter().collect();
    style.set("a", "3");
    assert_eq!(style.get("a"), Some("3"));
    assert_eq!(style.remove("b").as_deref(), Some("2"));
    assert!(!style.contains("b"));
    assert_eq!(style.iter().collect::<Vec<_>>(), vec![("a", "3")]);
}

#[test]
fn test_engine_owned_properties_cover_positioning() {
    for property in ["position", "transform", "z-index", "pointer-events"] {
        assert!(ENGINE_OWNED_PROPERTIES.contains(&property), "{property}");
    }
    assert!(!ENGINE_OWNED_PROPERTIES.contains(&"cursor"));
}
