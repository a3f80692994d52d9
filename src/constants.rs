//! Application-wide constants.
//!
//! Centralizes class names, sizes and drag tuning values so the item,
//! the render tree and the gpui adapter agree on them.

// ============================================================================
// Class Names
// ============================================================================

/// Root class of a draggable item; modifiers and descendants derive from it
pub const ITEM_CLASS_ROOT: &str = "DraggableComponent";

/// Descendant holding the actions row
pub const OVERLAY_DESCENDANT: &str = "overlay";

/// Descendant for the row of action buttons
pub const ACTIONS_DESCENDANT: &str = "actions";

/// Descendant for the label shown in the actions row
pub const ACTIONS_LABEL_DESCENDANT: &str = "actionsLabel";

/// Descendant for a single action button
pub const ACTION_DESCENDANT: &str = "action";

/// Descendant wrapping the item's children
pub const CONTENTS_DESCENDANT: &str = "contents";

// ============================================================================
// Item Defaults
// ============================================================================

/// Size of the duplicate/delete glyphs in pixels
pub const ACTION_ICON_SIZE: f32 = 16.0;

/// Height of the actions row in pixels
pub const ACTIONS_ROW_HEIGHT: f32 = 28.0;

/// Corner radius of an item in pixels
pub const ITEM_CORNER_RADIUS: f32 = 6.0;

/// Vertical gap between items in the demo page
pub const ITEM_GAP: f32 = 8.0;

// ============================================================================
// Drag Tuning
// ============================================================================

/// Pointer travel (px) before a pressed item starts dragging
pub const DEFAULT_DRAG_THRESHOLD: f32 = 5.0;

/// Deferred draw priority of the drag overlay layer.
/// Above modals (1500) so a dragged item is never hidden.
pub const DRAG_OVERLAY_PRIORITY: usize = 2000;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "pageboard";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
