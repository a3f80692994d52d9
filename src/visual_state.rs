//! Composite visual state of a draggable item.
//!
//! Six independent flags rendered as one class vector. There is no
//! precedence between them: every combination is representable, and the
//! mapping to class tokens is a pure function of the flags.

use crate::class_name::ClassNameFactory;
use serde::Serialize;

/// Modifier names in the order their tokens appear in the class string.
pub const FLAG_NAMES: [&str; 6] = [
    "isSelected",
    "isModifierHeld",
    "isDragging",
    "isLocked",
    "forceHover",
    "indicativeHover",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualState {
    pub is_selected: bool,
    /// Designated modifier key held anywhere in the window
    pub is_modifier_held: bool,
    /// Reported by the drag engine, never set by the item itself
    pub is_dragging: bool,
    pub is_locked: bool,
    pub force_hover: bool,
    pub indicative_hover: bool,
}

impl VisualState {
    /// Flags paired with their modifier names, in class-token order.
    pub fn flags(&self) -> [(&'static str, bool); 6] {
        [
            (FLAG_NAMES[0], self.is_selected),
            (FLAG_NAMES[1], self.is_modifier_held),
            (FLAG_NAMES[2], self.is_dragging),
            (FLAG_NAMES[3], self.is_locked),
            (FLAG_NAMES[4], self.force_hover),
            (FLAG_NAMES[5], self.indicative_hover),
        ]
    }

    /// Build a state from a bitmask; bit `i` sets `FLAG_NAMES[i]`.
    pub fn from_bits(bits: u8) -> Self {
        let bit = |i: u8| bits & (1 << i) != 0;
        Self {
            is_selected: bit(0),
            is_modifier_held: bit(1),
            is_dragging: bit(2),
            is_locked: bit(3),
            force_hover: bit(4),
            indicative_hover: bit(5),
        }
    }

    /// Names of the active flags, in class-token order.
    pub fn active(&self) -> impl Iterator<Item = &'static str> {
        self.flags()
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| name)
    }

    /// True when any hover-style highlight should be drawn.
    pub fn is_highlighted(&self) -> bool {
        self.force_hover || self.indicative_hover
    }

    /// Compose the class string through the class-name service.
    pub fn class_name(&self, factory: &ClassNameFactory) -> String {
        factory.modifiers(&self.flags())
    }
}
