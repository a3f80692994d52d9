//! gpui rendering.
//!
//! The item model lives in [`crate::draggable`]; this module only maps an
//! [`ItemPresentation`](crate::draggable::ItemPresentation) onto gpui
//! elements and feeds window input back into the shared trackers.

pub mod item;

pub use item::{ItemElement, cursor_style, icon_name};

use crate::modifier::{self, KeyboardModifiers};
use gpui::ModifiersChangedEvent;

/// Forward a window modifier change to the process-wide tracker.
pub fn track_modifiers(event: &ModifiersChangedEvent) {
    modifier::global().update(KeyboardModifiers::from(event.modifiers));
}
