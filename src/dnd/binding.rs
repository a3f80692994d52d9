//! Per-render drag contract.

use crate::element::RefCallback;
use crate::style::StyleMap;
use gpui::{Pixels, Point, Size, point};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Attributes and style for the draggable root node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraggableProps {
    pub attributes: BTreeMap<String, String>,
    /// Positioning while dragging; usually empty at rest
    pub style: StyleMap,
}

/// Attributes that make a node the drag handle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragHandleProps {
    pub attributes: BTreeMap<String, String>,
}

/// Where a dragged item is drawn: its resting origin moved by the pointer
/// offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTransform {
    pub origin: Point<Pixels>,
    pub offset: Point<Pixels>,
    pub size: Size<Pixels>,
}

impl DragTransform {
    pub fn position(&self) -> Point<Pixels> {
        point(self.origin.x + self.offset.x, self.origin.y + self.offset.y)
    }

    pub fn translate_css(&self) -> String {
        format!(
            "translate({}px, {}px)",
            f32::from(self.offset.x),
            f32::from(self.offset.y)
        )
    }
}

/// Everything an engine hands one item for one render pass.
#[derive(Clone)]
pub struct DragBinding {
    /// Tells the engine which node the item mounted
    pub inner_ref: RefCallback,
    pub draggable_props: DraggableProps,
    /// `None` while dragging is disabled for the item
    pub drag_handle_props: Option<DragHandleProps>,
    /// Set only while the item is dragging
    pub transform: Option<DragTransform>,
}

impl DragBinding {
    /// A binding with no engine behind it: no-op ref, no props.
    pub fn detached() -> Self {
        Self {
            inner_ref: Rc::new(|_| {}),
            draggable_props: DraggableProps::default(),
            drag_handle_props: None,
            transform: None,
        }
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.draggable_props.style = style;
        self
    }
}

impl fmt::Debug for DragBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragBinding")
            .field("draggable_props", &self.draggable_props)
            .field("drag_handle_props", &self.drag_handle_props)
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

/// Gesture state of one item for one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSnapshot {
    pub is_dragging: bool,
}

/// How an item identifies itself to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraggableRegistration {
    /// Stable for the lifetime of the item
    pub draggable_id: String,
    /// Current position among siblings; may change every render
    pub index: usize,
    pub is_drag_disabled: bool,
}

pub trait DragEngine {
    /// Register `registration` for this render and run `render` with the
    /// item's current binding and snapshot.
    fn draggable<R>(
        &mut self,
        registration: &DraggableRegistration,
        render: impl FnOnce(DragBinding, DragSnapshot) -> R,
    ) -> R;
}
