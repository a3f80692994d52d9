//! Overlay portal item.
//!
//! Renders one node from a drag binding plus caller props, and picks where
//! the node goes: in flow under its logical parent, or under the overlay
//! root while the item is dragging. The node itself is identical in both
//! cases; only [`Portal::target`] changes.

use crate::dnd::DragBinding;
use crate::element::{ElementNode, Handler};
use crate::events::EventKind;
use crate::style::{ENGINE_OWNED_PROPERTIES, StyleMap};
use crate::tree::OverlayRoot;

/// Where a rendered node attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Under the logical parent, subject to its clipping and stacking
    InFlow,
    /// Under the overlay root, outside every ancestor layout context
    Overlay(OverlayRoot),
}

/// A rendered node together with its attachment target.
#[derive(Debug, Clone)]
pub struct Portal {
    pub target: RenderTarget,
    pub node: ElementNode,
}

impl Portal {
    pub fn in_flow(node: ElementNode) -> Self {
        Self {
            target: RenderTarget::InFlow,
            node,
        }
    }

    pub fn overlay(root: OverlayRoot, node: ElementNode) -> Self {
        Self {
            target: RenderTarget::Overlay(root),
            node,
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self.target, RenderTarget::Overlay(_))
    }
}

/// Builder for the single node of a draggable item.
///
/// Props are applied in order: ref callback, draggable attributes and
/// style, drag-handle attributes, then caller props. Caller attributes and
/// style override engine ones, except for the engine-owned positioning
/// properties, which the engine always keeps.
pub struct PortalItem {
    binding: DragBinding,
    is_dragging: bool,
    class: String,
    style: Option<StyleMap>,
    handlers: Vec<(EventKind, Handler)>,
    children: Vec<ElementNode>,
}

impl PortalItem {
    pub fn new(binding: DragBinding, is_dragging: bool) -> Self {
        Self {
            binding,
            is_dragging,
            class: String::new(),
            style: None,
            handlers: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    pub fn on_mouse_over(mut self, handler: Handler) -> Self {
        self.handlers.push((EventKind::MouseOver, handler));
        self
    }

    pub fn on_mouse_out(mut self, handler: Handler) -> Self {
        self.handlers.push((EventKind::MouseOut, handler));
        self
    }

    pub fn on_click(mut self, handler: Handler) -> Self {
        self.handlers.push((EventKind::Click, handler));
        self
    }

    pub fn child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ElementNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Build the node and choose its target.
    pub fn render(self, overlay: &OverlayRoot) -> Portal {
        let DragBinding {
            inner_ref,
            draggable_props,
            drag_handle_props,
            ..
        } = self.binding;

        let mut node = ElementNode::div().with_ref(inner_ref);
        node.attributes.extend(draggable_props.attributes);
        if let Some(handle) = drag_handle_props {
            node.attributes.extend(handle.attributes);
        }

        let engine_style = draggable_props.style;
        let mut style = engine_style.clone();
        if let Some(caller) = &self.style {
            style.layer(caller);
            for property in ENGINE_OWNED_PROPERTIES {
                if let Some(value) = engine_style.get(property) {
                    style.set(*property, value);
                }
            }
        }
        node.style = style;
        node.class = self.class;
        for (kind, handler) in self.handlers {
            node.handlers.set(kind, handler);
        }
        node.children = self.children;

        if self.is_dragging {
            Portal::overlay(*overlay, node)
        } else {
            Portal::in_flow(node)
        }
    }
}
