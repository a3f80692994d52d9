//! Pointer drag engine - press, threshold, drag, drop.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Pending   (pointer down on an enabled, registered item)
//! Pending  -> Dragging  (pointer moved at least `threshold` px)
//! Pending  -> Idle      (pointer up: it was a click)
//! Dragging -> Idle      (pointer up: drop, or cancel)
//! ```
//!
//! The engine only tracks the gesture of one item at a time (single
//! pointer). It reports which item was dropped and from which index;
//! deciding where it lands belongs to whoever orchestrates the list.

use super::binding::{
    DragBinding, DragEngine, DragHandleProps, DragSnapshot, DragTransform, DraggableProps,
    DraggableRegistration,
};
use crate::constants::DEFAULT_DRAG_THRESHOLD;
use crate::profile_scope;
use crate::style::StyleMap;
use crate::tree::NodeId;
use gpui::{Pixels, Point, Size, point};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use tracing::debug;

/// Stacking order of a dragged item's fixed-position style
const DRAGGING_Z_INDEX: &str = "5000";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragPhase {
    /// No pointer pressed on an item
    #[default]
    Idle,

    /// Pointer pressed on an item but not moved far enough yet
    Pending {
        draggable_id: String,
        source_index: usize,
        /// Pointer position at press
        press: Point<Pixels>,
        /// Item's resting top-left at press
        origin: Point<Pixels>,
        size: Size<Pixels>,
    },

    /// Item follows the pointer
    Dragging {
        draggable_id: String,
        source_index: usize,
        press: Point<Pixels>,
        origin: Point<Pixels>,
        size: Size<Pixels>,
        /// Latest pointer position
        current: Point<Pixels>,
    },
}

impl DragPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Id of the pressed or dragged item
    pub fn draggable_id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Pending { draggable_id, .. } | Self::Dragging { draggable_id, .. } => {
                Some(draggable_id)
            }
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// Result of releasing a dragged item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome {
    pub draggable_id: String,
    pub source_index: usize,
}

pub struct PointerDragEngine {
    context_id: String,
    threshold: f32,
    phase: DragPhase,
    registry: HashMap<String, DraggableRegistration>,
    attached: Rc<RefCell<HashMap<String, NodeId>>>,
}

impl Default for PointerDragEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerDragEngine {
    pub fn new() -> Self {
        Self {
            context_id: uuid::Uuid::new_v4().to_string(),
            threshold: DEFAULT_DRAG_THRESHOLD,
            phase: DragPhase::Idle,
            registry: HashMap::new(),
            attached: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Minimum pointer travel, in pixels, before a press becomes a drag.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.max(0.0);
        self
    }

    pub fn context_id(&self) -> &str {
        &self.context_id
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Latest registration seen for `draggable_id`.
    pub fn registration(&self, draggable_id: &str) -> Option<&DraggableRegistration> {
        self.registry.get(draggable_id)
    }

    /// Node the item last attached through its binding's ref.
    pub fn attached_node(&self, draggable_id: &str) -> Option<NodeId> {
        self.attached.borrow().get(draggable_id).copied()
    }

    pub fn dragging_id(&self) -> Option<&str> {
        match &self.phase {
            DragPhase::Dragging { draggable_id, .. } => Some(draggable_id),
            _ => None,
        }
    }

    pub fn is_dragging(&self, draggable_id: &str) -> bool {
        self.dragging_id() == Some(draggable_id)
    }

    /// Press on an item. Returns false if the press cannot start a gesture:
    /// another gesture is active, the item never registered, or it is
    /// disabled.
    pub fn pointer_down(
        &mut self,
        draggable_id: &str,
        press: Point<Pixels>,
        origin: Point<Pixels>,
        size: Size<Pixels>,
    ) -> bool {
        if !self.phase.is_idle() {
            return false;
        }
        let Some(registration) = self.registry.get(draggable_id) else {
            debug!(draggable_id, "Press on unregistered item ignored");
            return false;
        };
        if registration.is_drag_disabled {
            return false;
        }

        self.phase = DragPhase::Pending {
            draggable_id: draggable_id.to_string(),
            source_index: registration.index,
            press,
            origin,
            size,
        };
        true
    }

    /// Pointer moved. Returns true when items need to re-render.
    pub fn pointer_move(&mut self, position: Point<Pixels>) -> bool {
        profile_scope!("drag_pointer_move");

        match &mut self.phase {
            DragPhase::Idle => false,
            DragPhase::Pending {
                draggable_id,
                source_index,
                press,
                origin,
                size,
            } => {
                let dx = f32::from(position.x - press.x);
                let dy = f32::from(position.y - press.y);
                if (dx * dx + dy * dy).sqrt() < self.threshold {
                    return false;
                }
                debug!(draggable_id = %draggable_id, index = *source_index, "Drag started");
                self.phase = DragPhase::Dragging {
                    draggable_id: std::mem::take(draggable_id),
                    source_index: *source_index,
                    press: *press,
                    origin: *origin,
                    size: *size,
                    current: position,
                };
                true
            }
            DragPhase::Dragging { current, .. } => {
                *current = position;
                true
            }
        }
    }

    /// Pointer released. Returns the drop when a drag was in progress.
    pub fn pointer_up(&mut self) -> Option<DropOutcome> {
        let phase = std::mem::take(&mut self.phase);
        match phase {
            DragPhase::Dragging {
                draggable_id,
                source_index,
                ..
            } => {
                debug!(draggable_id = %draggable_id, source_index, "Drag ended");
                Some(DropOutcome {
                    draggable_id,
                    source_index,
                })
            }
            _ => None,
        }
    }

    /// Abort any gesture. Returns the id of the item that was dragging.
    pub fn cancel(&mut self) -> Option<String> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { draggable_id, .. } => {
                debug!(draggable_id = %draggable_id, "Drag cancelled");
                Some(draggable_id)
            }
            _ => None,
        }
    }

    /// Forget an item that is no longer rendered. A gesture on it is
    /// abandoned. Returns false if the item was not registered.
    pub fn unregister(&mut self, draggable_id: &str) -> bool {
        if self.phase.draggable_id() == Some(draggable_id) {
            debug!(draggable_id, "Gesture on removed item abandoned");
            self.phase.reset();
        }
        self.attached.borrow_mut().remove(draggable_id);
        self.registry.remove(draggable_id).is_some()
    }

    fn transform_for(&self, draggable_id: &str) -> Option<DragTransform> {
        match &self.phase {
            DragPhase::Dragging {
                draggable_id: id,
                press,
                origin,
                size,
                current,
                ..
            } if id == draggable_id => Some(DragTransform {
                origin: *origin,
                offset: point(current.x - press.x, current.y - press.y),
                size: *size,
            }),
            _ => None,
        }
    }

    fn binding_for(&self, registration: &DraggableRegistration) -> DragBinding {
        let id = registration.draggable_id.as_str();
        let transform = self.transform_for(id);

        let attributes = BTreeMap::from([
            ("data-rbd-draggable-context-id".to_string(), self.context_id.clone()),
            ("data-rbd-draggable-id".to_string(), id.to_string()),
        ]);

        let drag_handle_props = (!registration.is_drag_disabled).then(|| DragHandleProps {
            attributes: BTreeMap::from([
                ("data-rbd-drag-handle-draggable-id".to_string(), id.to_string()),
                ("data-rbd-drag-handle-context-id".to_string(), self.context_id.clone()),
                (
                    "aria-describedby".to_string(),
                    format!("rbd-hidden-text-{}", self.context_id),
                ),
                ("role".to_string(), "button".to_string()),
                ("tabindex".to_string(), "0".to_string()),
                ("draggable".to_string(), "false".to_string()),
            ]),
        });

        let style = match &transform {
            Some(t) => StyleMap::new()
                .with("position", "fixed")
                .with("top", format!("{}px", f32::from(t.origin.y)))
                .with("left", format!("{}px", f32::from(t.origin.x)))
                .with("box-sizing", "border-box")
                .with("width", format!("{}px", f32::from(t.size.width)))
                .with("height", format!("{}px", f32::from(t.size.height)))
                .with("transition", "none")
                .with("transform", t.translate_css())
                .with("z-index", DRAGGING_Z_INDEX)
                .with("pointer-events", "none"),
            None => StyleMap::new(),
        };

        let attached = Rc::clone(&self.attached);
        let ref_id = id.to_string();
        let inner_ref = Rc::new(move |node: Option<NodeId>| {
            let mut attached = attached.borrow_mut();
            match node {
                Some(node) => {
                    attached.insert(ref_id.clone(), node);
                }
                None => {
                    attached.remove(&ref_id);
                }
            }
        });

        DragBinding {
            inner_ref,
            draggable_props: DraggableProps { attributes, style },
            drag_handle_props,
            transform,
        }
    }
}

impl DragEngine for PointerDragEngine {
    fn draggable<R>(
        &mut self,
        registration: &DraggableRegistration,
        render: impl FnOnce(DragBinding, DragSnapshot) -> R,
    ) -> R {
        self.registry
            .insert(registration.draggable_id.clone(), registration.clone());

        let binding = self.binding_for(registration);
        let snapshot = DragSnapshot {
            is_dragging: self.is_dragging(&registration.draggable_id),
        };
        render(binding, snapshot)
    }
}
