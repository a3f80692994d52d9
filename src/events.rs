//! Interaction events delivered to item callbacks.

use crate::tree::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseOver,
    MouseOut,
}

/// One interaction, bubbling from its target towards the root.
#[derive(Debug, Clone)]
pub struct InteractionEvent {
    pub kind: EventKind,
    /// Node the event was dispatched at, when dispatched through a render tree
    pub target: Option<NodeId>,
    /// Node whose handler is currently running
    pub current_target: Option<NodeId>,
    propagation_stopped: bool,
}

impl InteractionEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            target: None,
            current_target: None,
            propagation_stopped: false,
        }
    }

    pub fn click() -> Self {
        Self::new(EventKind::Click)
    }

    pub fn at(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }

    /// Keep ancestors' handlers from seeing this event.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
