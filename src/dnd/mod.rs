//! Drag-and-drop engine contract and a pointer-driven implementation.
//!
//! An item never owns drag state. It registers with an engine once per
//! render and receives a fresh [`DragBinding`] and [`DragSnapshot`] through
//! the render callback. The engine may call that callback on every pointer
//! move of a gesture, so whatever the callback computes must be pure.
//!
//! ## Modules
//!
//! - `binding` - Per-render contract types and the [`DragEngine`] trait
//! - `engine` - [`PointerDragEngine`], a press/threshold/drag state machine

mod binding;
mod engine;

pub use binding::{
    DragBinding, DragEngine, DragHandleProps, DragSnapshot, DragTransform, DraggableProps,
    DraggableRegistration,
};
pub use engine::{DragPhase, DropOutcome, PointerDragEngine};
