//! Pointer, keyboard and item-action handling for the page canvas.

use super::blocks::{Block, drop_index};
use super::state::{ItemAction, PageCanvas};
use crate::draggable::DraggableItemProps;
use crate::events::InteractionEvent;
use crate::profile_scope;
use gpui::*;
use std::rc::Rc;
use tracing::{debug, info};

impl PageCanvas {
    /// Callback that queues `action` for the next drain.
    fn enqueue(&self, action: ItemAction) -> impl Fn(&mut InteractionEvent) + 'static {
        let queue = Rc::clone(&self.actions);
        move |_| queue.borrow_mut().push(action.clone())
    }

    pub(crate) fn props_for(&self, block: &Block, index: usize) -> DraggableItemProps {
        let id = block.id.clone();
        let mounted_id = id.clone();
        let props = DraggableItemProps::new(id.clone(), index)
            .selected(self.selected.as_deref() == Some(id.as_str()))
            .force_hover(self.hovered.as_deref() == Some(id.as_str()))
            .locked(block.locked)
            .drag_disabled(block.locked)
            .label(block.title.clone())
            .on_click(self.enqueue(ItemAction::Select(id.clone())))
            .on_mouse_over(self.enqueue(ItemAction::Hover(id.clone())))
            .on_mouse_out(self.enqueue(ItemAction::Unhover(id.clone())))
            .on_duplicate(self.enqueue(ItemAction::Duplicate(id.clone())))
            .on_delete(self.enqueue(ItemAction::Delete(id.clone())))
            .on_mount(move || debug!(id = %mounted_id, "Block mounted"));

        if self.settings.show_debug {
            props.debug(format!("{id} #{index}"))
        } else {
            props
        }
    }

    /// Apply every queued item action.
    pub(crate) fn drain_actions(&mut self, cx: &mut Context<Self>) {
        let actions: Vec<ItemAction> = self.actions.borrow_mut().drain(..).collect();
        if actions.is_empty() {
            return;
        }
        for action in actions {
            match action {
                ItemAction::Select(id) => self.selected = Some(id),
                ItemAction::Hover(id) => self.hovered = Some(id),
                ItemAction::Unhover(id) => {
                    if self.hovered.as_deref() == Some(id.as_str()) {
                        self.hovered = None;
                    }
                }
                ItemAction::Duplicate(id) => {
                    if let Some(copy) = self.blocks.duplicate(&id) {
                        info!(source = %id, copy = %copy, "Duplicated block");
                        self.selected = Some(copy);
                    }
                }
                ItemAction::Delete(id) => {
                    if self.blocks.remove(&id).is_some() {
                        info!(id = %id, "Deleted block");
                        self.instances.remove(&id);
                        self.engine.unregister(&id);
                        if self.selected.as_deref() == Some(id.as_str()) {
                            self.selected = None;
                        }
                        if self.hovered.as_deref() == Some(id.as_str()) {
                            self.hovered = None;
                        }
                    }
                }
            }
        }
        cx.notify();
    }

    pub(crate) fn press_item(&mut self, id: &str, position: Point<Pixels>) {
        let Some(index) = self.blocks.index_of(id) else {
            return;
        };
        let Some(bounds) = self.item_bounds.borrow().get(index).copied() else {
            return;
        };
        self.engine.pointer_down(id, position, bounds.origin, bounds.size);
    }

    pub(crate) fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_move");

        if self.engine.pointer_move(event.position) {
            cx.notify();
        }
    }

    pub(crate) fn handle_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(outcome) = self.engine.pointer_up() else {
            return;
        };
        let centers: Vec<f32> = self
            .item_bounds
            .borrow()
            .iter()
            .map(|bounds| f32::from(bounds.center().y))
            .collect();
        let to = drop_index(&centers, outcome.source_index, f32::from(event.position.y))
            .min(self.blocks.len().saturating_sub(1));
        if self.blocks.move_block(outcome.source_index, to) {
            info!(id = %outcome.draggable_id, from = outcome.source_index, to, "Moved block");
        }
        cx.notify();
    }

    pub(crate) fn handle_key_down(
        &mut self,
        event: &KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if event.keystroke.key == "escape" && self.engine.cancel().is_some() {
            cx.notify();
        }
    }
}
