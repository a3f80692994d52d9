//! Page canvas rendering.

use super::blocks::Block;
use super::state::PageCanvas;
use crate::constants::ITEM_GAP;
use crate::draggable::DraggableItem;
use crate::modifier;
use crate::perf::{ScopedTimer, TARGET_FRAME_MS};
use crate::render::{ItemElement, track_modifiers};
use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::{ActiveTheme as _, v_flex};

fn block_body(block: &Block, title: Hsla, muted: Hsla) -> Div {
    v_flex()
        .gap_1()
        .when(!block.title.is_empty(), |d| {
            d.child(div().text_color(title).font_weight(FontWeight::SEMIBOLD).child(block.title.clone()))
        })
        .child(div().text_sm().text_color(muted).child(block.body.clone()))
}

impl Render for PageCanvas {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let _frame = ScopedTimer::new("page_render", TARGET_FRAME_MS);
        self.check_settings_reload(cx);

        let theme = cx.theme();
        let canvas_bg = theme.muted;
        let foreground = theme.foreground;
        let muted_fg = theme.muted_foreground;

        let entity = cx.entity();
        let signal = modifier::global().signal(self.settings.modifier_key);
        let mut items = Vec::with_capacity(self.blocks.len());

        for (index, block) in self.blocks.iter().enumerate() {
            let props = self.props_for(block, index);
            let instance = self
                .instances
                .entry(block.id.clone())
                .or_insert_with(|| DraggableItem::with_layout(self.settings.item_layout()));

            let press_entity = entity.clone();
            let dispatch_entity = entity.clone();
            let id = block.id.clone();

            let element = instance.render_with(&props, &mut self.engine, &signal, |layout, presentation, _binding| {
                ItemElement::new(&props, layout, presentation)
                    .on_press(move |event, _window, cx| {
                        press_entity.update(cx, |this, _cx| this.press_item(&id, event.position));
                    })
                    .on_dispatched(move |_window, cx| {
                        dispatch_entity.update(cx, |this, cx| this.drain_actions(cx));
                    })
                    .child(block_body(block, foreground, muted_fg))
            });
            items.push(element);
        }

        let bounds_store = self.item_bounds.clone();

        div()
            .id("page-canvas")
            .track_focus(&self.focus_handle)
            .size_full()
            .bg(canvas_bg)
            .on_modifiers_changed(cx.listener(|_this, event: &ModifiersChangedEvent, _, cx| {
                track_modifiers(event);
                cx.notify();
            }))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_key_down(cx.listener(Self::handle_key_down))
            .child(
                v_flex()
                    .size_full()
                    .p_6()
                    .pt_10()
                    .gap(px(ITEM_GAP * 4.0))
                    .child(
                        div()
                            .text_color(muted_fg)
                            .text_sm()
                            .child("Drag blocks to reorder. Hold the modifier key to interact with contents."),
                    )
                    .child(
                        v_flex()
                            .gap(px(ITEM_GAP * 4.0))
                            .on_children_prepainted(move |bounds, _window, _cx| {
                                *bounds_store.borrow_mut() = bounds;
                            })
                            .children(items),
                    ),
            )
    }
}
