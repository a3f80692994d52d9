//! gpui rendering of a draggable item.
//!
//! [`ItemElement`] draws an [`ItemPresentation`] with gpui primitives. While
//! the presentation says the item is dragging, the whole item is wrapped in
//! `deferred(anchored(..))`: it is laid out at the drag position in window
//! coordinates and painted after everything else, so ancestor clipping and
//! scroll offsets no longer apply. Otherwise it renders in place.

use crate::constants::{ACTIONS_ROW_HEIGHT, DRAG_OVERLAY_PRIORITY, ITEM_CORNER_RADIUS};
use crate::draggable::{DraggableItemProps, EventCallback, ItemLayout, ItemPresentation};
use crate::element::IconKind;
use crate::events::{EventKind, InteractionEvent};
use crate::style::Cursor;
use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::{ActiveTheme as _, Icon, IconName, h_flex};
use std::rc::Rc;

type PressListener = Rc<dyn Fn(&MouseDownEvent, &mut Window, &mut App)>;
type DispatchListener = Rc<dyn Fn(&mut Window, &mut App)>;

/// gpui cursor for an item cursor.
pub fn cursor_style(cursor: Cursor) -> CursorStyle {
    match cursor {
        Cursor::Grab => CursorStyle::OpenHand,
        Cursor::Initial => CursorStyle::Arrow,
    }
}

pub fn icon_name(kind: IconKind) -> IconName {
    match kind {
        IconKind::Duplicate => IconName::Copy,
        IconKind::Delete => IconName::Delete,
    }
}

fn fire(callback: &EventCallback, kind: EventKind) -> InteractionEvent {
    let mut event = InteractionEvent::new(kind);
    callback(&mut event);
    event
}

/// Run an item callback for a gpui interaction, then the dispatch hook.
/// A callback that stops propagation stops the gpui event too.
fn emit(
    callback: &EventCallback,
    kind: EventKind,
    after: Option<&DispatchListener>,
    window: &mut Window,
    cx: &mut App,
) {
    if fire(callback, kind).is_propagation_stopped() {
        cx.stop_propagation();
    }
    if let Some(after) = after {
        after(window, cx);
    }
}

#[derive(IntoElement)]
pub struct ItemElement {
    presentation: ItemPresentation,
    label: Option<SharedString>,
    debug: Option<SharedString>,
    icon_size: f32,
    on_click: EventCallback,
    on_mouse_over: EventCallback,
    on_mouse_out: EventCallback,
    on_duplicate: EventCallback,
    on_delete: EventCallback,
    on_press: Option<PressListener>,
    on_dispatched: Option<DispatchListener>,
    children: Vec<AnyElement>,
}

impl ItemElement {
    pub fn new(props: &DraggableItemProps, layout: &ItemLayout, presentation: ItemPresentation) -> Self {
        Self {
            presentation,
            label: props.visible_label().map(|l| SharedString::from(l.to_string())),
            debug: props.debug.clone().map(SharedString::from),
            icon_size: layout.icon_size,
            on_click: Rc::clone(&props.on_click),
            on_mouse_over: Rc::clone(&props.on_mouse_over),
            on_mouse_out: Rc::clone(&props.on_mouse_out),
            on_duplicate: Rc::clone(&props.on_duplicate),
            on_delete: Rc::clone(&props.on_delete),
            on_press: None,
            on_dispatched: None,
            children: Vec::new(),
        }
    }

    /// Left mouse down on the item body (not on its action buttons).
    pub fn on_press(
        mut self,
        listener: impl Fn(&MouseDownEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_press = Some(Rc::new(listener));
        self
    }

    /// Runs after any item callback fired, with window access. Callbacks
    /// themselves only see the interaction event.
    pub fn on_dispatched(mut self, listener: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_dispatched = Some(Rc::new(listener));
        self
    }
}

impl ParentElement for ItemElement {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

fn action_button(
    id: SharedString,
    icon: IconKind,
    icon_size: f32,
    hover_bg: Hsla,
    callback: EventCallback,
    after: Option<DispatchListener>,
) -> Stateful<Div> {
    div()
        .id(ElementId::Name(id))
        .p_1()
        .rounded(px(4.0))
        .cursor_pointer()
        .hover(move |s| s.bg(hover_bg))
        // Keep the press from starting a drag on the item underneath
        .on_mouse_down(MouseButton::Left, |_, _, cx| {
            cx.stop_propagation();
        })
        .on_click(move |_, window, cx| {
            cx.stop_propagation();
            let mut event = InteractionEvent::click();
            event.stop_propagation();
            callback(&mut event);
            if let Some(after) = &after {
                after(window, cx);
            }
        })
        .child(Icon::new(icon_name(icon)).size(px(icon_size)))
}

impl RenderOnce for ItemElement {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let state = self.presentation.visual_state;
        let primary = theme.primary;
        let primary_fg = theme.primary_foreground;
        let border = theme.border;
        let background = theme.background;
        let muted_fg = theme.muted_foreground;
        let foreground = theme.foreground;

        let outline = if state.is_selected {
            primary
        } else if state.is_highlighted() {
            primary.opacity(0.5)
        } else {
            border
        };
        let hover_outline = if state.is_selected {
            primary
        } else {
            primary.opacity(0.5)
        };
        let show_actions = state.is_selected || state.is_highlighted();

        let group: SharedString = format!("draggable-{}", self.presentation.identity.id).into();

        let actions = h_flex()
            .id(ElementId::Name(format!("{group}-actions").into()))
            .h(px(ACTIONS_ROW_HEIGHT))
            .px_1()
            .gap_1()
            .items_center()
            .rounded(px(ITEM_CORNER_RADIUS))
            .bg(primary)
            .text_color(primary_fg)
            .when(!show_actions, |row| row.invisible())
            .when_some(self.label, |row, label| {
                row.child(div().px_1().text_xs().child(label))
            })
            .child(action_button(
                format!("{group}-duplicate").into(),
                IconKind::Duplicate,
                self.icon_size,
                primary_fg.opacity(0.2),
                self.on_duplicate,
                self.on_dispatched.clone(),
            ))
            .child(action_button(
                format!("{group}-delete").into(),
                IconKind::Delete,
                self.icon_size,
                primary_fg.opacity(0.2),
                self.on_delete,
                self.on_dispatched.clone(),
            ));

        let overlay = div()
            .absolute()
            .top(px(-ACTIONS_ROW_HEIGHT))
            .right_0()
            .child(actions);

        let on_click = self.on_click;
        let on_mouse_over = self.on_mouse_over;
        let on_mouse_out = self.on_mouse_out;
        let click_after = self.on_dispatched.clone();
        let hover_after = self.on_dispatched;

        let body = div()
            .id(ElementId::Name(group))
            .relative()
            .w_full()
            .min_h(px(ACTIONS_ROW_HEIGHT))
            .rounded(px(ITEM_CORNER_RADIUS))
            .border_2()
            .border_color(outline)
            .hover(move |s| s.border_color(hover_outline))
            .bg(background)
            .cursor(cursor_style(self.presentation.cursor))
            .when(state.is_locked, |d| d.opacity(0.6))
            .when(state.is_dragging, |d| d.shadow_lg())
            .on_hover(move |hovered, window, cx| {
                let (callback, kind) = if *hovered {
                    (&on_mouse_over, EventKind::MouseOver)
                } else {
                    (&on_mouse_out, EventKind::MouseOut)
                };
                emit(callback, kind, hover_after.as_ref(), window, cx);
            })
            .on_click(move |_, window, cx| {
                emit(&on_click, EventKind::Click, click_after.as_ref(), window, cx);
            })
            .when_some(self.on_press, |d, press| {
                d.on_mouse_down(MouseButton::Left, move |event, window, cx| {
                    press(event, window, cx);
                })
            })
            .when_some(self.debug, |d, debug| {
                d.child(div().px_2().text_xs().text_color(muted_fg).child(debug))
            })
            .child(overlay)
            .child(div().p_2().text_color(foreground).children(self.children));

        match self.presentation.drag_transform.filter(|_| state.is_dragging) {
            Some(transform) => deferred(
                anchored()
                    .position(transform.position())
                    .child(div().w(transform.size.width).child(body)),
            )
            .with_priority(DRAG_OVERLAY_PRIORITY)
            .into_any_element(),
            None => body.into_any_element(),
        }
    }
}
