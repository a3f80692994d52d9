//! Draggable item - the public canvas item component.
//!
//! A [`DraggableItem`] is one component instance. Each render it:
//!
//! 1. reads the modifier signal
//! 2. registers with the drag engine under its id and index
//! 3. turns the engine's binding and snapshot into an [`ItemPresentation`]
//!    (class, merged style, cursor) with no side effects
//! 4. builds the item node through [`PortalItem`]
//! 5. fires `on_mount` if this is the instance's first render
//!
//! The engine may run step 3 once per pointer-move frame. Nothing computed
//! there is retained between renders; the only state the instance keeps is
//! whether `on_mount` already fired.

use crate::class_name::ClassNameFactory;
use crate::constants::{
    ACTION_DESCENDANT, ACTION_ICON_SIZE, ACTIONS_DESCENDANT, ACTIONS_LABEL_DESCENDANT,
    CONTENTS_DESCENDANT, ITEM_CLASS_ROOT, OVERLAY_DESCENDANT,
};
use crate::dnd::{DragBinding, DragEngine, DragSnapshot, DragTransform, DraggableRegistration};
use crate::element::{ElementNode, Handler, IconKind};
use crate::events::InteractionEvent;
use crate::modifier::ModifierSignal;
use crate::portal::{Portal, PortalItem};
use crate::profile_scope;
use crate::style::{Cursor, StyleMap, merge_item_style};
use crate::tree::OverlayRoot;
use crate::visual_state::VisualState;
use std::fmt;
use std::rc::Rc;

/// Callback receiving the interaction that triggered it.
pub type EventCallback = Rc<dyn Fn(&mut InteractionEvent)>;

/// Callback fired once when an item instance first renders.
pub type MountCallback = Rc<dyn Fn()>;

fn noop_event() -> EventCallback {
    Rc::new(|_| {})
}

/// Identity of an item among its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemIdentity {
    /// Unique among siblings, never changes for one logical item
    pub id: String,
    /// Current position; may change every render
    pub index: usize,
}

/// Inputs of one render of a draggable item.
#[derive(Clone)]
pub struct DraggableItemProps {
    pub id: String,
    pub index: usize,
    pub children: Vec<ElementNode>,
    pub is_selected: bool,
    pub is_locked: bool,
    pub is_drag_disabled: Option<bool>,
    pub force_hover: bool,
    pub indicative_hover: bool,
    pub debug: Option<String>,
    pub label: Option<String>,
    pub style: Option<StyleMap>,
    pub on_click: EventCallback,
    pub on_mouse_over: EventCallback,
    pub on_mouse_out: EventCallback,
    pub on_delete: EventCallback,
    pub on_duplicate: EventCallback,
    pub on_mount: MountCallback,
}

impl DraggableItemProps {
    /// Props with every flag off and every callback a no-op.
    pub fn new(id: impl Into<String>, index: usize) -> Self {
        Self {
            id: id.into(),
            index,
            children: Vec::new(),
            is_selected: false,
            is_locked: false,
            is_drag_disabled: None,
            force_hover: false,
            indicative_hover: false,
            debug: None,
            label: None,
            style: None,
            on_click: noop_event(),
            on_mouse_over: noop_event(),
            on_mouse_out: noop_event(),
            on_delete: noop_event(),
            on_duplicate: noop_event(),
            on_mount: Rc::new(|| {}),
        }
    }

    pub fn identity(&self) -> ItemIdentity {
        ItemIdentity {
            id: self.id.clone(),
            index: self.index,
        }
    }

    /// What the item registers with the drag engine.
    pub fn registration(&self) -> DraggableRegistration {
        DraggableRegistration {
            draggable_id: self.id.clone(),
            index: self.index,
            is_drag_disabled: self.is_drag_disabled.unwrap_or(false),
        }
    }

    /// Flags owned by the props; the modifier and drag flags come from
    /// outside.
    pub fn visual_state(&self, is_modifier_held: bool, is_dragging: bool) -> VisualState {
        VisualState {
            is_selected: self.is_selected,
            is_modifier_held,
            is_dragging,
            is_locked: self.is_locked,
            force_hover: self.force_hover,
            indicative_hover: self.indicative_hover,
        }
    }

    /// Label text, when present and non-empty.
    pub fn visible_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.is_empty())
    }

    pub fn index(mut self, index: usize) -> Self {
        self.index = index;
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

    pub fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    pub fn locked(mut self, is_locked: bool) -> Self {
        self.is_locked = is_locked;
        self
    }

    pub fn drag_disabled(mut self, is_drag_disabled: bool) -> Self {
        self.is_drag_disabled = Some(is_drag_disabled);
        self
    }

    pub fn force_hover(mut self, force_hover: bool) -> Self {
        self.force_hover = force_hover;
        self
    }

    pub fn indicative_hover(mut self, indicative_hover: bool) -> Self {
        self.indicative_hover = indicative_hover;
        self
    }

    pub fn debug(mut self, debug: impl Into<String>) -> Self {
        self.debug = Some(debug.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    pub fn on_click(mut self, f: impl Fn(&mut InteractionEvent) + 'static) -> Self {
        self.on_click = Rc::new(f);
        self
    }

    pub fn on_mouse_over(mut self, f: impl Fn(&mut InteractionEvent) + 'static) -> Self {
        self.on_mouse_over = Rc::new(f);
        self
    }

    pub fn on_mouse_out(mut self, f: impl Fn(&mut InteractionEvent) + 'static) -> Self {
        self.on_mouse_out = Rc::new(f);
        self
    }

    pub fn on_delete(mut self, f: impl Fn(&mut InteractionEvent) + 'static) -> Self {
        self.on_delete = Rc::new(f);
        self
    }

    pub fn on_duplicate(mut self, f: impl Fn(&mut InteractionEvent) + 'static) -> Self {
        self.on_duplicate = Rc::new(f);
        self
    }

    pub fn on_mount(mut self, f: impl Fn() + 'static) -> Self {
        self.on_mount = Rc::new(f);
        self
    }
}

impl fmt::Debug for DraggableItemProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraggableItemProps")
            .field("id", &self.id)
            .field("index", &self.index)
            .field("children", &self.children.len())
            .field("is_selected", &self.is_selected)
            .field("is_locked", &self.is_locked)
            .field("is_drag_disabled", &self.is_drag_disabled)
            .field("force_hover", &self.force_hover)
            .field("indicative_hover", &self.indicative_hover)
            .field("debug", &self.debug)
            .field("label", &self.label)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Guard that lets a callback run once per owner.
#[derive(Debug, Default)]
pub struct MountOnce {
    fired: bool,
}

impl MountOnce {
    /// Run `f` unless it already ran. Returns true if it ran now.
    pub fn fire(&mut self, f: impl FnOnce()) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        f();
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Everything visual about one render of an item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPresentation {
    pub identity: ItemIdentity,
    pub visual_state: VisualState,
    pub class: String,
    pub style: StyleMap,
    pub cursor: Cursor,
    /// Where to draw the item while it is dragging
    pub drag_transform: Option<DragTransform>,
}

impl ItemPresentation {
    pub fn is_dragging(&self) -> bool {
        self.visual_state.is_dragging
    }
}

/// Class names and icon size shared by every render of an item.
#[derive(Debug, Clone)]
pub struct ItemLayout {
    pub class_names: ClassNameFactory,
    pub icon_size: f32,
}

impl Default for ItemLayout {
    fn default() -> Self {
        Self {
            class_names: ClassNameFactory::new(ITEM_CLASS_ROOT),
            icon_size: ACTION_ICON_SIZE,
        }
    }
}

impl ItemLayout {
    /// Pure mapping from props, engine output and modifier state to the
    /// item's visuals.
    pub fn present(
        &self,
        props: &DraggableItemProps,
        binding: &DragBinding,
        snapshot: DragSnapshot,
        is_modifier_held: bool,
    ) -> ItemPresentation {
        profile_scope!("present_item");

        let visual_state = props.visual_state(is_modifier_held, snapshot.is_dragging);
        let cursor = Cursor::for_item(is_modifier_held);
        let style = merge_item_style(
            props.style.as_ref(),
            &binding.draggable_props.style,
            cursor,
        );

        ItemPresentation {
            identity: props.identity(),
            class: visual_state.class_name(&self.class_names),
            visual_state,
            style,
            cursor,
            drag_transform: binding.transform.filter(|_| snapshot.is_dragging),
        }
    }

    /// Build the item node: optional debug text, the overlay with its
    /// actions row, then the contents wrapping the children.
    pub fn portal(
        &self,
        props: &DraggableItemProps,
        presentation: ItemPresentation,
        binding: DragBinding,
        overlay: &OverlayRoot,
    ) -> Portal {
        let names = &self.class_names;

        let mut actions = ElementNode::div().class(names.descendant(ACTIONS_DESCENDANT));
        if let Some(label) = props.visible_label() {
            actions = actions.child(
                ElementNode::div()
                    .class(names.descendant(ACTIONS_LABEL_DESCENDANT))
                    .child(ElementNode::text(label)),
            );
        }
        actions = actions
            .child(self.action_button(IconKind::Duplicate, "Duplicate", &props.on_duplicate))
            .child(self.action_button(IconKind::Delete, "Delete", &props.on_delete));

        let overlay_layer = ElementNode::div()
            .class(names.descendant(OVERLAY_DESCENDANT))
            .child(actions);
        let contents = ElementNode::div()
            .class(names.descendant(CONTENTS_DESCENDANT))
            .children(props.children.iter().cloned());

        let mut item = PortalItem::new(binding, presentation.is_dragging())
            .class(presentation.class)
            .style(presentation.style)
            .on_mouse_over(as_handler(&props.on_mouse_over))
            .on_mouse_out(as_handler(&props.on_mouse_out))
            .on_click(as_handler(&props.on_click));
        if let Some(debug) = &props.debug {
            item = item.child(ElementNode::text(debug.clone()));
        }
        item.child(overlay_layer).child(contents).render(overlay)
    }

    /// An action button. It stops propagation before running `callback`,
    /// so the item's own click handler never sees the click.
    fn action_button(&self, icon: IconKind, title: &str, callback: &EventCallback) -> ElementNode {
        let callback = Rc::clone(callback);
        ElementNode::button()
            .class(self.class_names.descendant(ACTION_DESCENDANT))
            .attr("type", "button")
            .attr("aria-label", title)
            .on_click(move |event| {
                event.stop_propagation();
                callback(event);
            })
            .child(ElementNode::icon(icon, self.icon_size))
    }
}

fn as_handler(callback: &EventCallback) -> Handler {
    Rc::clone(callback)
}

/// One mounted draggable item.
#[derive(Debug, Default)]
pub struct DraggableItem {
    layout: ItemLayout,
    mount: MountOnce,
}

impl DraggableItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: ItemLayout) -> Self {
        Self {
            layout,
            mount: MountOnce::default(),
        }
    }

    pub fn layout(&self) -> &ItemLayout {
        &self.layout
    }

    /// Swap the layout without re-firing `on_mount`.
    pub fn set_layout(&mut self, layout: ItemLayout) {
        self.layout = layout;
    }

    pub fn has_mounted(&self) -> bool {
        self.mount.has_fired()
    }

    /// Render through `engine` and hand the presentation and binding to
    /// `view`, which builds the output for whatever target is rendering.
    pub fn render_with<E, S, R>(
        &mut self,
        props: &DraggableItemProps,
        engine: &mut E,
        signal: &S,
        view: impl FnOnce(&ItemLayout, ItemPresentation, DragBinding) -> R,
    ) -> R
    where
        E: DragEngine,
        S: ModifierSignal + ?Sized,
    {
        let is_modifier_held = signal.is_held();
        let registration = props.registration();
        let layout = &self.layout;

        let output = engine.draggable(&registration, |binding, snapshot| {
            let presentation = layout.present(props, &binding, snapshot, is_modifier_held);
            view(layout, presentation, binding)
        });

        if self.mount.fire(|| (props.on_mount)()) {
            tracing::debug!(id = %props.id, index = props.index, "Item mounted");
        }
        output
    }

    /// Render into a portal for a [`RenderTree`](crate::tree::RenderTree).
    pub fn render<E, S>(
        &mut self,
        props: &DraggableItemProps,
        engine: &mut E,
        signal: &S,
        overlay: &OverlayRoot,
    ) -> Portal
    where
        E: DragEngine,
        S: ModifierSignal + ?Sized,
    {
        self.render_with(props, engine, signal, |layout, presentation, binding| {
            layout.portal(props, presentation, binding, overlay)
        })
    }
}
