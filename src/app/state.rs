//! Page canvas state.

use super::blocks::BlockList;
use crate::dnd::PointerDragEngine;
use crate::draggable::DraggableItem;
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;
use gpui::{Bounds, FocusHandle, Pixels};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Something an item callback asked the page to do. Callbacks only see the
/// interaction event, so they queue actions and the page drains them with
/// mutable access afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    Select(String),
    Hover(String),
    Unhover(String),
    Duplicate(String),
    Delete(String),
}

pub type ActionQueue = Rc<RefCell<Vec<ItemAction>>>;

pub struct PageCanvas {
    pub(crate) blocks: BlockList,
    pub(crate) selected: Option<String>,
    pub(crate) hovered: Option<String>,
    pub(crate) engine: PointerDragEngine,
    /// One component instance per block id, kept across renders
    pub(crate) instances: HashMap<String, DraggableItem>,
    pub(crate) actions: ActionQueue,
    /// Item bounds from the last prepaint, in render order
    pub(crate) item_bounds: Rc<RefCell<Vec<Bounds<Pixels>>>>,
    pub(crate) settings: Settings,
    pub(crate) settings_watcher: Option<SettingsWatcher>,
    pub(crate) focus_handle: FocusHandle,
}
