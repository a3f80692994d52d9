//! Page canvas lifecycle - initialization and settings reload.

use super::blocks::BlockList;
use super::state::PageCanvas;
use crate::dnd::PointerDragEngine;
use crate::modifier;
use crate::settings::{self, Settings};
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use gpui::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

impl PageCanvas {
    pub fn new(settings: Settings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        // Key-up events are lost while the window is inactive
        cx.observe_window_activation(window, |_this, window, cx| {
            if !window.is_window_active() {
                modifier::global().reset();
                cx.notify();
            }
        })
        .detach();

        Self {
            blocks: BlockList::sample(),
            selected: None,
            hovered: None,
            engine: PointerDragEngine::new().with_threshold(settings.drag_threshold),
            instances: HashMap::new(),
            actions: Rc::new(RefCell::new(Vec::new())),
            item_bounds: Rc::new(RefCell::new(Vec::new())),
            settings_watcher: crate::settings_watcher::default_settings_path()
                .and_then(|p| SettingsWatcher::new(p).ok()),
            settings,
            focus_handle,
        }
    }

    /// Poll the settings watcher and apply a changed file.
    pub fn check_settings_reload(&mut self, cx: &mut Context<Self>) {
        let Some(watcher) = self.settings_watcher.as_mut() else {
            return;
        };
        let Some(event) = watcher.poll() else {
            return;
        };
        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                tracing::info!("Settings file changed, reloading...");
                self.apply_settings(Settings::load());
                cx.notify();
            }
            SettingsEvent::Deleted => {
                tracing::warn!("Settings file deleted, using defaults");
                self.apply_settings(Settings::default());
                cx.notify();
            }
            SettingsEvent::Error(e) => {
                tracing::error!("Settings watch error: {}", e);
            }
        }
    }

    fn apply_settings(&mut self, settings: Settings) {
        let layout = settings.item_layout();
        for instance in self.instances.values_mut() {
            instance.set_layout(layout.clone());
        }
        // A running gesture keeps its engine until the next reload.
        if self.engine.phase().is_idle() {
            self.engine = PointerDragEngine::new().with_threshold(settings.drag_threshold);
        }
        settings::set_shared(settings.clone());
        self.settings = settings;
    }
}
