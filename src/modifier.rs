//! Modifier-key tracking.
//!
//! Keyboard modifier events arrive outside any item's control, so the held
//! state lives in a process-wide [`ModifierTracker`]. Items never see the
//! tracker directly: they read a [`ModifierSignal`], a read-only "is the key
//! held right now" query polled once per render.
//!
//! The tracker is only eventually consistent with the real key state. A
//! render may observe a value that is one event stale.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

static GLOBAL_TRACKER: Lazy<ModifierTracker> = Lazy::new(ModifierTracker::new);

/// The process-wide tracker fed by the window's modifier events.
pub fn global() -> &'static ModifierTracker {
    &GLOBAL_TRACKER
}

/// A modifier key an item can react to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    #[default]
    Alt,
    Shift,
    Control,
    /// Cmd on macOS, Super/Windows elsewhere
    Platform,
}

/// Snapshot of which modifiers are down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardModifiers {
    pub alt: bool,
    pub shift: bool,
    pub control: bool,
    pub platform: bool,
}

impl KeyboardModifiers {
    pub fn is_held(&self, key: ModifierKey) -> bool {
        match key {
            ModifierKey::Alt => self.alt,
            ModifierKey::Shift => self.shift,
            ModifierKey::Control => self.control,
            ModifierKey::Platform => self.platform,
        }
    }

    /// Only `key` held.
    pub fn only(key: ModifierKey) -> Self {
        let mut mods = Self::default();
        match key {
            ModifierKey::Alt => mods.alt = true,
            ModifierKey::Shift => mods.shift = true,
            ModifierKey::Control => mods.control = true,
            ModifierKey::Platform => mods.platform = true,
        }
        mods
    }
}

impl From<gpui::Modifiers> for KeyboardModifiers {
    fn from(m: gpui::Modifiers) -> Self {
        Self {
            alt: m.alt,
            shift: m.shift,
            control: m.control,
            platform: m.platform,
        }
    }
}

/// Read-only query: is the designated modifier held right now?
pub trait ModifierSignal {
    fn is_held(&self) -> bool;
}

/// A fixed answer, for callers that already resolved the key state.
impl ModifierSignal for bool {
    fn is_held(&self) -> bool {
        *self
    }
}

/// Shared modifier state updated by keyboard events.
#[derive(Debug, Default)]
pub struct ModifierTracker {
    state: RwLock<KeyboardModifiers>,
}

impl ModifierTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the modifiers reported by the latest keyboard event.
    pub fn update(&self, modifiers: KeyboardModifiers) {
        let mut state = self.state.write();
        if *state != modifiers {
            tracing::trace!(?modifiers, "Modifier state changed");
            *state = modifiers;
        }
    }

    /// Forget all held keys (window lost focus).
    pub fn reset(&self) {
        self.update(KeyboardModifiers::default());
    }

    pub fn snapshot(&self) -> KeyboardModifiers {
        *self.state.read()
    }

    pub fn is_held(&self, key: ModifierKey) -> bool {
        self.state.read().is_held(key)
    }

    /// A signal bound to one key of this tracker.
    pub fn signal(&self, key: ModifierKey) -> HeldKey<'_> {
        HeldKey { tracker: self, key }
    }
}

/// [`ModifierSignal`] reading one key from a [`ModifierTracker`].
#[derive(Debug, Clone, Copy)]
pub struct HeldKey<'a> {
    tracker: &'a ModifierTracker,
    key: ModifierKey,
}

impl ModifierSignal for HeldKey<'_> {
    fn is_held(&self) -> bool {
        self.tracker.is_held(self.key)
    }
}
