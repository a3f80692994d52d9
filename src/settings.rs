//! User settings persisted as JSON in the platform config directory.
//!
//! Missing files and missing fields fall back to defaults, so a partial
//! file like `{"modifier_key": "shift"}` is valid.

use crate::class_name::ClassNameFactory;
use crate::constants::{
    ACTION_ICON_SIZE, DEFAULT_DRAG_THRESHOLD, ITEM_CLASS_ROOT, SETTINGS_DIR_NAME,
    SETTINGS_FILE_NAME,
};
use crate::draggable::ItemLayout;
use crate::error::{PageboardError, Result};
use crate::modifier::ModifierKey;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static SHARED: Lazy<RwLock<Settings>> = Lazy::new(|| RwLock::new(Settings::load()));

/// Settings shared by every view, loaded on first access.
pub fn shared() -> Settings {
    SHARED.read().clone()
}

/// Replace the shared settings, e.g. after a hot reload.
pub fn set_shared(settings: Settings) {
    *SHARED.write() = settings;
}

/// Path of the settings file, if the platform has a config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key that switches items to plain-content cursor while held
    pub modifier_key: ModifierKey,
    /// Size of the duplicate/delete glyphs in pixels
    pub icon_size: f32,
    /// Root class items derive their class names from
    pub class_root: String,
    /// Pointer travel before a press becomes a drag
    pub drag_threshold: f32,
    /// Show each item's debug string above its contents
    pub show_debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            modifier_key: ModifierKey::Alt,
            icon_size: ACTION_ICON_SIZE,
            class_root: ITEM_CLASS_ROOT.to_string(),
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            show_debug: false,
        }
    }
}

impl Settings {
    /// Load from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings.sanitized())
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<()> {
        let path = default_settings_path().ok_or(PageboardError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Clamp out-of-range values instead of rejecting the whole file.
    fn sanitized(mut self) -> Self {
        if !self.icon_size.is_finite() || self.icon_size <= 0.0 {
            self.icon_size = ACTION_ICON_SIZE;
        }
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0.0 {
            self.drag_threshold = DEFAULT_DRAG_THRESHOLD;
        }
        if self.class_root.trim().is_empty() {
            self.class_root = ITEM_CLASS_ROOT.to_string();
        }
        self
    }

    /// Item layout described by these settings.
    pub fn item_layout(&self) -> ItemLayout {
        ItemLayout {
            class_names: ClassNameFactory::new(self.class_root.clone()),
            icon_size: self.icon_size,
        }
    }
}
