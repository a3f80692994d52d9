//! Style layers and their merge precedence.
//!
//! An item's final style is built from three layers, lowest first:
//!
//! 1. the caller's base style
//! 2. the drag engine's style (transform, position, transition, ...)
//! 3. the cursor override
//!
//! Each layer replaces keys of the layers beneath it, so the engine's drag
//! transform always survives whatever the caller passed in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Properties the drag engine positions the item with. Whenever the engine
/// sets one of these, its value is final.
pub const ENGINE_OWNED_PROPERTIES: &[&str] = &[
    "position",
    "top",
    "left",
    "width",
    "height",
    "box-sizing",
    "transform",
    "transition",
    "z-index",
    "pointer-events",
];

/// Flat style declarations, keyed by property name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.0.remove(property)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Shallow merge: every key of `layer` replaces the key here.
    pub fn layer(&mut self, layer: &StyleMap) {
        for (property, value) in &layer.0 {
            self.0.insert(property.clone(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Pointer cursor shown over an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    /// Item can be picked up
    Grab,
    /// Modifier held: pointer behaves as plain content
    Initial,
}

impl Cursor {
    /// Cursor for an item given the modifier signal.
    ///
    /// Only the modifier changes the cursor; a disabled item keeps `grab`.
    pub fn for_item(is_modifier_held: bool) -> Self {
        if is_modifier_held {
            Self::Initial
        } else {
            Self::Grab
        }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Initial => "initial",
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Merge the three style layers of an item.
pub fn merge_item_style(base: Option<&StyleMap>, engine: &StyleMap, cursor: Cursor) -> StyleMap {
    let mut merged = base.cloned().unwrap_or_default();
    merged.layer(engine);
    merged.set("cursor", cursor.as_css());
    merged
}
