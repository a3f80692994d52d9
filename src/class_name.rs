//! Class-name composition.
//!
//! A [`ClassNameFactory`] is bound to one root class and derives three kinds
//! of names from it:
//!
//! - the root itself: `DraggableComponent`
//! - descendants: `DraggableComponent-overlay`
//! - modifiers: `DraggableComponent--isSelected`
//!
//! When a CSS-module map is attached, every derived key is looked up in it
//! and keys missing from the map produce no token.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ClassNameFactory {
    root: String,
    styles: Option<HashMap<String, String>>,
    base_class: String,
}

impl ClassNameFactory {
    /// Factory emitting unmapped class names derived from `root`.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            styles: None,
            base_class: String::new(),
        }
    }

    /// Resolve every derived key through a CSS-module name map.
    pub fn with_styles(mut self, styles: HashMap<String, String>) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Prefix prepended verbatim to every non-empty result.
    pub fn with_base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = base_class.into();
        self
    }

    pub fn root_name(&self) -> &str {
        &self.root
    }

    fn lookup(&self, key: &str) -> Option<String> {
        match &self.styles {
            None => Some(key.to_string()),
            Some(map) => map.get(key).filter(|name| !name.is_empty()).cloned(),
        }
    }

    fn prefixed(&self, class: String) -> String {
        if class.is_empty() {
            class
        } else {
            format!("{}{}", self.base_class, class)
        }
    }

    /// The root class alone.
    pub fn root(&self) -> String {
        self.prefixed(self.lookup(&self.root).unwrap_or_default())
    }

    /// Class of a named descendant, empty when the map has no entry for it.
    pub fn descendant(&self, descendant: &str) -> String {
        let key = format!("{}-{}", self.root, descendant);
        self.prefixed(self.lookup(&key).unwrap_or_default())
    }

    /// Token for a single modifier, regardless of whether it is active.
    pub fn modifier_token(&self, modifier: &str) -> Option<String> {
        self.lookup(&format!("{}--{}", self.root, modifier))
    }

    /// Root class followed by the token of every active modifier.
    ///
    /// Tokens keep the order of `modifiers`, so the same input always
    /// produces the same string.
    pub fn modifiers(&self, modifiers: &[(&str, bool)]) -> String {
        let mut tokens: Vec<String> = Vec::with_capacity(modifiers.len() + 1);
        if let Some(root) = self.lookup(&self.root) {
            tokens.push(root);
        }
        tokens.extend(
            modifiers
                .iter()
                .filter(|(_, active)| *active)
                .filter_map(|(name, _)| self.modifier_token(name)),
        );
        self.prefixed(tokens.join(" "))
    }
}
