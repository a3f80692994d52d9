//! Element descriptions produced by a render pass.
//!
//! An [`ElementNode`] is a plain value: tag, class, style, attributes,
//! optional text, event handlers and children. Render passes build fresh
//! trees every time; the [`RenderTree`](crate::tree::RenderTree) mounts them.

use crate::events::{EventKind, InteractionEvent};
use crate::style::StyleMap;
use crate::tree::NodeId;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Interaction callback attached to a node.
pub type Handler = Rc<dyn Fn(&mut InteractionEvent)>;

/// Called with the mounted node on attach and `None` on detach.
pub type RefCallback = Rc<dyn Fn(Option<NodeId>)>;

/// Glyphs the item asks the icon renderer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Duplicate,
    Delete,
}

impl IconKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Duplicate => "copy",
            Self::Delete => "trash",
        }
    }
}

#[derive(Clone, Default)]
pub struct Handlers {
    pub on_click: Option<Handler>,
    pub on_mouse_over: Option<Handler>,
    pub on_mouse_out: Option<Handler>,
}

impl Handlers {
    pub fn get(&self, kind: EventKind) -> Option<&Handler> {
        match kind {
            EventKind::Click => self.on_click.as_ref(),
            EventKind::MouseOver => self.on_mouse_over.as_ref(),
            EventKind::MouseOut => self.on_mouse_out.as_ref(),
        }
    }

    pub fn set(&mut self, kind: EventKind, handler: Handler) {
        match kind {
            EventKind::Click => self.on_click = Some(handler),
            EventKind::MouseOver => self.on_mouse_over = Some(handler),
            EventKind::MouseOut => self.on_mouse_out = Some(handler),
        }
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("on_click", &self.on_click.is_some())
            .field("on_mouse_over", &self.on_mouse_over.is_some())
            .field("on_mouse_out", &self.on_mouse_out.is_some())
            .finish()
    }
}

#[derive(Clone)]
pub struct ElementNode {
    pub tag: &'static str,
    pub class: String,
    pub style: StyleMap,
    pub attributes: BTreeMap<String, String>,
    /// Set only on text nodes
    pub text: Option<String>,
    pub handlers: Handlers,
    pub node_ref: Option<RefCallback>,
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: String::new(),
            style: StyleMap::new(),
            attributes: BTreeMap::new(),
            text: None,
            handlers: Handlers::default(),
            node_ref: None,
            children: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn text(text: impl Into<String>) -> Self {
        let mut node = Self::new("#text");
        node.text = Some(text.into());
        node
    }

    /// Icon glyph placeholder sized in pixels.
    pub fn icon(kind: IconKind, size: f32) -> Self {
        Self::new("svg")
            .attr("data-icon", kind.name())
            .attr("width", size.to_string())
            .attr("height", size.to_string())
    }

    pub fn is_text(&self) -> bool {
        self.text.is_some()
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
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

    pub fn on(mut self, kind: EventKind, handler: Handler) -> Self {
        self.handlers.set(kind, handler);
        self
    }

    pub fn on_click(self, handler: impl Fn(&mut InteractionEvent) + 'static) -> Self {
        self.on(EventKind::Click, Rc::new(handler))
    }

    pub fn with_ref(mut self, node_ref: RefCallback) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// True when `token` is one of the space-separated class tokens.
    pub fn has_class(&self, token: &str) -> bool {
        self.class.split_whitespace().any(|t| t == token)
    }

    /// Depth-first search for the first node carrying class `token`.
    pub fn find_by_class(&self, token: &str) -> Option<&ElementNode> {
        if self.has_class(token) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(token))
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Indented structural outline: `tag.class.tokens` per element, quoted
    /// text for text nodes.
    pub fn outline(&self) -> String {
        let mut lines = Vec::new();
        self.outline_into(0, &mut lines);
        lines.join("\n")
    }

    fn outline_into(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match &self.text {
            Some(text) => lines.push(format!("{indent}{text:?}")),
            None => {
                let mut line = format!("{indent}{}", self.tag);
                for token in self.class.split_whitespace() {
                    line.push('.');
                    line.push_str(token);
                }
                if let Some(icon) = self.attributes.get("data-icon") {
                    line.push_str(&format!("[{icon}]"));
                }
                lines.push(line);
            }
        }
        for child in &self.children {
            child.outline_into(depth + 1, lines);
        }
    }
}

impl fmt::Debug for ElementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementNode")
            .field("tag", &self.tag)
            .field("class", &self.class)
            .field("style", &self.style)
            .field("attributes", &self.attributes)
            .field("text", &self.text)
            .field("handlers", &self.handlers)
            .field("children", &self.children)
            .finish()
    }
}
