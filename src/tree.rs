//! Retained render tree.
//!
//! Holds mounted nodes in an arena with parent links. The tree owns two
//! fixed nodes created once in [`RenderTree::new`]: the body and the
//! overlay root appended to it. Items are mounted under a key with
//! [`RenderTree::commit`], which places a [`Portal`] either under the
//! item's logical parent or under the overlay root.
//!
//! ## Invariants
//!
//! 1. A key is mounted in exactly one place at a time. `commit` removes the
//!    previous placement and inserts the new one inside a single `&mut`
//!    call, so no observer sees the item in both places or in neither.
//! 2. The overlay root is never created or destroyed after construction.
//! 3. Events bubble along the logical chain: a node mounted under the
//!    overlay root continues to its logical parent, not to the overlay.

use crate::element::{ElementNode, Handlers, RefCallback};
use crate::error::{PageboardError, Result};
use crate::events::{EventKind, InteractionEvent};
use crate::portal::{Portal, RenderTarget};
use crate::profile_scope;
use crate::style::StyleMap;
use std::collections::{BTreeMap, HashMap};

/// Slot index plus the generation it was allocated in. A freed slot is
/// reused with a bumped generation, so stale ids stop resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// Handle to the single overlay attachment point of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayRoot(NodeId);

impl OverlayRoot {
    pub fn node(&self) -> NodeId {
        self.0
    }
}

struct Slot {
    tag: &'static str,
    class: String,
    style: StyleMap,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    handlers: Handlers,
    node_ref: Option<RefCallback>,
    parent: Option<NodeId>,
    /// Set on portal roots mounted away from their logical parent
    logical_parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Slot {
    fn container(tag: &'static str, class: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag,
            class: class.to_string(),
            style: StyleMap::new(),
            attributes: BTreeMap::new(),
            text: None,
            handlers: Handlers::default(),
            node_ref: None,
            parent,
            logical_parent: None,
            children: Vec::new(),
        }
    }
}

struct Entry {
    generation: u32,
    slot: Option<Slot>,
}

#[derive(Debug, Clone, Copy)]
struct Mount {
    root: NodeId,
    logical_parent: NodeId,
}

pub struct RenderTree {
    nodes: Vec<Entry>,
    free: Vec<usize>,
    body: NodeId,
    overlay: OverlayRoot,
    mounts: HashMap<String, Mount>,
}

impl Default for RenderTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTree {
    /// Create a tree with a body and the overlay root appended to it.
    pub fn new() -> Self {
        let body = NodeId {
            index: 0,
            generation: 0,
        };
        let overlay = NodeId {
            index: 1,
            generation: 0,
        };
        let mut body_slot = Slot::container("body", "", None);
        body_slot.children.push(overlay);
        let overlay_slot = Slot::container("div", "", Some(body));

        Self {
            nodes: vec![
                Entry {
                    generation: 0,
                    slot: Some(body_slot),
                },
                Entry {
                    generation: 0,
                    slot: Some(overlay_slot),
                },
            ],
            free: Vec::new(),
            body,
            overlay: OverlayRoot(overlay),
            mounts: HashMap::new(),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn overlay_root(&self) -> OverlayRoot {
        self.overlay
    }

    fn slot(&self, id: NodeId) -> Result<&Slot> {
        self.nodes
            .get(id.index)
            .filter(|e| e.generation == id.generation)
            .and_then(|e| e.slot.as_ref())
            .ok_or(PageboardError::UnknownNode(id))
    }

    fn slot_mut(&mut self, id: NodeId) -> Result<&mut Slot> {
        self.nodes
            .get_mut(id.index)
            .filter(|e| e.generation == id.generation)
            .and_then(|e| e.slot.as_mut())
            .ok_or(PageboardError::UnknownNode(id))
    }

    fn alloc(&mut self, slot: Slot) -> NodeId {
        if let Some(index) = self.free.pop() {
            let entry = &mut self.nodes[index];
            entry.slot = Some(slot);
            return NodeId {
                index,
                generation: entry.generation,
            };
        }
        let index = self.nodes.len();
        self.nodes.push(Entry {
            generation: 0,
            slot: Some(slot),
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    fn release(&mut self, id: NodeId) -> Option<Slot> {
        let entry = self
            .nodes
            .get_mut(id.index)
            .filter(|e| e.generation == id.generation)?;
        let slot = entry.slot.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(slot)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_ok()
    }

    /// Number of live nodes, including body and overlay root.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Allocated slots, live or free. Bounded by the peak node count.
    pub fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    /// Append a plain container, e.g. a scroll area items render into.
    pub fn create_container(&mut self, parent: NodeId, class: &str) -> Result<NodeId> {
        self.slot(parent)?;
        let id = self.alloc(Slot::container("div", class, Some(parent)));
        self.slot_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Mount `portal` for `key`, logically under `parent`.
    ///
    /// Replaces any previous placement of the same key. An item that stays
    /// in flow under the same parent keeps its sibling position.
    pub fn commit(&mut self, parent: NodeId, key: &str, portal: Portal) -> Result<NodeId> {
        profile_scope!("render_tree_commit");

        self.slot(parent)?;
        let physical = match portal.target {
            RenderTarget::InFlow => parent,
            RenderTarget::Overlay(root) => root.node(),
        };
        self.slot(physical)?;

        let mut position = None;
        if let Some(previous) = self.mounts.remove(key) {
            if self.slot(previous.root)?.parent == Some(physical) {
                position = self
                    .slot(physical)?
                    .children
                    .iter()
                    .position(|c| *c == previous.root);
            }
            self.remove_subtree(previous.root)?;
        }

        let root = self.insert_subtree(portal.node, physical)?;
        {
            let siblings = &mut self.slot_mut(physical)?.children;
            siblings.push(root);
            if let Some(position) = position {
                let last = siblings.len() - 1;
                siblings[position..=last].rotate_right(1);
            }
        }
        if physical != parent {
            self.slot_mut(root)?.logical_parent = Some(parent);
        }
        self.mounts.insert(
            key.to_string(),
            Mount {
                root,
                logical_parent: parent,
            },
        );
        self.attach_refs(root)?;

        tracing::trace!(key, ?root, overlay = physical != parent, "Committed item");
        Ok(root)
    }

    /// Remove the placement of `key`. Returns false if it was not mounted.
    pub fn unmount(&mut self, key: &str) -> Result<bool> {
        match self.mounts.remove(key) {
            Some(mount) => {
                self.remove_subtree(mount.root)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Root node currently mounted for `key`.
    pub fn mounted(&self, key: &str) -> Option<NodeId> {
        self.mounts.get(key).map(|m| m.root)
    }

    /// Logical parent `key` was committed under.
    pub fn logical_parent(&self, key: &str) -> Option<NodeId> {
        self.mounts.get(key).map(|m| m.logical_parent)
    }

    fn insert_subtree(&mut self, node: ElementNode, parent: NodeId) -> Result<NodeId> {
        let ElementNode {
            tag,
            class,
            style,
            attributes,
            text,
            handlers,
            node_ref,
            children,
        } = node;

        let id = self.alloc(Slot {
            tag,
            class,
            style,
            attributes,
            text,
            handlers,
            node_ref,
            parent: Some(parent),
            logical_parent: None,
            children: Vec::with_capacity(children.len()),
        });
        for child in children {
            let child_id = self.insert_subtree(child, id)?;
            self.slot_mut(id)?.children.push(child_id);
        }
        Ok(id)
    }

    fn attach_refs(&self, root: NodeId) -> Result<()> {
        let slot = self.slot(root)?;
        if let Some(node_ref) = &slot.node_ref {
            node_ref(Some(root));
        }
        for child in &slot.children {
            self.attach_refs(*child)?;
        }
        Ok(())
    }

    fn remove_subtree(&mut self, root: NodeId) -> Result<()> {
        if let Some(parent) = self.slot(root)?.parent {
            self.slot_mut(parent)?.children.retain(|c| *c != root);
        }

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(slot) = self.release(id) else {
                continue;
            };
            if let Some(node_ref) = &slot.node_ref {
                node_ref(None);
            }
            stack.extend(slot.children);
        }
        Ok(())
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.slot(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.slot(id)?.children)
    }

    /// Physical ancestors of `id`, nearest first, ending at the body.
    pub fn ancestors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let mut out = Vec::new();
        let mut current = self.slot(id)?.parent;
        while let Some(parent) = current {
            out.push(parent);
            current = self.slot(parent)?.parent;
        }
        Ok(out)
    }

    pub fn is_descendant_of(&self, id: NodeId, ancestor: NodeId) -> Result<bool> {
        Ok(self.ancestors(id)?.contains(&ancestor))
    }

    pub fn tag(&self, id: NodeId) -> Result<&'static str> {
        Ok(self.slot(id)?.tag)
    }

    pub fn class(&self, id: NodeId) -> Result<&str> {
        Ok(&self.slot(id)?.class)
    }

    pub fn style(&self, id: NodeId) -> Result<&StyleMap> {
        Ok(&self.slot(id)?.style)
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Result<Option<&str>> {
        Ok(self.slot(id)?.attributes.get(name).map(String::as_str))
    }

    pub fn text(&self, id: NodeId) -> Result<Option<&str>> {
        Ok(self.slot(id)?.text.as_deref())
    }

    /// First node at or below `root` whose class contains `token`.
    pub fn find_by_class(&self, root: NodeId, token: &str) -> Result<Option<NodeId>> {
        let slot = self.slot(root)?;
        if slot.class.split_whitespace().any(|t| t == token) {
            return Ok(Some(root));
        }
        for child in &slot.children {
            if let Some(found) = self.find_by_class(*child, token)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// Dispatch an event at `target` and bubble it along the logical chain.
    pub fn dispatch(&self, target: NodeId, kind: EventKind) -> Result<InteractionEvent> {
        let mut event = InteractionEvent::new(kind).at(target);
        let mut current = Some(target);

        while let Some(id) = current {
            let slot = self.slot(id)?;
            if let Some(handler) = slot.handlers.get(kind).cloned() {
                event.current_target = Some(id);
                handler(&mut event);
                if event.is_propagation_stopped() {
                    break;
                }
            }
            current = slot.logical_parent.or(slot.parent);
        }

        event.current_target = None;
        Ok(event)
    }
}
