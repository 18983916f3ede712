use indextree::{Arena, NodeId};
use log::debug;
use serde::{Deserialize, Serialize};

pub mod import;
pub mod serialize;
mod structure;

use serialize::{ListData, item_is_blank};
use structure::{indent_item, outdent_item, propagate_style};

/// Tune names the host's settings menu offers for this block. The first two
/// switch the list style, the last two reroute to the indent/outdent engine
/// (see [`Outline::toggle`]).
pub const TUNES: [&str; 4] = ["unordered", "ordered", "outdent", "indent"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    Unordered,
}

impl ListStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            ListStyle::Ordered => "ordered",
            ListStyle::Unordered => "unordered",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ordered" => Some(ListStyle::Ordered),
            "unordered" => Some(ListStyle::Unordered),
            _ => None,
        }
    }
}

/// A node of the live outline tree: either a leaf item carrying the host
/// surface's markup content, or a sublist holding further nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListNode {
    Item { content: String },
    Sublist { style: ListStyle },
}

/// What the host surface should do after a command, beyond re-rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostRequest {
    /// Place the caret at the end of this node's content.
    PlaceCaret(NodeId),
    /// Remove focus from this block and insert a fresh block after it.
    InsertBlockAfter,
    /// Run the host's default backspace handling for this block.
    DefaultDeletion,
}

/// The live outline owned by one mounted widget instance.
///
/// Nodes live in an arena and are addressed by stable [`NodeId`] handles;
/// the root is always a sublist. Commands never resolve the current item
/// themselves: the host maps its cursor state to a handle and passes it in.
pub struct Outline {
    arena: Arena<ListNode>,
    root: NodeId,
    default_style: ListStyle,
}

impl Outline {
    /// An outline seeded with a single empty item, the default state of a
    /// freshly inserted block.
    pub fn new(default_style: ListStyle) -> Self {
        Self::from_data(None, default_style)
    }

    /// Materializes persisted data into a live tree. Missing data, an
    /// unknown style or an empty item list all degrade to the seeded
    /// default rather than failing.
    pub fn from_data(data: Option<ListData>, default_style: ListStyle) -> Self {
        let data = data.unwrap_or_default();
        let style = data.style.unwrap_or(default_style);

        let mut arena = Arena::new();
        let root = serialize::build_sublist(&mut arena, &data.items, style);
        let mut outline = Self {
            arena,
            root,
            default_style,
        };
        outline.ensure_seeded();
        outline
    }

    /// Flattens the live tree into the persisted form.
    pub fn save(&self) -> ListData {
        serialize::flatten(self)
    }

    pub fn from_json(json: &str, default_style: ListStyle) -> Result<Self, serde_json::Error> {
        let data: ListData = serde_json::from_str(json)?;
        Ok(Self::from_data(Some(data), default_style))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.save())
    }

    // ========================================================================
    // Tree model
    // ========================================================================

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn default_style(&self) -> ListStyle {
        self.default_style
    }

    /// The style tag of the root sublist, which every nested sublist shares
    /// after any toggle.
    pub fn style(&self) -> ListStyle {
        match self.arena[self.root].get() {
            ListNode::Sublist { style } => *style,
            ListNode::Item { .. } => self.default_style,
        }
    }

    pub fn is_item(&self, id: NodeId) -> bool {
        matches!(self.node(id), Some(ListNode::Item { .. }))
    }

    pub fn is_sublist(&self, id: NodeId) -> bool {
        matches!(self.node(id), Some(ListNode::Sublist { .. }))
    }

    pub fn node(&self, id: NodeId) -> Option<&ListNode> {
        self.arena
            .get(id)
            .filter(|node| !node.is_removed())
            .map(|node| node.get())
    }

    /// The style tag of one sublist node, `None` for items. Branches may
    /// diverge in the live tree, but every toggle drives them uniform again.
    pub fn sublist_style(&self, id: NodeId) -> Option<ListStyle> {
        match self.node(id)? {
            ListNode::Sublist { style } => Some(*style),
            ListNode::Item { .. } => None,
        }
    }

    pub fn content(&self, id: NodeId) -> Option<&str> {
        match self.node(id)? {
            ListNode::Item { content } => Some(content.as_str()),
            ListNode::Sublist { .. } => None,
        }
    }

    pub fn set_content(&mut self, id: NodeId, text: &str) -> bool {
        let Some(node) = self.arena.get_mut(id) else {
            return false;
        };
        match node.get_mut() {
            ListNode::Item { content } => {
                *content = text.to_string();
                true
            }
            ListNode::Sublist { .. } => false,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.parent()
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.previous_sibling()
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.next_sibling()
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        id.children(&self.arena).collect()
    }

    /// Creates a node and appends it as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, node: ListNode) -> Option<NodeId> {
        if !self.is_sublist(parent) {
            return None;
        }
        let id = self.arena.new_node(node);
        parent.append(id, &mut self.arena);
        Some(id)
    }

    /// Creates a node and inserts it before `reference` under `parent`;
    /// with no reference the node is appended, mirroring the usual
    /// insert-before contract of editing surfaces.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        node: ListNode,
        reference: Option<NodeId>,
    ) -> Option<NodeId> {
        let Some(reference) = reference else {
            return self.append_child(parent, node);
        };
        if self.parent(reference) != Some(parent) {
            return None;
        }
        let id = self.arena.new_node(node);
        reference.insert_before(id, &mut self.arena);
        Some(id)
    }

    /// Removes a node and its whole subtree. The root cannot be removed.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.root || self.node(id).is_none() {
            return false;
        }
        id.remove_subtree(&mut self.arena);
        true
    }

    /// All items of the outline in visible (pre-order) order.
    pub fn items(&self) -> Vec<NodeId> {
        self.root
            .descendants(&self.arena)
            .filter(|id| self.is_item(*id))
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.items().len()
    }

    /// Pre-order traversal of leaf contents; indent and outdent must never
    /// change this sequence.
    pub fn leaf_contents(&self) -> Vec<String> {
        self.items()
            .iter()
            .filter_map(|id| self.content(*id))
            .map(str::to_string)
            .collect()
    }

    // ========================================================================
    // Command dispatch
    // ========================================================================

    /// End-of-item signal. On the empty last item of a multi-item outline
    /// the item is dropped and the host is asked to insert a new block;
    /// everywhere else the host's default behaviour (a new item) applies.
    pub fn submit(&mut self, current: Option<NodeId>) -> Option<HostRequest> {
        let current = current?;
        let items = self.items();
        // Keep the very last item alive.
        if items.len() < 2 {
            return None;
        }
        let last = *items.last()?;
        if current != last || !self.item_blank(last) {
            return None;
        }
        debug!("submit on empty trailing item, leaving the block");
        self.remove(last);
        Some(HostRequest::InsertBlockAfter)
    }

    /// Backspace signal. Only the first-and-only empty item defers to the
    /// host's default deletion; everything else is ordinary text editing.
    pub fn delete_backward(&mut self, current: Option<NodeId>) -> Option<HostRequest> {
        let current = current?;
        let items = self.items();
        if items.len() != 1 || items[0] != current {
            return None;
        }
        if !self.item_blank(current) {
            return None;
        }
        Some(HostRequest::DefaultDeletion)
    }

    /// Moves the current item one nesting level deeper, then asks the host
    /// to restore the caret there.
    pub fn indent(&mut self, current: Option<NodeId>) -> Option<HostRequest> {
        let moved = indent_item(self, current?)?;
        debug!("indented item {moved:?}");
        Some(HostRequest::PlaceCaret(moved))
    }

    /// Moves the current item one nesting level up. Outdenting out of the
    /// root sublist is disallowed, so top-level items no-op here.
    pub fn outdent(&mut self, current: Option<NodeId>) -> Option<HostRequest> {
        let current = current?;
        if self.parent(current) == Some(self.root) {
            return None;
        }
        let moved = outdent_item(self, current)?;
        debug!("outdented item {moved:?}");
        Some(HostRequest::PlaceCaret(moved))
    }

    /// Retags the root and every nested sublist; the persisted form cannot
    /// carry per-branch styles, so the live tree is always driven back to
    /// uniform.
    pub fn set_style(&mut self, style: ListStyle) {
        propagate_style(self, style);
    }

    /// Settings-menu entry point: style names toggle the list style, the
    /// remaining tunes reroute to the indent/outdent engine.
    pub fn toggle(&mut self, name: &str, current: Option<NodeId>) -> Option<HostRequest> {
        if let Some(style) = ListStyle::parse(name) {
            debug!("toggling list style to {name}");
            self.set_style(style);
            return current.map(HostRequest::PlaceCaret);
        }
        match name {
            "indent" => self.indent(current),
            "outdent" => self.outdent(current),
            _ => None,
        }
    }

    fn item_blank(&self, id: NodeId) -> bool {
        self.content(id).map(item_is_blank).unwrap_or(false)
    }

    fn ensure_seeded(&mut self) {
        if self.arena[self.root].first_child().is_none() {
            let item = self.arena.new_node(ListNode::Item {
                content: String::new(),
            });
            self.root.append(item, &mut self.arena);
        }
    }
}

#[cfg(test)]
#[path = "outline_tests.rs"]
mod outline_tests;


#[cfg(test)]
#[path = "outline/serialize_tests.rs"]
mod serialize_tests;
