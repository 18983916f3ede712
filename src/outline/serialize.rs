use indextree::{Arena, NodeId};
use serde::{Deserialize, Deserializer, Serialize};

use super::{ListNode, ListStyle, Outline};

/// The break tag the host surface embeds in item content. Inline markup is
/// passed through untouched, but a single trailing break is noise from the
/// editing surface and is stripped on save.
pub const LINE_BREAK_TAG: &str = "<br>";

/// One entry of the persisted `items` array: a leaf item's content, or a
/// nested sub-outline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListEntry {
    Text(String),
    Nested(Vec<ListEntry>),
}

impl ListEntry {
    pub fn text(content: &str) -> Self {
        ListEntry::Text(content.to_string())
    }
}

/// The persisted form of an outline, the only shape that crosses the
/// save/load boundary. Absent keys and unknown style names deserialize to
/// defaults instead of failing; the configured default style fills the gap
/// at materialize time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListData {
    #[serde(default, deserialize_with = "lenient_style")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ListStyle>,
    #[serde(default)]
    pub items: Vec<ListEntry>,
}

impl ListData {
    pub fn new(style: ListStyle, items: Vec<ListEntry>) -> Self {
        Self {
            style: Some(style),
            items,
        }
    }

    /// Conversion export to a plain-text sibling block: top-level leaf
    /// contents joined by a fixed separator.
    pub fn to_plain_text(&self) -> String {
        self.items
            .iter()
            .filter_map(|entry| match entry {
                ListEntry::Text(content) => Some(content.as_str()),
                ListEntry::Nested(_) => None,
            })
            .collect::<Vec<_>>()
            .join(". ")
    }

    /// Conversion import from a plain-text sibling block: the whole string
    /// becomes the single item of an unordered outline.
    pub fn from_plain_text(text: &str) -> Self {
        Self::new(ListStyle::Unordered, vec![ListEntry::text(text)])
    }
}

fn lenient_style<'de, D>(deserializer: D) -> Result<Option<ListStyle>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ListStyle::parse))
}

/// An item whose content is only break tags and whitespace is placeholder
/// state, not data.
pub(crate) fn item_is_blank(content: &str) -> bool {
    content.replace(LINE_BREAK_TAG, " ").trim().is_empty()
}

// ============================================================================
// Flatten (tree -> persisted)
// ============================================================================

pub(crate) fn flatten(outline: &Outline) -> ListData {
    ListData::new(outline.style(), flatten_children(outline, outline.root))
}

fn flatten_children(outline: &Outline, sublist: NodeId) -> Vec<ListEntry> {
    let mut entries = Vec::new();
    for child in sublist.children(&outline.arena) {
        match outline.arena[child].get() {
            ListNode::Sublist { .. } => {
                entries.push(ListEntry::Nested(flatten_children(outline, child)));
            }
            ListNode::Item { content } => {
                let content = content.strip_suffix(LINE_BREAK_TAG).unwrap_or(content);
                if !item_is_blank(content) {
                    entries.push(ListEntry::text(content));
                }
            }
        }
    }
    entries
}

// ============================================================================
// Materialize (persisted -> tree)
// ============================================================================

/// Builds a sublist node from persisted entries. Nested arrays become nested
/// sublists carrying the same style tag; the persisted form has no way to
/// express per-branch styles.
pub(crate) fn build_sublist(
    arena: &mut Arena<ListNode>,
    entries: &[ListEntry],
    style: ListStyle,
) -> NodeId {
    let sublist = arena.new_node(ListNode::Sublist { style });
    for entry in entries {
        match entry {
            ListEntry::Text(content) => {
                let item = arena.new_node(ListNode::Item {
                    content: content.clone(),
                });
                sublist.append(item, arena);
            }
            ListEntry::Nested(nested) => {
                let child = build_sublist(arena, nested, style);
                sublist.append(child, arena);
            }
        }
    }
    sublist
}
