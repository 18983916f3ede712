use log::debug;

use super::ListStyle;
use super::serialize::{ListData, ListEntry};

/// A node of a pasted markup tree. The host hands the engine whatever its
/// paste pipeline produced; only the `li`, `ul` and `ol` tags carry meaning
/// here, everything else is foreign noise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkupNode {
    pub tag: String,
    pub content: String,
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn with_children(mut self, children: Vec<MarkupNode>) -> Self {
        self.children = children;
        self
    }

    pub fn item(content: &str) -> Self {
        Self::new("li").with_content(content)
    }

    fn kind(&self) -> Option<MarkupKind> {
        match self.tag.to_ascii_lowercase().as_str() {
            "li" => Some(MarkupKind::Item),
            "ol" => Some(MarkupKind::OrderedList),
            "ul" => Some(MarkupKind::UnorderedList),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum MarkupKind {
    Item,
    OrderedList,
    UnorderedList,
}

/// Converts a pasted markup tree into the persisted form, which then flows
/// through the ordinary load path. A bare item never infers "ordered"; an
/// unrecognized root yields an empty unordered outline, which the load path
/// seeds like any other empty data.
pub fn import_markup(node: &MarkupNode) -> ListData {
    let data = match node.kind() {
        Some(MarkupKind::Item) => ListData::new(
            ListStyle::Unordered,
            vec![ListEntry::text(&node.content)],
        ),
        Some(MarkupKind::OrderedList) => {
            ListData::new(ListStyle::Ordered, collect_entries(&node.children))
        }
        Some(MarkupKind::UnorderedList) => {
            ListData::new(ListStyle::Unordered, collect_entries(&node.children))
        }
        None => ListData::new(ListStyle::Unordered, Vec::new()),
    };
    debug!("imported {} pasted entries", data.items.len());
    data
}

/// Walks a container's children, keeping only item and container nodes.
/// Pasted content freely mixes items and nested containers in one child
/// list, so both are handled at every level.
fn collect_entries(children: &[MarkupNode]) -> Vec<ListEntry> {
    children
        .iter()
        .filter_map(|child| match child.kind()? {
            MarkupKind::Item => Some(ListEntry::text(&child.content)),
            MarkupKind::OrderedList | MarkupKind::UnorderedList => {
                Some(ListEntry::Nested(collect_entries(&child.children)))
            }
        })
        .collect()
}
