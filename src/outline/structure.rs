use indextree::NodeId;

use super::{ListNode, ListStyle, Outline};

// ============================================================================
// Indent
// ============================================================================

/// Moves `current` one nesting level deeper, restructuring its immediate
/// neighborhood. Returns the moved item so the caller can restore the caret.
///
/// The operation only ever touches local structure: the parent sublist, the
/// two adjacent siblings and, in the merge case, the next sibling's children.
pub(crate) fn indent_item(outline: &mut Outline, current: NodeId) -> Option<NodeId> {
    if !outline.is_item(current) {
        return None;
    }
    let parent = outline.parent(current)?;

    // An item with nothing before it anchors its sublist and cannot be
    // indented; this also covers the first item of the whole outline.
    let prev = outline.previous_sibling(current)?;
    let next = outline.next_sibling(current);
    let prev_is_sublist = outline.is_sublist(prev);
    let style = outline.style();

    match next {
        None if !prev_is_sublist => {
            // Last child with no sublist to join: open a fresh level.
            let sublist = new_sublist(outline, style);
            parent.append(sublist, &mut outline.arena);
            sublist.append(current, &mut outline.arena);
        }
        None => {
            // Merge into the existing deeper level just above.
            prev.append(current, &mut outline.arena);
        }
        Some(next) if outline.is_item(next) && !prev_is_sublist => {
            // Split the run: a fresh sublist takes the current item's place.
            let sublist = new_sublist(outline, style);
            next.insert_before(sublist, &mut outline.arena);
            sublist.append(current, &mut outline.arena);
        }
        Some(next) if outline.is_sublist(next) && prev_is_sublist => {
            // Squeezed between two sublists: the current item and the whole
            // trailing sublist collapse into the leading one, in order.
            let trailing: Vec<NodeId> = next.children(&outline.arena).collect();
            prev.append(current, &mut outline.arena);
            for child in trailing {
                prev.append(child, &mut outline.arena);
            }
            next.remove_subtree(&mut outline.arena);
        }
        Some(_) if prev_is_sublist => {
            prev.append(current, &mut outline.arena);
        }
        Some(next) => {
            // Next sibling is a sublist, previous is an item: join its front.
            next.prepend(current, &mut outline.arena);
        }
    }

    Some(current)
}

// ============================================================================
// Outdent
// ============================================================================

/// Moves `current` one nesting level up. Whatever followed it in its old
/// sublist is regrouped into a trailing sublist so the visible order never
/// changes; an enclosing sublist left empty is dropped.
///
/// Callers guard against outdenting out of the root sublist; the check here
/// keeps the engine safe on its own.
pub(crate) fn outdent_item(outline: &mut Outline, current: NodeId) -> Option<NodeId> {
    if !outline.is_item(current) {
        return None;
    }
    let parent = outline.parent(current)?;
    if parent == outline.root {
        return None;
    }
    // The parent is a nested sublist, so a grandparent sublist exists.
    outline.parent(parent)?;

    let trailing: Vec<NodeId> = {
        let mut rest = Vec::new();
        let mut cursor = outline.next_sibling(current);
        while let Some(id) = cursor {
            cursor = outline.next_sibling(id);
            rest.push(id);
        }
        rest
    };

    // The item becomes a peer of its old enclosing sublist, directly after
    // it; trailing siblings follow in a sublist of their own.
    parent.insert_after(current, &mut outline.arena);
    if !trailing.is_empty() {
        let style = outline.style();
        let sublist = new_sublist(outline, style);
        current.insert_after(sublist, &mut outline.arena);
        for id in trailing {
            sublist.append(id, &mut outline.arena);
        }
    }

    if outline.arena[parent].first_child().is_none() {
        parent.remove_subtree(&mut outline.arena);
    }

    Some(current)
}

// ============================================================================
// Style propagation
// ============================================================================

/// Retags the root and every nested sublist with the same style.
pub(crate) fn propagate_style(outline: &mut Outline, style: ListStyle) {
    let sublists: Vec<NodeId> = outline
        .root
        .descendants(&outline.arena)
        .filter(|id| outline.is_sublist(*id))
        .collect();
    for id in sublists {
        if let Some(node) = outline.arena.get_mut(id) {
            if let ListNode::Sublist { style: tag } = node.get_mut() {
                *tag = style;
            }
        }
    }
}

fn new_sublist(outline: &mut Outline, style: ListStyle) -> NodeId {
    outline.arena.new_node(ListNode::Sublist { style })
}
