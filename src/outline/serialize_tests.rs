use super::*;
use super::serialize::{ListData, ListEntry, item_is_blank};

fn unordered(items: Vec<ListEntry>) -> ListData {
    ListData::new(ListStyle::Unordered, items)
}

fn text(content: &str) -> ListEntry {
    ListEntry::text(content)
}

fn nested(items: Vec<ListEntry>) -> ListEntry {
    ListEntry::Nested(items)
}

#[test]
fn materialize_then_flatten_round_trips() {
    let data = unordered(vec![
        text("a"),
        nested(vec![text("b"), nested(vec![text("c")])]),
        text("d"),
    ]);

    let outline = Outline::from_data(Some(data.clone()), ListStyle::Unordered);
    assert_eq!(outline.save(), data);
}

#[test]
fn flatten_drops_blank_items() {
    let data = unordered(vec![text("a"), text(""), text("  "), text("b")]);
    let outline = Outline::from_data(Some(data), ListStyle::Unordered);

    assert_eq!(outline.save(), unordered(vec![text("a"), text("b")]));
}

#[test]
fn flatten_normalization_is_idempotent() {
    let data = unordered(vec![text("a"), text(""), nested(vec![text("b"), text("")])]);

    let once = Outline::from_data(Some(data), ListStyle::Unordered).save();
    let twice = Outline::from_data(Some(once.clone()), ListStyle::Unordered).save();
    assert_eq!(once, twice);
}

#[test]
fn flatten_strips_single_trailing_break() {
    let data = unordered(vec![text("a<br>"), text("b<br>c"), text("<br>")]);
    let outline = Outline::from_data(Some(data), ListStyle::Unordered);

    assert_eq!(outline.save(), unordered(vec![text("a"), text("b<br>c")]));
}

#[test]
fn materialize_missing_style_uses_configured_default() {
    let data: ListData = serde_json::from_str(r#"{"items":["a"]}"#).unwrap();
    assert_eq!(data.style, None);

    let outline = Outline::from_data(Some(data), ListStyle::Ordered);
    assert_eq!(outline.style(), ListStyle::Ordered);
}

#[test]
fn materialize_unknown_style_uses_configured_default() {
    let data: ListData =
        serde_json::from_str(r#"{"style":"fancy","items":["a"]}"#).unwrap();
    assert_eq!(data.style, None);

    let outline = Outline::from_data(Some(data), ListStyle::Unordered);
    assert_eq!(outline.style(), ListStyle::Unordered);
}

#[test]
fn materialize_missing_items_seeds_single_empty_item() {
    let outline = Outline::from_json(r#"{"style":"ordered"}"#, ListStyle::Unordered)
        .expect("lenient decode");

    assert_eq!(outline.item_count(), 1);
    assert_eq!(outline.content(outline.items()[0]), Some(""));
    assert_eq!(outline.style(), ListStyle::Ordered);
}

#[test]
fn materialize_propagates_root_style_to_nested_sublists() {
    let outline = Outline::from_json(
        r#"{"style":"ordered","items":["a",["b",["c"]]]}"#,
        ListStyle::Unordered,
    )
    .unwrap();

    let root = outline.root();
    let nested = outline.children(root)[1];
    assert_eq!(
        outline.node(nested),
        Some(&ListNode::Sublist {
            style: ListStyle::Ordered
        })
    );
}

#[test]
fn persisted_json_shape_is_stable() {
    let data = ListData::new(
        ListStyle::Unordered,
        vec![text("a"), nested(vec![text("b")])],
    );
    assert_eq!(
        serde_json::to_string(&data).unwrap(),
        r#"{"style":"unordered","items":["a",["b"]]}"#
    );
}

#[test]
fn blank_detection_treats_breaks_as_whitespace() {
    assert!(item_is_blank(""));
    assert!(item_is_blank("   "));
    assert!(item_is_blank("<br>"));
    assert!(item_is_blank("<br> <br>"));
    assert!(!item_is_blank("a<br>"));
}

#[test]
fn plain_text_export_joins_top_level_leaves() {
    let data = unordered(vec![text("a"), nested(vec![text("b")]), text("c")]);
    assert_eq!(data.to_plain_text(), "a. c");
}

#[test]
fn plain_text_import_wraps_string_in_single_item() {
    let data = ListData::from_plain_text("hello there");
    assert_eq!(data, unordered(vec![text("hello there")]));
}
