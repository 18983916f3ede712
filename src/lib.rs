//! # nested-list
//!
//! A nested-list editing engine for block-based rich-text editors.
//!
//! The engine owns a live outline tree (an arena of item and sublist nodes),
//! applies single-item indent/outdent restructuring, toggles the list style
//! across the whole tree, and converts between the live tree and the nested
//! `{ "style": ..., "items": [...] }` form that crosses the save/load
//! boundary. Pasted list markup is imported into that same persisted form.
//!
//! The host editor stays in charge of rendering, caret handling and keyboard
//! plumbing: every command takes the externally resolved current item as an
//! explicit handle, and returns a [`HostRequest`] describing what the host
//! surface should do next.
//!
//! ```rust
//! use nested_list::{ListData, ListStyle, Outline};
//!
//! let data: ListData = serde_json::from_str(
//!     r#"{ "style": "unordered", "items": ["a", "b"] }"#,
//! ).unwrap();
//! let mut outline = Outline::from_data(Some(data), ListStyle::Unordered);
//!
//! let b = outline.items().pop().unwrap();
//! outline.indent(Some(b));
//!
//! let saved = outline.save();
//! assert_eq!(serde_json::to_string(&saved).unwrap(),
//!            r#"{"style":"unordered","items":["a",["b"]]}"#);
//! ```

pub mod outline;

pub use indextree::NodeId;
pub use outline::import::{MarkupNode, import_markup};
pub use outline::serialize::{LINE_BREAK_TAG, ListData, ListEntry};
pub use outline::{HostRequest, ListNode, ListStyle, Outline, TUNES};
