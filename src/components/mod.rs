//! UI Components
//!
//! Reusable Leptos components.

mod tree_view;

pub use tree_view::{TreeView, TREE_VIEW_CSS};
