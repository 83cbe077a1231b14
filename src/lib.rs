//! Lazily Loaded Tree View for Leptos
//!
//! Renders a hierarchical list whose children are discovered only when a
//! node is expanded, through a synchronous or asynchronous data source.
//! Loaded children stay cached across collapse/expand cycles, and path
//! keys (`"0.2.1"` style sibling indices) address nodes without parent
//! back-references.
//!
//! The state machine ([`TreeState`], [`TreeSource`], [`visible_rows`]) is
//! plain Rust and runs natively; [`TreeView`] binds it to Leptos signals
//! and DOM events.
//!
//! ```no_run
//! use leptos::prelude::*;
//! use leptos_treeview::{LeafClassifier, TreeSource, TreeView};
//!
//! #[component]
//! fn Demo() -> impl IntoView {
//!     let source = TreeSource::sync(|parent: Option<&String>| match parent {
//!         Some(p) => vec![format!("{p}.1"), format!("{p}.2")],
//!         None => vec!["Item 1".to_string(), "Item 2".to_string()],
//!     });
//!     let content = Callback::new(|item: String| view! { <span>{item}</span> }.into_any());
//!
//!     view! {
//!         <TreeView
//!             source=source
//!             inner_node=content
//!             check_leaf=LeafClassifier::new(|item: &String| item.len() > 8)
//!         />
//!     }
//! }
//! ```

mod classify;
mod components;
mod error;
mod icon;
mod node;
mod path;
mod render;
mod source;
mod state;

pub use classify::LeafClassifier;
pub use components::{TreeView, TREE_VIEW_CSS};
pub use error::TreeError;
pub use icon::{glyph_class, IconKind, IconSet, NodeIcon};
pub use node::{Forest, NodeRecord, NodeState};
pub use path::{child_key, NodePath};
pub use render::{visible_rows, RowModel};
pub use source::TreeSource;
pub use state::{ToggleOutcome, TreeState};
