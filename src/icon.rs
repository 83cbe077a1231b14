//! Node Icons
//!
//! Icon tokens resolve to Font Awesome glyph classes at render time. A
//! token is either a fixed string or computed per item.

use std::sync::Arc;

/// An icon token: fixed, or derived from the item when the row renders.
pub enum NodeIcon<T> {
    Static(String),
    Computed(Arc<dyn Fn(&T) -> String + Send + Sync>),
}

impl<T> NodeIcon<T> {
    pub fn computed(f: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }

    /// Resolve to a concrete token for this item. Never cached.
    pub fn resolve(&self, item: &T) -> String {
        match self {
            Self::Static(token) => token.clone(),
            Self::Computed(f) => f(item),
        }
    }
}

impl<T> From<&str> for NodeIcon<T> {
    fn from(token: &str) -> Self {
        Self::Static(token.to_string())
    }
}

impl<T> From<String> for NodeIcon<T> {
    fn from(token: String) -> Self {
        Self::Static(token)
    }
}

impl<T> Clone for NodeIcon<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Static(token) => Self::Static(token.clone()),
            Self::Computed(f) => Self::Computed(Arc::clone(f)),
        }
    }
}

/// Which of the three icons a row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Collapsed, expandable node.
    Plus,
    /// Expanded (or expanding) node.
    Minus,
    /// Leaf node, no affordance.
    Leaf,
}

/// The three icon slots of the tree.
pub struct IconSet<T> {
    pub plus: NodeIcon<T>,
    pub minus: NodeIcon<T>,
    pub leaf: NodeIcon<T>,
}

impl<T> IconSet<T> {
    pub fn resolve(&self, kind: IconKind, item: &T) -> String {
        match kind {
            IconKind::Plus => self.plus.resolve(item),
            IconKind::Minus => self.minus.resolve(item),
            IconKind::Leaf => self.leaf.resolve(item),
        }
    }
}

impl<T> Default for IconSet<T> {
    fn default() -> Self {
        Self {
            plus: "plus-square-o".into(),
            minus: "minus-square-o".into(),
            leaf: "circle-thin".into(),
        }
    }
}

impl<T> Clone for IconSet<T> {
    fn clone(&self) -> Self {
        Self {
            plus: self.plus.clone(),
            minus: self.minus.clone(),
            leaf: self.leaf.clone(),
        }
    }
}

/// Font Awesome class list for a resolved token.
pub fn glyph_class(token: &str, size: u8) -> String {
    if size > 1 {
        format!("fa fa-{token} fa-fw fa-{size}x")
    } else {
        format!("fa fa-{token} fa-fw")
    }
}
