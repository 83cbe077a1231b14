//! Node Records
//!
//! The tree's own wrapper around caller items, carrying expansion state.

/// Expansion state of a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Children hidden. Previously loaded children stay cached.
    Collapsed,
    /// A load is in flight; used to render a pending indicator.
    Expanding,
    /// Children loaded and visible.
    Expanded,
}

/// One node of the tree: the caller's item plus expansion state.
///
/// `children: None` means "not yet loaded"; `Some(vec![])` means "loaded,
/// has no children". Re-expanding a node with zero children must not
/// trigger another load, so the distinction is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord<T> {
    pub item: T,
    pub state: NodeState,
    /// Fixed at creation time by the leaf classifier; never recomputed.
    pub leaf: bool,
    pub children: Option<Vec<NodeRecord<T>>>,
    /// Generation of the in-flight load, if any. Completions carrying a
    /// different generation are stale and get discarded.
    pub(crate) pending: Option<u64>,
}

impl<T> NodeRecord<T> {
    pub(crate) fn new(item: T, leaf: bool) -> Self {
        Self {
            item,
            state: NodeState::Collapsed,
            leaf,
            children: None,
            pending: None,
        }
    }
}

/// The root-level sequence of nodes.
pub type Forest<T> = Vec<NodeRecord<T>>;
