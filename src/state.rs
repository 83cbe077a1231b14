//! Tree State
//!
//! Owns the forest and applies collapse/expand transitions, including the
//! lazy-load round-trip. Pure: no signals, no DOM, no executor — the
//! component layer dispatches the loads this module requests, which keeps
//! the whole state machine natively testable.
//!
//! Per node: `Collapsed → Expanding → Expanded → Collapsed → …`, with
//! `Expanding → Collapsed` on failure. Leaves never enter the machine.

use crate::classify::LeafClassifier;
use crate::error::TreeError;
use crate::node::{Forest, NodeRecord, NodeState};
use crate::path::NodePath;

/// What a toggle request amounts to once resolved against current state.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome<T> {
    /// Leaf, stale path, or a load already in flight. Nothing to do.
    Ignored,
    /// Node is now collapsed. Children stay cached.
    Collapsed,
    /// Node is now expanded from cache; no load was needed.
    Expanded,
    /// Node entered `Expanding`; the caller must run the load and report
    /// back via [`TreeState::complete_load`] or [`TreeState::fail_load`]
    /// with the same generation.
    LoadRequested {
        parent: T,
        path: NodePath,
        generation: u64,
    },
}

/// The mutable forest plus the transition logic over it.
pub struct TreeState<T> {
    forest: Forest<T>,
    classifier: LeafClassifier<T>,
    next_generation: u64,
}

impl<T: Clone> TreeState<T> {
    pub fn new(classifier: LeafClassifier<T>) -> Self {
        Self {
            forest: Vec::new(),
            classifier,
            next_generation: 0,
        }
    }

    pub fn forest(&self) -> &[NodeRecord<T>] {
        &self.forest
    }

    /// Walk the path's indices down the forest.
    pub fn resolve(&self, path: &NodePath) -> Result<&NodeRecord<T>, TreeError> {
        let mut level = self.forest.as_slice();
        let mut found = None;
        for &index in path.indices() {
            let node = level
                .get(index)
                .ok_or_else(|| TreeError::InvalidPath(path.to_string()))?;
            level = node.children.as_deref().unwrap_or(&[]);
            found = Some(node);
        }
        found.ok_or_else(|| TreeError::InvalidPath(path.to_string()))
    }

    fn resolve_mut(&mut self, path: &NodePath) -> Result<&mut NodeRecord<T>, TreeError> {
        let (first, rest) = path
            .indices()
            .split_first()
            .ok_or_else(|| TreeError::InvalidPath(path.to_string()))?;
        let mut node = self
            .forest
            .get_mut(*first)
            .ok_or_else(|| TreeError::InvalidPath(path.to_string()))?;
        for &index in rest {
            node = node
                .children
                .as_mut()
                .and_then(|children| children.get_mut(index))
                .ok_or_else(|| TreeError::InvalidPath(path.to_string()))?;
        }
        Ok(node)
    }

    /// Resolve a path key and dispatch to expand or collapse. Stale keys
    /// and repeated toggles on an `Expanding` node degrade to no-ops.
    pub fn toggle(&mut self, key: &str) -> ToggleOutcome<T> {
        let path = match NodePath::parse(key) {
            Ok(path) => path,
            Err(err) => {
                log::warn!("ignoring toggle: {err}");
                return ToggleOutcome::Ignored;
            }
        };
        let state = match self.resolve(&path) {
            Ok(node) => node.state,
            Err(_) => {
                log::warn!("ignoring toggle on stale path {key}");
                return ToggleOutcome::Ignored;
            }
        };
        match state {
            // a second click while the load is in flight must not start
            // a second load
            NodeState::Expanding => ToggleOutcome::Ignored,
            NodeState::Expanded => self.collapse(&path),
            NodeState::Collapsed => self.expand(&path),
        }
    }

    /// Expand a collapsed node. Cached children are shown immediately;
    /// otherwise the node enters `Expanding` and a load is requested.
    /// Leaves and nodes already open (or loading) are no-ops.
    pub fn expand(&mut self, path: &NodePath) -> ToggleOutcome<T> {
        let generation = self.next_generation;
        let Ok(node) = self.resolve_mut(path) else {
            return ToggleOutcome::Ignored;
        };
        if node.state != NodeState::Collapsed || node.leaf {
            return ToggleOutcome::Ignored;
        }
        if node.children.is_some() {
            // cache hit: children survive collapse, no reload
            node.state = NodeState::Expanded;
            return ToggleOutcome::Expanded;
        }
        node.state = NodeState::Expanding;
        node.pending = Some(generation);
        let parent = node.item.clone();
        self.next_generation += 1;
        log::debug!("dispatching child load for {path} (generation {generation})");
        ToggleOutcome::LoadRequested {
            parent,
            path: path.clone(),
            generation,
        }
    }

    /// Collapse an expanded node. Children and their own states stay
    /// cached; re-expanding restores them without a reload.
    pub fn collapse(&mut self, path: &NodePath) -> ToggleOutcome<T> {
        let Ok(node) = self.resolve_mut(path) else {
            return ToggleOutcome::Ignored;
        };
        if node.state != NodeState::Expanded {
            return ToggleOutcome::Ignored;
        }
        node.state = NodeState::Collapsed;
        ToggleOutcome::Collapsed
    }

    /// Attach loaded children and finish the expansion. Returns `false`
    /// when the completion is stale (forest replaced, node reverted, or
    /// a newer load superseded this one) and was discarded.
    pub fn complete_load(&mut self, path: &NodePath, generation: u64, items: Vec<T>) -> bool {
        let depth = path.depth() + 1;
        let classifier = self.classifier.clone();
        let Ok(node) = self.resolve_mut(path) else {
            log::debug!("discarding stale load completion for {path}");
            return false;
        };
        if node.pending != Some(generation) || node.state != NodeState::Expanding {
            log::debug!("discarding stale load completion for {path} (generation {generation})");
            return false;
        }
        node.children = Some(wrap_items(items, depth, &classifier));
        node.state = NodeState::Expanded;
        node.pending = None;
        true
    }

    /// Revert a failed or timed-out load: `Expanding → Collapsed`, children
    /// untouched, so the user can retry. Stale failures are discarded.
    pub fn fail_load(&mut self, path: &NodePath, generation: u64) -> bool {
        let Ok(node) = self.resolve_mut(path) else {
            return false;
        };
        if node.pending != Some(generation) || node.state != NodeState::Expanding {
            return false;
        }
        node.state = NodeState::Collapsed;
        node.pending = None;
        true
    }

    /// Install a freshly loaded root level, discarding any prior forest.
    /// Completions still in flight for the old forest carry generations no
    /// new node knows about and get discarded on arrival.
    pub fn replace_root(&mut self, items: Vec<T>) {
        self.forest = wrap_items(items, 0, &self.classifier);
    }
}

fn wrap_items<T>(items: Vec<T>, depth: usize, classifier: &LeafClassifier<T>) -> Vec<NodeRecord<T>> {
    items
        .into_iter()
        .map(|item| {
            let leaf = classifier.is_leaf(&item, depth);
            NodeRecord::new(item, leaf)
        })
        .collect()
}
