//! Leaf Classification
//!
//! Decides whether a freshly loaded node can ever have children. The
//! verdict is taken once, at node creation, and never recomputed.

use std::sync::Arc;

/// Caller-supplied leaf predicate with the tree's default policies.
///
/// Without a predicate every node is assumed expandable. Root-level nodes
/// are exempt from classification unless [`classify_roots`] is enabled,
/// matching the usual "top level is always openable" presentation.
///
/// [`classify_roots`]: LeafClassifier::classify_roots
pub struct LeafClassifier<T> {
    predicate: Option<Arc<dyn Fn(&T) -> bool + Send + Sync>>,
    classify_roots: bool,
}

impl<T> LeafClassifier<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Some(Arc::new(predicate)),
            classify_roots: false,
        }
    }

    /// Apply the predicate to root-level nodes as well.
    pub fn classify_roots(mut self, enabled: bool) -> Self {
        self.classify_roots = enabled;
        self
    }

    pub fn is_leaf(&self, item: &T, depth: usize) -> bool {
        if depth == 0 && !self.classify_roots {
            return false;
        }
        match &self.predicate {
            Some(predicate) => predicate(item),
            None => false,
        }
    }
}

impl<T> Default for LeafClassifier<T> {
    fn default() -> Self {
        Self {
            predicate: None,
            classify_roots: false,
        }
    }
}

impl<T> Clone for LeafClassifier<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            classify_roots: self.classify_roots,
        }
    }
}
