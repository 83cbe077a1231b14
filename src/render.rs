//! Row Projection
//!
//! Flattens the current forest into display order: siblings in sequence,
//! children right after their parent, collapsed subtrees hidden. The
//! headless counterpart of the rendered tree; the component and the tests
//! agree on visibility through this walk.

use crate::icon::IconKind;
use crate::node::{NodeRecord, NodeState};
use crate::path::child_key;

/// Presentation facts for one visible row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    /// Path key, stable for the node's lifetime.
    pub key: String,
    pub depth: usize,
    pub leaf: bool,
    /// True while the node's child load is in flight.
    pub pending: bool,
    pub icon: IconKind,
}

/// Icon slot for a node under the leaf/expanded/collapsed rules.
pub fn icon_kind<T>(node: &NodeRecord<T>) -> IconKind {
    if node.leaf {
        IconKind::Leaf
    } else if node.state == NodeState::Collapsed {
        IconKind::Plus
    } else {
        IconKind::Minus
    }
}

/// All currently visible rows, in display order.
pub fn visible_rows<T>(forest: &[NodeRecord<T>]) -> Vec<(RowModel, &T)> {
    let mut rows = Vec::new();
    collect(forest, None, 0, &mut rows);
    rows
}

fn collect<'a, T>(
    nodes: &'a [NodeRecord<T>],
    parent: Option<&str>,
    depth: usize,
    rows: &mut Vec<(RowModel, &'a T)>,
) {
    for (index, node) in nodes.iter().enumerate() {
        let key = child_key(parent, index);
        rows.push((
            RowModel {
                key: key.clone(),
                depth,
                leaf: node.leaf,
                pending: node.state == NodeState::Expanding,
                icon: icon_kind(node),
            },
            &node.item,
        ));
        if node.state != NodeState::Collapsed && !node.leaf {
            if let Some(children) = &node.children {
                collect(children, Some(&key), depth + 1, rows);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::LeafClassifier;
    use crate::state::{ToggleOutcome, TreeState};

    fn expand(state: &mut TreeState<String>, key: &str, children: &[&str]) {
        let ToggleOutcome::LoadRequested { path, generation, .. } = state.toggle(key) else {
            panic!("expected a load request for {key}");
        };
        assert!(state.complete_load(&path, generation, children.iter().map(|s| s.to_string()).collect()));
    }

    #[test]
    fn test_rows_in_display_order() {
        let mut state = TreeState::new(LeafClassifier::default());
        state.replace_root(vec!["A".to_string(), "B".to_string()]);
        expand(&mut state, "0", &["A.1", "A.2"]);
        expand(&mut state, "0.1", &["A.2.1"]);

        let rows = visible_rows(state.forest());
        let keys: Vec<&str> = rows.iter().map(|(row, _)| row.key.as_str()).collect();
        assert_eq!(keys, ["0", "0.0", "0.1", "0.1.0", "1"]);
        let items: Vec<&str> = rows.iter().map(|(_, item)| item.as_str()).collect();
        assert_eq!(items, ["A", "A.1", "A.2", "A.2.1", "B"]);
        let depths: Vec<usize> = rows.iter().map(|(row, _)| row.depth).collect();
        assert_eq!(depths, [0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_collapsed_subtree_is_hidden_but_cached() {
        let mut state = TreeState::new(LeafClassifier::default());
        state.replace_root(vec!["A".to_string()]);
        expand(&mut state, "0", &["A.1"]);
        assert_eq!(visible_rows(state.forest()).len(), 2);

        assert_eq!(state.toggle("0"), ToggleOutcome::Collapsed);
        let rows = visible_rows(state.forest());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0.icon, IconKind::Plus);
        // cache still present underneath
        assert!(state.forest()[0].children.is_some());
    }

    #[test]
    fn test_pending_marker_only_while_expanding() {
        let mut state = TreeState::new(LeafClassifier::default());
        state.replace_root(vec!["A".to_string()]);

        let ToggleOutcome::LoadRequested { path, generation, .. } = state.toggle("0") else {
            panic!("expected a load request");
        };
        let rows = visible_rows(state.forest());
        assert!(rows[0].0.pending);
        assert_eq!(rows[0].0.icon, IconKind::Minus);

        assert!(state.complete_load(&path, generation, vec!["A.1".to_string()]));
        let rows = visible_rows(state.forest());
        assert!(!rows[0].0.pending);
        assert_eq!(rows[0].0.icon, IconKind::Minus);
    }

    #[test]
    fn test_leaf_icon_and_no_affordance_flag() {
        let mut state = TreeState::new(LeafClassifier::new(|item: &String| item.ends_with(".1")));
        state.replace_root(vec!["A".to_string()]);
        expand(&mut state, "0", &["A.1", "A.2"]);

        let rows = visible_rows(state.forest());
        assert_eq!(rows[1].0.key, "0.0");
        assert!(rows[1].0.leaf);
        assert_eq!(rows[1].0.icon, IconKind::Leaf);
        assert!(!rows[2].0.leaf);
        assert_eq!(rows[2].0.icon, IconKind::Plus);
    }
}
