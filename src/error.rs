//! Tree Errors
//!
//! Node-scoped failures; none of these abort the rest of the forest.

use thiserror::Error;

/// Errors produced while resolving paths or loading children
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A path key referenced a node that no longer exists (stale event
    /// after the forest changed). Handled as a no-op by the tree.
    #[error("invalid node path: {0}")]
    InvalidPath(String),

    /// The data source failed while loading children. The affected node
    /// reverts to collapsed so the user can retry.
    #[error("loading children failed: {0}")]
    LoadFailed(String),

    /// A pending load exceeded the configured timeout.
    #[error("loading children timed out after {0} ms")]
    LoadTimeout(u32),
}
