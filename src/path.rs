//! Path Keys
//!
//! Dot-separated sibling indices ("0.2.1") address a node by walking the
//! forest from the root. Event payloads carry the plain string; lookup is
//! O(depth) and needs no parent back-references.

use std::fmt;

use crate::error::TreeError;

/// Parsed path key: sibling indices from the root down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Parse a key like `"0.2.1"`. Empty or non-numeric segments are
    /// rejected as [`TreeError::InvalidPath`].
    pub fn parse(key: &str) -> Result<Self, TreeError> {
        if key.is_empty() {
            return Err(TreeError::InvalidPath(key.to_string()));
        }
        let indices = key
            .split('.')
            .map(|seg| seg.parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| TreeError::InvalidPath(key.to_string()))?;
        Ok(Self(indices))
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Depth of the addressed node (root level = 0).
    pub fn depth(&self) -> usize {
        self.0.len() - 1
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for index in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{index}")?;
            first = false;
        }
        Ok(())
    }
}

/// Key of the `index`-th child under `parent` (`None` = root level).
pub fn child_key(parent: Option<&str>, index: usize) -> String {
    match parent {
        Some(parent) => format!("{parent}.{index}"),
        None => index.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let path = NodePath::parse("0.2.1").unwrap();
        assert_eq!(path.indices(), &[0, 2, 1]);
        assert_eq!(path.depth(), 2);
        assert_eq!(path.to_string(), "0.2.1");

        let root = NodePath::parse("3").unwrap();
        assert_eq!(root.indices(), &[3]);
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        assert!(matches!(NodePath::parse(""), Err(TreeError::InvalidPath(_))));
        assert!(matches!(NodePath::parse("0..1"), Err(TreeError::InvalidPath(_))));
        assert!(matches!(NodePath::parse("a.b"), Err(TreeError::InvalidPath(_))));
        assert!(matches!(NodePath::parse("1.-2"), Err(TreeError::InvalidPath(_))));
    }

    #[test]
    fn test_child_key() {
        assert_eq!(child_key(None, 0), "0");
        assert_eq!(child_key(Some("0"), 2), "0.2");
        assert_eq!(child_key(Some("0.2"), 1), "0.2.1");
    }
}
