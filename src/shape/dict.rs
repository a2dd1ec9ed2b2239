//! Dict-of-lists shape
//!
//! Node = { "value": [left, right] }
//! Leaf = { "value": [] }
//! Empty tree = {}

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "visualize")]
use serde::Serialize;

use crate::tree::{NodeBuilder, NodeView};
use crate::Value;

/// Tree as a mapping from stringified value to its child list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(Serialize), serde(transparent))]
pub struct DictTree(BTreeMap<String, Vec<DictTree>>);

impl DictTree {
    /// Child list stored under `key`
    pub fn get(&self, key: &str) -> Option<&[DictTree]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// True when `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries (1 for a node, 0 for the empty tree)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty tree
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key of the root entry
    pub fn key(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }

    /// Child list of the root entry (empty for leaves)
    pub fn children(&self) -> &[DictTree] {
        self.0.values().next().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl NodeView for DictTree {
    fn node_value(&self) -> Option<Value> {
        self.key().and_then(|key| key.parse().ok())
    }

    fn child_pair(&self) -> Option<(&Self, &Self)> {
        match self.children() {
            [left, right] => Some((left, right)),
            _ => None,
        }
    }
}

impl fmt::Display for DictTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (key, children) in &self.0 {
            write!(f, "{key:?}: ")?;
            write_children(f, children)?;
        }
        f.write_str("}")
    }
}

pub(super) fn write_children<T: fmt::Display>(f: &mut fmt::Formatter<'_>, children: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{child}")?;
    }
    f.write_str("]")
}

/// Builds [`DictTree`] nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct DictBuilder;

impl NodeBuilder for DictBuilder {
    type Node = DictTree;

    fn make_leaf(&self, value: Value) -> DictTree {
        DictTree(BTreeMap::from([(value.to_string(), Vec::new())]))
    }

    fn make_internal(&self, value: Value, left: DictTree, right: DictTree) -> DictTree {
        DictTree(BTreeMap::from([(value.to_string(), vec![left, right])]))
    }

    fn empty(&self) -> DictTree {
        DictTree::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_has_empty_child_list() {
        let leaf = DictBuilder.make_leaf(13);
        assert_eq!(leaf.key(), Some("13"));
        assert_eq!(leaf.get("13"), Some(&[][..]));
        assert!(leaf.child_pair().is_none());
        assert_eq!(leaf.to_string(), r#"{"13": []}"#);
    }

    #[test]
    fn test_internal_display() {
        let node = DictBuilder.make_internal(13, DictBuilder.make_leaf(14), DictBuilder.make_leaf(12));
        assert_eq!(node.to_string(), r#"{"13": [{"14": []}, {"12": []}]}"#);
        assert_eq!(node.node_value(), Some(13));
    }

    #[test]
    fn test_empty() {
        let empty = DictBuilder.empty();
        assert!(empty.is_empty());
        assert_eq!(empty.node_value(), None);
        assert_eq!(empty.to_string(), "{}");
    }
}
