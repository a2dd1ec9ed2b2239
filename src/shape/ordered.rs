//! Order-preserving mapping shape
//!
//! Same layout as the dict shape, but entries keep insertion order when
//! iterated or rendered.

use std::fmt;

#[cfg(feature = "visualize")]
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::dict::write_children;
use crate::tree::{NodeBuilder, NodeView};
use crate::Value;

/// Tree as an insertion-ordered mapping from stringified value to children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedTree {
    entries: Vec<(String, Vec<OrderedTree>)>,
}

impl OrderedTree {
    /// Child list stored under `key`
    pub fn get(&self, key: &str) -> Option<&[OrderedTree]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, children)| children.as_slice())
    }

    /// True when `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries (1 for a node, 0 for the empty tree)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for the empty tree
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[OrderedTree])> {
        self.entries
            .iter()
            .map(|(key, children)| (key.as_str(), children.as_slice()))
    }

    /// Child list of the first entry (empty for leaves)
    pub fn children(&self) -> &[OrderedTree] {
        self.entries
            .first()
            .map(|(_, children)| children.as_slice())
            .unwrap_or(&[])
    }
}

impl NodeView for OrderedTree {
    fn node_value(&self) -> Option<Value> {
        self.keys().next().and_then(|key| key.parse().ok())
    }

    fn child_pair(&self) -> Option<(&Self, &Self)> {
        match self.children() {
            [left, right] => Some((left, right)),
            _ => None,
        }
    }
}

impl fmt::Display for OrderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrderedDict({")?;
        for (i, (key, children)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key:?}: ")?;
            write_children(f, children)?;
        }
        f.write_str("})")
    }
}

#[cfg(feature = "visualize")]
impl Serialize for OrderedTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, children) in &self.entries {
            map.serialize_entry(key, children)?;
        }
        map.end()
    }
}

/// Builds [`OrderedTree`] nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedBuilder;

impl NodeBuilder for OrderedBuilder {
    type Node = OrderedTree;

    fn make_leaf(&self, value: Value) -> OrderedTree {
        OrderedTree {
            entries: vec![(value.to_string(), Vec::new())],
        }
    }

    fn make_internal(&self, value: Value, left: OrderedTree, right: OrderedTree) -> OrderedTree {
        OrderedTree {
            entries: vec![(value.to_string(), vec![left, right])],
        }
    }

    fn empty(&self) -> OrderedTree {
        OrderedTree::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_entry() {
        let leaf = OrderedBuilder.make_leaf(-4);
        assert_eq!(leaf.keys().collect::<Vec<_>>(), vec!["-4"]);
        assert!(leaf.contains_key("-4"));
        assert_eq!(leaf.node_value(), Some(-4));
        assert_eq!(leaf.to_string(), r#"OrderedDict({"-4": []})"#);
    }

    #[test]
    fn test_children_keep_left_right_order() {
        let node = OrderedBuilder.make_internal(10, OrderedBuilder.make_leaf(11), OrderedBuilder.make_leaf(9));
        let keys: Vec<_> = node.children().iter().filter_map(|c| c.keys().next()).collect();
        assert_eq!(keys, vec!["11", "9"]);
        assert_eq!(
            node.to_string(),
            r#"OrderedDict({"10": [OrderedDict({"11": []}), OrderedDict({"9": []})]})"#
        );
    }

    #[test]
    fn test_empty() {
        let empty = OrderedBuilder.empty();
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "OrderedDict({})");
    }
}
