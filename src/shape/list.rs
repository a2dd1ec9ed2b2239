//! Positional list shape
//!
//! Node = [value, left, right]
//! Leaf = [value, [], []]
//! Empty tree = []

use std::fmt;

#[cfg(feature = "visualize")]
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::tree::{NodeBuilder, NodeView};
use crate::Value;

/// Tree as nested `[value, left, right]` triples
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListTree {
    /// The empty list `[]`
    #[default]
    Empty,

    /// A `[value, left, right]` triple; leaves hold two `Empty` slots
    Node {
        /// Value at this node
        value: Value,
        /// Left subtree slot
        left: Box<ListTree>,
        /// Right subtree slot
        right: Box<ListTree>,
    },
}

impl ListTree {
    /// True for `[]`
    pub fn is_empty(&self) -> bool {
        matches!(self, ListTree::Empty)
    }

    /// True for `[value, [], []]`
    pub fn is_leaf(&self) -> bool {
        matches!(self, ListTree::Node { left, right, .. } if left.is_empty() && right.is_empty())
    }

    /// Number of slots: 3 for a node, 0 for the empty list
    pub fn len(&self) -> usize {
        match self {
            ListTree::Empty => 0,
            ListTree::Node { .. } => 3,
        }
    }

    /// Value slot
    pub fn value(&self) -> Option<Value> {
        match self {
            ListTree::Empty => None,
            ListTree::Node { value, .. } => Some(*value),
        }
    }

    /// Left subtree slot
    pub fn left(&self) -> Option<&ListTree> {
        match self {
            ListTree::Empty => None,
            ListTree::Node { left, .. } => Some(&**left),
        }
    }

    /// Right subtree slot
    pub fn right(&self) -> Option<&ListTree> {
        match self {
            ListTree::Empty => None,
            ListTree::Node { right, .. } => Some(&**right),
        }
    }
}

impl NodeView for ListTree {
    fn node_value(&self) -> Option<Value> {
        self.value()
    }

    fn child_pair(&self) -> Option<(&Self, &Self)> {
        match self {
            ListTree::Node { left, right, .. } if !left.is_empty() && !right.is_empty() => {
                Some((&**left, &**right))
            }
            _ => None,
        }
    }
}

impl fmt::Display for ListTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListTree::Empty => f.write_str("[]"),
            ListTree::Node { value, left, right } => write!(f, "[{value}, {left}, {right}]"),
        }
    }
}

#[cfg(feature = "visualize")]
impl Serialize for ListTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ListTree::Empty => serializer.serialize_seq(Some(0))?.end(),
            ListTree::Node { value, left, right } => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element(value)?;
                seq.serialize_element(&**left)?;
                seq.serialize_element(&**right)?;
                seq.end()
            }
        }
    }
}

/// Builds [`ListTree`] nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct ListBuilder;

impl NodeBuilder for ListBuilder {
    type Node = ListTree;

    fn make_leaf(&self, value: Value) -> ListTree {
        self.make_internal(value, ListTree::Empty, ListTree::Empty)
    }

    fn make_internal(&self, value: Value, left: ListTree, right: ListTree) -> ListTree {
        ListTree::Node {
            value,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn empty(&self) -> ListTree {
        ListTree::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_slots_are_empty_lists() {
        let leaf = ListBuilder.make_leaf(7);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.len(), 3);
        assert_eq!(leaf.left(), Some(&ListTree::Empty));
        assert_eq!(leaf.to_string(), "[7, [], []]");
    }

    #[test]
    fn test_internal_slots() {
        let node = ListBuilder.make_internal(10, ListBuilder.make_leaf(11), ListBuilder.make_leaf(9));
        assert!(!node.is_leaf());
        assert_eq!(node.value(), Some(10));
        assert_eq!(node.left().and_then(ListTree::value), Some(11));
        assert_eq!(node.right().and_then(ListTree::value), Some(9));
        assert_eq!(node.to_string(), "[10, [11, [], []], [9, [], []]]");
    }

    #[test]
    fn test_empty_list() {
        let empty = ListBuilder.empty();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.to_string(), "[]");
    }
}
