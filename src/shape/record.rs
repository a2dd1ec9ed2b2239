//! Fixed record shape ("namedtuple")
//!
//! Node = Node(root=value, left=..., right=...)
//! Leaf = Node(root=value, left=None, right=None)
//!
//! The empty tree is its own variant rather than a record with a default
//! root, so it can never be mistaken for a leaf holding that default.

use std::fmt;

#[cfg(feature = "visualize")]
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::tree::{NodeBuilder, NodeView};
use crate::Value;

/// Tree as `root/left/right` records with an explicit empty/leaf/internal tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecordTree {
    /// No root at all
    #[default]
    Empty,

    /// Record whose child fields are both absent
    Leaf {
        /// Value at this node
        root: Value,
    },

    /// Record with both child fields present
    Internal {
        /// Value at this node
        root: Value,
        /// Left child record
        left: Box<RecordTree>,
        /// Right child record
        right: Box<RecordTree>,
    },
}

/// Which of the three record states a [`RecordTree`] is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// No root
    Empty,
    /// Root without children
    Leaf,
    /// Root with two children
    Internal,
}

impl RecordTree {
    /// Tag of this record
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordTree::Empty => RecordKind::Empty,
            RecordTree::Leaf { .. } => RecordKind::Leaf,
            RecordTree::Internal { .. } => RecordKind::Internal,
        }
    }

    /// True for the empty tree
    pub fn is_empty(&self) -> bool {
        self.kind() == RecordKind::Empty
    }

    /// `root` field, absent for the empty tree
    pub fn root(&self) -> Option<Value> {
        match self {
            RecordTree::Empty => None,
            RecordTree::Leaf { root } | RecordTree::Internal { root, .. } => Some(*root),
        }
    }

    /// `left` field
    pub fn left(&self) -> Option<&RecordTree> {
        match self {
            RecordTree::Internal { left, .. } => Some(&**left),
            _ => None,
        }
    }

    /// `right` field
    pub fn right(&self) -> Option<&RecordTree> {
        match self {
            RecordTree::Internal { right, .. } => Some(&**right),
            _ => None,
        }
    }
}

impl NodeView for RecordTree {
    fn node_value(&self) -> Option<Value> {
        self.root()
    }

    fn child_pair(&self) -> Option<(&Self, &Self)> {
        self.left().zip(self.right())
    }
}

impl fmt::Display for RecordTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordTree::Empty => f.write_str("Empty"),
            RecordTree::Leaf { root } => write!(f, "Node(root={root}, left=None, right=None)"),
            RecordTree::Internal { root, left, right } => {
                write!(f, "Node(root={root}, left={left}, right={right})")
            }
        }
    }
}

#[cfg(feature = "visualize")]
impl Serialize for RecordTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_empty() {
            return serializer.serialize_none();
        }
        let mut record = serializer.serialize_struct("Node", 3)?;
        record.serialize_field("root", &self.root())?;
        record.serialize_field("left", &self.left())?;
        record.serialize_field("right", &self.right())?;
        record.end()
    }
}

/// Builds [`RecordTree`] nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordBuilder;

impl NodeBuilder for RecordBuilder {
    type Node = RecordTree;

    fn make_leaf(&self, value: Value) -> RecordTree {
        RecordTree::Leaf { root: value }
    }

    fn make_internal(&self, value: Value, left: RecordTree, right: RecordTree) -> RecordTree {
        RecordTree::Internal {
            root: value,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn empty(&self) -> RecordTree {
        RecordTree::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_not_a_default_leaf() {
        let empty = RecordBuilder.empty();
        let zero_leaf = RecordBuilder.make_leaf(0);
        assert_ne!(empty, zero_leaf);
        assert_eq!(empty.kind(), RecordKind::Empty);
        assert_eq!(zero_leaf.kind(), RecordKind::Leaf);
        assert_eq!(empty.root(), None);
        assert_eq!(zero_leaf.root(), Some(0));
    }

    #[test]
    fn test_internal_fields() {
        let node = RecordBuilder.make_internal(10, RecordBuilder.make_leaf(11), RecordBuilder.make_leaf(9));
        assert_eq!(node.kind(), RecordKind::Internal);
        assert_eq!(node.left().and_then(RecordTree::root), Some(11));
        assert_eq!(node.right().and_then(RecordTree::root), Some(9));
        assert_eq!(
            node.to_string(),
            "Node(root=10, left=Node(root=11, left=None, right=None), right=Node(root=9, left=None, right=None))"
        );
    }

    #[test]
    fn test_leaf_has_absent_children() {
        let leaf = RecordBuilder.make_leaf(3);
        assert!(leaf.left().is_none());
        assert!(leaf.right().is_none());
        assert!(leaf.child_pair().is_none());
    }
}
