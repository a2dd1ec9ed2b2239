//! Output shapes
//!
//! Four containers for the same abstract tree:
//!   dict         -> DictTree     {"v": [left, right]}
//!   list         -> ListTree     [v, left, right]
//!   namedtuple   -> RecordTree   Node(root=v, left=.., right=..)
//!   ordered_dict -> OrderedTree  insertion-ordered {"v": [left, right]}
//!
//! A [`Shape`] is picked once per call and dispatches to its builder.

mod dict;
mod list;
mod ordered;
mod record;

pub use dict::{DictBuilder, DictTree};
pub use list::{ListBuilder, ListTree};
pub use ordered::{OrderedBuilder, OrderedTree};
pub use record::{RecordBuilder, RecordKind, RecordTree};

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "visualize")]
use serde::Serialize;

use crate::levels::{Level, Levels};
use crate::tree::{assemble, collect_levels, count_nodes};
use crate::TreeError;

/// Output container shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Mapping from stringified value to `[left, right]`
    #[default]
    Dict,
    /// `[value, left, right]` triples
    List,
    /// `root/left/right` records
    Record,
    /// Insertion-ordered mapping, otherwise like [`Shape::Dict`]
    OrderedDict,
}

impl Shape {
    /// Every shape, in canonical order
    pub const ALL: [Shape; 4] = [Shape::Dict, Shape::List, Shape::Record, Shape::OrderedDict];

    /// Name accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Shape::Dict => "dict",
            Shape::List => "list",
            Shape::Record => "namedtuple",
            Shape::OrderedDict => "ordered_dict",
        }
    }

    /// Comma-separated list of accepted names
    pub fn valid_names() -> String {
        Self::ALL.map(Shape::name).join(", ")
    }

    /// Assemble `levels` into this shape.
    pub fn assemble(self, levels: &Levels) -> Tree {
        match self {
            Shape::Dict => Tree::Dict(assemble(levels, &DictBuilder)),
            Shape::List => Tree::List(assemble(levels, &ListBuilder)),
            Shape::Record => Tree::Record(assemble(levels, &RecordBuilder)),
            Shape::OrderedDict => Tree::OrderedDict(assemble(levels, &OrderedBuilder)),
        }
    }

    /// Empty tree of this shape
    pub fn empty(self) -> Tree {
        self.assemble(&Levels::default())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = TreeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.name() == name)
            .ok_or_else(|| TreeError::invalid_shape(name))
    }
}

/// A generated tree in whichever shape was requested
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(Serialize), serde(untagged))]
pub enum Tree {
    /// Dict-of-lists tree
    Dict(DictTree),
    /// Positional list tree
    List(ListTree),
    /// Record tree
    Record(RecordTree),
    /// Order-preserving mapping tree
    OrderedDict(OrderedTree),
}

impl Tree {
    /// Shape this tree was built in
    pub fn shape(&self) -> Shape {
        match self {
            Tree::Dict(_) => Shape::Dict,
            Tree::List(_) => Shape::List,
            Tree::Record(_) => Shape::Record,
            Tree::OrderedDict(_) => Shape::OrderedDict,
        }
    }

    /// Per-depth values, read back breadth-first
    pub fn to_levels(&self) -> Vec<Level> {
        match self {
            Tree::Dict(tree) => collect_levels(tree),
            Tree::List(tree) => collect_levels(tree),
            Tree::Record(tree) => collect_levels(tree),
            Tree::OrderedDict(tree) => collect_levels(tree),
        }
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        match self {
            Tree::Dict(tree) => count_nodes(tree),
            Tree::List(tree) => count_nodes(tree),
            Tree::Record(tree) => count_nodes(tree),
            Tree::OrderedDict(tree) => count_nodes(tree),
        }
    }

    /// Height of the tree, `None` when it has no root
    pub fn height(&self) -> Option<usize> {
        self.to_levels().len().checked_sub(1)
    }

    /// True when the tree has no root
    pub fn is_empty(&self) -> bool {
        match self {
            Tree::Dict(tree) => tree.is_empty(),
            Tree::List(tree) => tree.is_empty(),
            Tree::Record(tree) => tree.is_empty(),
            Tree::OrderedDict(tree) => tree.is_empty(),
        }
    }

    /// Dict-of-lists view, if built in that shape
    pub fn as_dict(&self) -> Option<&DictTree> {
        match self {
            Tree::Dict(tree) => Some(tree),
            _ => None,
        }
    }

    /// Positional list view, if built in that shape
    pub fn as_list(&self) -> Option<&ListTree> {
        match self {
            Tree::List(tree) => Some(tree),
            _ => None,
        }
    }

    /// Record view, if built in that shape
    pub fn as_record(&self) -> Option<&RecordTree> {
        match self {
            Tree::Record(tree) => Some(tree),
            _ => None,
        }
    }

    /// Ordered mapping view, if built in that shape
    pub fn as_ordered(&self) -> Option<&OrderedTree> {
        match self {
            Tree::OrderedDict(tree) => Some(tree),
            _ => None,
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Dict(tree) => fmt::Display::fmt(tree, f),
            Tree::List(tree) => fmt::Display::fmt(tree, f),
            Tree::Record(tree) => fmt::Display::fmt(tree, f),
            Tree::OrderedDict(tree) => fmt::Display::fmt(tree, f),
        }
    }
}
