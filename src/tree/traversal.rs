//! Breadth-first read-back of built trees
//!
//! Walks a finished tree level by level with an explicit queue and
//! recovers the per-depth values, so any shape can be compared against
//! the generator output or against another shape.

use std::collections::VecDeque;

use crate::levels::Level;
use crate::Value;

/// Read-only view of a node in any shape
pub trait NodeView {
    /// Value at this node, `None` for the empty tree
    fn node_value(&self) -> Option<Value>;

    /// Left and right subtrees, `None` for leaves and the empty tree
    fn child_pair(&self) -> Option<(&Self, &Self)>;
}

/// Collect per-depth values of `root`, left to right.
///
/// Returns no levels for the empty tree.
pub fn collect_levels<N: NodeView + ?Sized>(root: &N) -> Vec<Level> {
    let mut levels: Vec<Level> = Vec::new();
    let mut queue: VecDeque<(usize, &N)> = VecDeque::new();
    if root.node_value().is_some() {
        queue.push_back((0, root));
    }

    while let Some((depth, node)) = queue.pop_front() {
        let Some(value) = node.node_value() else {
            continue;
        };
        if levels.len() == depth {
            levels.push(Vec::new());
        }
        levels[depth].push(value);

        if let Some((left, right)) = node.child_pair() {
            queue.push_back((depth + 1, left));
            queue.push_back((depth + 1, right));
        }
    }

    levels
}

/// Number of nodes reachable from `root`
pub fn count_nodes<N: NodeView + ?Sized>(root: &N) -> usize {
    collect_levels(root).iter().map(Vec::len).sum()
}
