//! Bottom-up tree assembly
//!
//! Folds the levels from the deepest upward:
//!   Depth H:     every value becomes a leaf
//!   Depth h < H: value i takes subtrees 2i and 2i+1 of depth h+1
//!
//! Only one buffer of built subtrees is alive at a time; each pass moves
//! the children into their parents. No recursion, no explicit stack.

mod node;
mod traversal;

pub use node::NodeBuilder;
pub use traversal::{collect_levels, count_nodes, NodeView};

use tracing::{debug, trace};

use crate::levels::Levels;

/// Assemble the tree described by `levels` using `builder`.
///
/// Returns `builder.empty()` when there are no levels.
pub fn assemble<B: NodeBuilder>(levels: &Levels, builder: &B) -> B::Node {
    let mut below: Vec<B::Node> = Vec::new();

    for (back, level) in levels.iter().rev().enumerate() {
        if back == 0 {
            below = level.iter().map(|&value| builder.make_leaf(value)).collect();
            trace!(width = below.len(), "built leaf level");
            continue;
        }

        debug_assert_eq!(below.len(), level.len() * 2, "level width must halve");
        let mut children = below.into_iter();
        let mut built = Vec::with_capacity(level.len());
        for &value in level {
            match (children.next(), children.next()) {
                (Some(left), Some(right)) => {
                    built.push(builder.make_internal(value, left, right));
                }
                _ => unreachable!("level {back} from the bottom has too few children"),
            }
        }
        trace!(back, width = built.len(), "folded level");
        below = built;
    }

    debug!(depths = levels.len(), "assembled tree");
    below.into_iter().next().unwrap_or_else(|| builder.empty())
}
