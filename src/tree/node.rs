//! Node-builder capability
//!
//! The assembler never sees a concrete container:
//!   Leaf:     make_leaf(value)
//!   Internal: make_internal(value, left, right)
//!   No root:  empty()

use crate::Value;

/// Constructs nodes of one output shape
///
/// Implementors decide the container; the bottom-up fold in
/// [`assemble`](super::assemble) decides the structure. Children handed to
/// [`make_internal`](Self::make_internal) are always complete subtrees of
/// equal height, owned by the new node from then on.
pub trait NodeBuilder {
    /// Node (and tree) type produced by this builder
    type Node;

    /// Node with no children.
    fn make_leaf(&self, value: Value) -> Self::Node;

    /// Node owning two already-built subtrees.
    fn make_internal(&self, value: Value, left: Self::Node, right: Self::Node) -> Self::Node;

    /// Tree with no root at all.
    fn empty(&self) -> Self::Node;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::Levels;
    use crate::tree::assemble;

    /// Counts nodes instead of storing them
    struct Counter;

    impl NodeBuilder for Counter {
        type Node = usize;

        fn make_leaf(&self, _value: Value) -> usize {
            1
        }

        fn make_internal(&self, _value: Value, left: usize, right: usize) -> usize {
            1 + left + right
        }

        fn empty(&self) -> usize {
            0
        }
    }

    #[test]
    fn test_custom_builder_drives_assembly() {
        let levels = Levels::generate(4, 0, |r| r + 1, |r| r - 1);
        assert_eq!(assemble(&levels, &Counter), 31);

        let empty = Levels::generate(-1, 0, |r| r, |r| r);
        assert_eq!(assemble(&empty, &Counter), 0);
    }
}
