//! # Non-recursive perfect binary tree generation
//!
//! Builds a perfect binary tree of a fixed height from a root value and two
//! branch functions, without recursive descent.
//!
//! ## Core Algorithm
//!
//! 1. **Level generation**: level `h` holds the `2^h` values at depth `h`,
//!    computed left to right from level `h - 1`
//! 2. **Bottom-up assembly**: fold levels from the deepest upward, pairing
//!    subtrees `2i` and `2i + 1` under the `i`-th value of the level above
//! 3. **Shape adapters**: the fold only talks to a [`NodeBuilder`], so the
//!    same pass produces any of the four container shapes
//!
//! Result: O(2^H) time and space, no call stack growth with height.
//!
//! ## Usage Example
//!
//! ```
//! use bintree_gen::{gen_bin_tree_named, TreeConfig, Shape};
//!
//! let tree = gen_bin_tree_named(1, 13, |r| r + 1, |r| r - 1, "dict")?;
//! assert_eq!(tree.to_string(), r#"{"13": [{"14": []}, {"12": []}]}"#);
//!
//! let list = TreeConfig::default().with_height(0).with_shape(Shape::List).build_default();
//! assert_eq!(list.to_string(), "[13, [], []]");
//! # Ok::<(), bintree_gen::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod levels; // Per-depth value generation
pub mod tree;   // Bottom-up assembly and the node-builder capability
pub mod shape;  // Container shapes and shape selection

// Re-exports for convenience
pub use levels::{compute_levels, Level, Levels};
pub use shape::{DictTree, ListTree, OrderedTree, RecordTree, Shape, Tree};
pub use tree::{assemble, NodeBuilder, NodeView};

use thiserror::Error;

/// Payload of a single node
pub type Value = i64;

/// Default height of a generated tree
pub const DEFAULT_HEIGHT: i64 = 3;

/// Default root value of a generated tree
pub const DEFAULT_ROOT: Value = 13;

/// Default left branch: `r + 1`
pub fn default_left(r: Value) -> Value {
    r.wrapping_add(1)
}

/// Default right branch: `r - 1`
pub fn default_right(r: Value) -> Value {
    r.wrapping_sub(1)
}

/// Errors surfaced by tree generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Requested output shape is not one of the known names
    #[error("unknown shape '{name}', expected one of: {valid}")]
    InvalidShape {
        /// Name that was requested
        name: String,
        /// Comma-separated list of accepted names
        valid: String,
    },
}

impl TreeError {
    /// Helper for constructing an invalid-shape error for `name`.
    pub fn invalid_shape(name: impl Into<String>) -> Self {
        TreeError::InvalidShape {
            name: name.into(),
            valid: Shape::valid_names(),
        }
    }
}

/// Configuration parameters for tree generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Number of edges from root to the deepest leaf (negative = empty tree)
    pub height: i64,

    /// Value stored at the root
    pub root: Value,

    /// Output container shape
    pub shape: Shape,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            root: DEFAULT_ROOT,
            shape: Shape::Dict,
        }
    }
}

impl TreeConfig {
    /// Set the tree height.
    pub fn with_height(mut self, height: i64) -> Self {
        self.height = height;
        self
    }

    /// Set the root value.
    pub fn with_root(mut self, root: Value) -> Self {
        self.root = root;
        self
    }

    /// Set the output shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Select the output shape by name.
    pub fn with_shape_name(self, name: &str) -> Result<Self, TreeError> {
        Ok(self.with_shape(name.parse()?))
    }

    /// Build a tree with the supplied branch functions.
    pub fn build<L, R>(&self, left: L, right: R) -> Tree
    where
        L: Fn(Value) -> Value,
        R: Fn(Value) -> Value,
    {
        gen_bin_tree(self.height, self.root, left, right, self.shape)
    }

    /// Build a tree with the default branches `r + 1` and `r - 1`.
    pub fn build_default(&self) -> Tree {
        self.build(default_left, default_right)
    }
}

/// Generate a perfect binary tree in the requested shape.
///
/// Returns the shape's empty value when `height < 0`. Panics raised by the
/// branch functions propagate unchanged.
pub fn gen_bin_tree<L, R>(height: i64, root: Value, left: L, right: R, shape: Shape) -> Tree
where
    L: Fn(Value) -> Value,
    R: Fn(Value) -> Value,
{
    let levels = Levels::generate(height, root, left, right);
    shape.assemble(&levels)
}

/// Generate a tree, selecting the shape by name.
///
/// The name is validated before any level is computed, so an unknown shape
/// never invokes the branch functions.
pub fn gen_bin_tree_named<L, R>(
    height: i64,
    root: Value,
    left: L,
    right: R,
    shape: &str,
) -> Result<Tree, TreeError>
where
    L: Fn(Value) -> Value,
    R: Fn(Value) -> Value,
{
    let shape: Shape = shape.parse()?;
    Ok(gen_bin_tree(height, root, left, right, shape))
}

/// Generate a tree into a caller-supplied node representation.
pub fn build_with<B, L, R>(height: i64, root: Value, left: L, right: R, builder: &B) -> B::Node
where
    B: NodeBuilder,
    L: Fn(Value) -> Value,
    R: Fn(Value) -> Value,
{
    let levels = Levels::generate(height, root, left, right);
    assemble(&levels, builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TreeConfig::default();
        assert_eq!(config.height, 3);
        assert_eq!(config.root, 13);
        assert_eq!(config.shape, Shape::Dict);
        assert_eq!(config.build_default().node_count(), 15);
    }

    #[test]
    fn test_invalid_shape_message() {
        let err = gen_bin_tree_named(2, 1, default_left, default_right, "bogus").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'bogus'"), "message should name the shape: {msg}");
        for name in ["dict", "list", "namedtuple", "ordered_dict"] {
            assert!(msg.contains(name), "message should list {name}: {msg}");
        }
    }

    #[test]
    fn test_invalid_shape_skips_branches() {
        let result = gen_bin_tree_named(
            3,
            1,
            |_| panic!("left branch must not run"),
            |_| panic!("right branch must not run"),
            "tuple",
        );
        assert!(matches!(result, Err(TreeError::InvalidShape { .. })));
    }

    #[test]
    fn test_build_with_typed_builder() {
        let tree = build_with(1, 10, default_left, default_right, &shape::ListBuilder);
        assert_eq!(tree.to_string(), "[10, [11, [], []], [9, [], []]]");
        assert_eq!(Tree::List(tree), gen_bin_tree(1, 10, default_left, default_right, Shape::List));
    }

    #[test]
    fn test_default_branches_wrap() {
        assert_eq!(default_left(Value::MAX), Value::MIN);
        assert_eq!(default_right(Value::MIN), Value::MAX);
    }
}
