//! Level generator
//!
//! Level h = the 2^h values at depth h, left to right.
//! Value at index i of level h produces, at level h+1:
//!   Left child:  index 2i
//!   Right child: index 2i + 1

use tracing::debug;

use crate::Value;

/// Values of a single depth, ordered left to right
pub type Level = Vec<Value>;

/// Per-depth values of a perfect binary tree
///
/// Only produced by [`Levels::generate`], so level `h` always holds exactly
/// `2^h` values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Levels {
    levels: Vec<Level>,
}

impl Levels {
    /// Compute levels `0..=height` for the given root and branch functions.
    ///
    /// Negative heights produce no levels at all.
    pub fn generate<L, R>(height: i64, root: Value, left: L, right: R) -> Self
    where
        L: Fn(Value) -> Value,
        R: Fn(Value) -> Value,
    {
        let mut levels = Vec::new();
        if height < 0 {
            debug!(height, "negative height, no levels generated");
            return Self { levels };
        }

        let mut current = vec![root];
        for _ in 0..height {
            let mut next = Vec::with_capacity(current.len() * 2);
            for &value in &current {
                next.push(left(value));
                next.push(right(value));
            }
            levels.push(current);
            current = next;
        }
        levels.push(current);

        let generated = Self { levels };
        debug!(height, nodes = generated.node_count(), "generated levels");
        generated
    }

    /// Number of depth levels (`height + 1`, or 0 when empty)
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True when the tree has no root
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Height of the tree, `None` for the empty tree
    pub fn height(&self) -> Option<usize> {
        self.levels.len().checked_sub(1)
    }

    /// Values at `depth`
    pub fn level(&self, depth: usize) -> Option<&[Value]> {
        self.levels.get(depth).map(Vec::as_slice)
    }

    /// Iterate levels from the root downward
    pub fn iter(&self) -> std::slice::Iter<'_, Level> {
        self.levels.iter()
    }

    /// Total number of values over all levels
    pub fn node_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// Unwrap into the plain level sequence
    pub fn into_inner(self) -> Vec<Level> {
        self.levels
    }
}

impl<'a> IntoIterator for &'a Levels {
    type Item = &'a Level;
    type IntoIter = std::slice::Iter<'a, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compute the level sequence of a perfect tree as plain vectors.
///
/// `H + 1` levels for `H >= 0`, none for `H < 0`.
pub fn compute_levels<L, R>(height: i64, root: Value, left: L, right: R) -> Vec<Level>
where
    L: Fn(Value) -> Value,
    R: Fn(Value) -> Value,
{
    Levels::generate(height, root, left, right).into_inner()
}

/// Number of nodes in a perfect tree of `height`: `2^(H+1) - 1`
///
/// `None` when the count does not fit in `usize`.
pub fn perfect_node_count(height: i64) -> Option<usize> {
    if height < 0 {
        return Some(0);
    }
    let exponent = u32::try_from(height).ok()?.checked_add(1)?;
    2usize.checked_pow(exponent).map(|n| n - 1)
}
