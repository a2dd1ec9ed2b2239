//! Shared helpers for integration tests

#![allow(dead_code)]

use bintree_gen::{DictTree, Value};

/// Default left branch used throughout the scenarios
pub fn inc(r: Value) -> Value {
    r + 1
}

/// Default right branch used throughout the scenarios
pub fn dec(r: Value) -> Value {
    r - 1
}

/// Keys of the children of a dict node, left to right
pub fn child_keys(node: &DictTree) -> Vec<String> {
    node.children()
        .iter()
        .filter_map(|child| child.key().map(str::to_string))
        .collect()
}
