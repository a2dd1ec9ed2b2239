#![cfg(feature = "visualize")]

use bintree_gen::{gen_bin_tree, Shape};
use serde_json::json;

fn to_json(height: i64, root: i64, shape: Shape) -> serde_json::Value {
    let tree = gen_bin_tree(height, root, |r| r + 1, |r| r - 1, shape);
    serde_json::to_value(&tree).expect("tree should serialize")
}

#[test]
fn dict_serializes_as_nested_objects() {
    assert_eq!(
        to_json(1, 13, Shape::Dict),
        json!({"13": [{"14": []}, {"12": []}]})
    );
    assert_eq!(to_json(-1, 13, Shape::Dict), json!({}));
}

#[test]
fn ordered_serializes_like_dict() {
    assert_eq!(
        to_json(2, 10, Shape::OrderedDict),
        to_json(2, 10, Shape::Dict)
    );
}

#[test]
fn list_serializes_as_triples() {
    assert_eq!(
        to_json(1, 10, Shape::List),
        json!([10, [11, [], []], [9, [], []]])
    );
    assert_eq!(to_json(-1, 10, Shape::List), json!([]));
}

#[test]
fn record_serializes_with_null_children() {
    assert_eq!(
        to_json(1, 10, Shape::Record),
        json!({
            "root": 10,
            "left": {"root": 11, "left": null, "right": null},
            "right": {"root": 9, "left": null, "right": null},
        })
    );
    assert_eq!(to_json(-1, 10, Shape::Record), json!(null));
}
