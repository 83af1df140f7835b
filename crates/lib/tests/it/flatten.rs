//! Flatten integration tests

use keypath::{Node, flatten};

use crate::helpers::*;

#[test]
fn test_flatten_nested_tree() {
    let tree = map(vec![
        ("a", scalar("1")),
        (
            "b",
            map(vec![("c", list(&[None, Some("x"), None, Some("y")]))]),
        ),
    ]);

    assert_eq!(
        flatten(&tree),
        flat_map(&[("a", "1"), ("b.c.1", "x"), ("b.c.3", "y")])
    );
}

#[test]
fn test_flatten_root_list() {
    let tree = list_of(vec![
        Node::Empty,
        map(vec![("k", scalar("v"))]),
        scalar("z"),
    ]);
    assert_eq!(flatten(&tree), flat_map(&[("1.k", "v"), ("2", "z")]));
}

#[test]
fn test_flatten_numeric_map_keys_stay_keys() {
    let tree = unpack_ok(&[("f.5", "7"), ("f.g", "8")]);
    assert_eq!(flatten(&tree), flat_map(&[("f.5", "7"), ("f.g", "8")]));
}

#[test]
fn test_flatten_normalizes_aliased_indices() {
    let tree = unpack_ok(&[("a.007", "x")]);
    assert_eq!(flatten(&tree), flat_map(&[("a.7", "x")]));
}

#[test]
fn test_flatten_empty_containers_vanish() {
    let tree = map(vec![("gone", list_of(vec![Node::Empty, Node::Empty]))]);
    assert!(flatten(&tree).is_empty());
}
