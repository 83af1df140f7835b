//! Nesting shapes produced by unpack
//!
//! Each test maps a small flat input to the exact tree it must produce.

use std::collections::HashMap;

use keypath::{Node, unpack};

use crate::helpers::*;

// ===== MAPS =====

#[test]
fn test_single_key_map() {
    let tree = unpack_ok(&[("a", "1")]);
    assert_eq!(tree, map(vec![("a", scalar("1"))]));
}

#[test]
fn test_map_with_nested_map() {
    let tree = unpack_ok(&[("a", "1"), ("b.c", "2")]);
    assert_eq!(
        tree,
        map(vec![("a", scalar("1")), ("b", map(vec![("c", scalar("2"))]))])
    );
}

#[test]
fn test_shared_prefix_merges() {
    let tree = unpack_ok(&[("a", "1"), ("b.c.d", "2"), ("b.c.e", "3")]);
    assert_eq!(
        tree,
        map(vec![
            ("a", scalar("1")),
            (
                "b",
                map(vec![(
                    "c",
                    map(vec![("d", scalar("2")), ("e", scalar("3"))])
                )])
            ),
        ])
    );
}

// ===== LISTS =====

#[test]
fn test_single_numeric_key_list() {
    let tree = unpack_ok(&[("1", "1")]);
    assert_eq!(tree, list(&[None, Some("1")]));
}

#[test]
fn test_list_of_lists() {
    let tree = unpack_ok(&[("1.2", "1")]);
    assert_eq!(
        tree,
        list_of(vec![Node::Empty, list(&[None, None, Some("1")])])
    );
}

#[test]
fn test_list_of_lists_of_maps() {
    let tree = unpack_ok(&[("1.2.test", "1")]);
    assert_eq!(
        tree,
        list_of(vec![
            Node::Empty,
            list_of(vec![
                Node::Empty,
                Node::Empty,
                map(vec![("test", scalar("1"))]),
            ]),
        ])
    );
}

#[test]
fn test_map_holding_list() {
    let tree = unpack_ok(&[("a.1", "1")]);
    assert_eq!(tree, map(vec![("a", list(&[None, Some("1")]))]));
}

#[test]
fn test_map_map_list() {
    let tree = unpack_ok(&[("a.b.1", "1")]);
    assert_eq!(
        tree,
        map(vec![("a", map(vec![("b", list(&[None, Some("1")]))]))])
    );
}

// ===== MIXED =====

#[test]
fn test_arbitrary_nesting() {
    let tree = unpack_ok(&[
        ("0.a.0", "1"),
        ("0.a.1", "2"),
        ("0.a.2", "3"),
        ("0.b.c", "4"),
        ("a.b.c", "5"),
    ]);

    // The named root key "a" is processed first, so the root is a map and
    // "0" is a map key rather than a list index.
    assert_eq!(
        tree,
        map(vec![
            (
                "0",
                map(vec![
                    ("a", list(&[Some("1"), Some("2"), Some("3")])),
                    ("b", map(vec![("c", scalar("4"))])),
                ])
            ),
            (
                "a",
                map(vec![("b", map(vec![("c", scalar("5"))]))])
            ),
        ])
    );
}

#[test]
fn test_mixed_siblings_at_every_level() {
    let tree = unpack_ok(&[
        ("a", "1"),
        ("0", "2"),
        ("b.c.d", "4"),
        ("b.c.e", "5"),
        ("f.2", "6"),
        ("f.5", "7"),
        ("f.g", "8"),
    ]);

    assert_eq!(
        tree,
        map(vec![
            ("0", scalar("2")),
            ("a", scalar("1")),
            (
                "b",
                map(vec![(
                    "c",
                    map(vec![("d", scalar("4")), ("e", scalar("5"))])
                )])
            ),
            (
                "f",
                map(vec![
                    ("2", scalar("6")),
                    ("5", scalar("7")),
                    ("g", scalar("8")),
                ])
            ),
        ])
    );
}

// ===== INPUT SHAPES =====

#[test]
fn test_empty_input_is_empty_node() {
    let tree = unpack(HashMap::<String, String>::new()).unwrap();
    assert!(tree.is_empty());
}

#[test]
fn test_accepts_hash_map_by_reference() {
    let input: HashMap<String, String> = pairs(&[("x.0", "a"), ("x.1", "b")])
        .into_iter()
        .collect();
    let tree = unpack(&input).unwrap();
    assert_eq!(tree, map(vec![("x", list(&[Some("a"), Some("b")]))]));
}

#[test]
fn test_duplicate_key_keeps_last_value() {
    let tree = unpack([("a", "first"), ("a", "second")]).unwrap();
    assert_eq!(tree, map(vec![("a", scalar("second"))]));
}

#[test]
fn test_empty_segments_are_named() {
    let tree = unpack_ok(&[("a..b", "1"), ("", "2")]);
    assert_eq!(
        tree,
        map(vec![
            ("", scalar("2")),
            ("a", map(vec![("", map(vec![("b", scalar("1"))]))])),
        ])
    );
}

#[test]
fn test_leading_zero_segment_is_numeric() {
    let tree = unpack_ok(&[("a.02", "x")]);
    assert_eq!(tree, map(vec![("a", list(&[None, None, Some("x")]))]));
}
