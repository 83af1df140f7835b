//! Structural conflict tests
//!
//! A conflicting key aborts the whole unpack call with a type conflict.

use keypath::{ConflictReason, Error, unpack};

use crate::helpers::*;

fn conflict_path(err: &Error) -> &str {
    match err {
        Error::Unpack(unpack_err) => unpack_err.path(),
        other => panic!("expected an unpack error, got {other:?}"),
    }
}

#[test]
fn test_scalar_list_slot_then_child_errors() {
    let err = unpack_err(&[("0", "1"), ("0.b", "2")]);
    assert!(err.is_type_mismatch());
    assert_eq!(err.to_string(), "type mismatch");
    // "0.b" builds the container first; "0" is the key that conflicts
    assert_eq!(conflict_path(&err), "0");
}

#[test]
fn test_scalar_map_entry_then_child_errors() {
    let err = unpack_err(&[("a", "1"), ("a.b", "2")]);
    assert!(err.is_type_mismatch());
    assert_eq!(err.to_string(), "type mismatch");
    assert_eq!(conflict_path(&err), "a");
}

#[test]
fn test_deep_container_assigned_scalar_errors() {
    let err = unpack_err(&[("a.b.c", "1"), ("a.b", "2")]);
    assert!(err.is_type_mismatch());
    assert_eq!(conflict_path(&err), "a.b");
}

#[test]
fn test_list_assigned_scalar_errors() {
    let err = unpack_err(&[("x.0", "1"), ("x", "2")]);
    assert!(err.is_type_mismatch());
}

#[test]
fn test_descending_through_scalar_errors() {
    // "a.1" is processed first and leaves a scalar at slot 1
    let err = unpack_err(&[("a.1", "x"), ("a.01.b", "y")]);
    assert!(err.is_type_mismatch());
    assert_eq!(conflict_path(&err), "a.01.b");
}

#[test]
fn test_named_segment_in_list_errors() {
    // '-' sorts below the digits, so "k.7" materializes the list first
    let err = unpack_err(&[("k.7", "1"), ("k.-x", "2")]);
    assert!(err.is_string_key_in_list());
    assert_eq!(err.to_string(), "string key -x in list");

    match &err {
        Error::Unpack(unpack_err) => assert_eq!(
            unpack_err.reason(),
            Some(&ConflictReason::StringKeyInList {
                segment: "-x".to_string()
            })
        ),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_negative_segment_in_list_errors() {
    let err = unpack_err(&[("f.5", "1"), ("f.-1", "2")]);
    assert!(err.is_string_key_in_list());
    assert_eq!(err.to_string(), "string key -1 in list");
}

#[test]
fn test_named_segment_in_root_list_errors() {
    let err = unpack_err(&[("5", "1"), ("!", "2")]);
    assert!(err.is_string_key_in_list());
    assert_eq!(err.to_string(), "string key ! in list");
}

#[test]
fn test_conflict_returns_no_tree() {
    let result = unpack(pairs(&[("a", "1"), ("a.b", "2"), ("c", "3")]));
    assert!(result.is_err());
    assert!(result.unwrap_err().is_conflict());
}

#[test]
fn test_error_module() {
    let err = unpack_err(&[("a", "1"), ("a.b", "2")]);
    assert_eq!(err.module(), "unpack");
    assert!(!err.is_serialization_error());
}
