//! Flattening a tree back into dotted keys.
//!
//! This is the inverse of [`unpack`](crate::unpack): every scalar leaf
//! becomes one entry keyed by the segments leading to it. List slots
//! contribute their index as the segment; holes contribute nothing.

use std::collections::BTreeMap;

use crate::{node::Node, path::KeyPath};

/// Flattens a tree into `(key, value)` pairs.
///
/// ```
/// use std::collections::BTreeMap;
///
/// let tree = keypath::unpack([("a.2", "x"), ("b.c", "y")])?;
/// let flat = keypath::flatten(&tree);
/// let expected: BTreeMap<String, String> = [("a.2", "x"), ("b.c", "y")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
/// assert_eq!(flat, expected);
/// # Ok::<(), keypath::Error>(())
/// ```
pub fn flatten(node: &Node) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    collect(node, KeyPath::new(), &mut out);
    out
}

fn collect(node: &Node, prefix: KeyPath, out: &mut BTreeMap<String, String>) {
    match node {
        Node::Empty => {}
        Node::Scalar(value) => {
            out.insert(prefix.to_string(), value.clone());
        }
        Node::List(items) => {
            for (index, item) in items.iter().enumerate() {
                collect(item, prefix.clone().push(index.to_string()), out);
            }
        }
        Node::Map(map) => {
            for (key, child) in map {
                collect(child, prefix.clone().push(key.as_str()), out);
            }
        }
    }
}
