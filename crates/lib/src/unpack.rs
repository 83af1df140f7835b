//! Unpacking flattened keys into a nested tree.
//!
//! Each key is split into segments and walked from the root of a single
//! shared tree. At every step the segment kind decides how the current
//! node is addressed:
//!
//! - a numeric segment against an empty node or a list addresses a list slot,
//!   growing the list with holes when the index is past the end;
//! - any other combination addresses a map entry. A missing entry is created
//!   as a list when the *following* segment is numeric, otherwise as a map.
//!
//! The final segment receives the value as a scalar.
//!
//! # Ordering
//!
//! Keys are processed in descending byte-wise order. When siblings disagree
//! about their parent's kind, the one processed first wins and the others
//! must conform. For `{"f.5", "f.g"}` the named `"f.g"` is processed first,
//! so `f` becomes a map and `"5"` is then used as a map key.
//!
//! Every prefix of a key sorts below the key itself, so extensions are always
//! processed before their prefixes: a container is materialized first and the
//! later scalar assignment to the same path is reported as a conflict.

use std::collections::{BTreeMap, btree_map::Entry};

use tracing::{debug, trace};

use crate::{
    Result,
    errors::UnpackError,
    node::Node,
    path::{KeyPath, Segment},
};

/// Unpacks flattened `(key, value)` pairs into a nested [`Node`] tree.
///
/// Pairs are collected into a mapping first, so a key given twice keeps its
/// last value. The empty input produces [`Node::Empty`].
///
/// # Errors
///
/// Returns [`UnpackError::TypeConflict`] (wrapped in [`crate::Error`]) when a
/// key addresses a path inconsistently with an earlier key, and
/// [`UnpackError::IndexTooLarge`] when a numeric segment asks for a list that
/// cannot be allocated. No partial tree is returned.
///
/// # Examples
///
/// ```
/// use keypath::{Node, unpack};
///
/// let tree = unpack([("a.1", "x"), ("b.c", "y")])?;
/// assert_eq!(tree.get_path("a.1").and_then(Node::as_scalar), Some("x"));
/// assert!(tree.get_path("a.0").is_none());
/// assert_eq!(tree.get_path("b.c").and_then(Node::as_scalar), Some("y"));
///
/// let err = unpack([("a", "1"), ("a.b", "2")]).unwrap_err();
/// assert_eq!(err.to_string(), "type mismatch");
/// # Ok::<(), keypath::Error>(())
/// ```
pub fn unpack<I, K, V>(input: I) -> Result<Node>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let pairs: BTreeMap<String, String> = input
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect();

    let mut root = Node::Empty;
    for (key, value) in pairs.iter().rev() {
        insert(&mut root, key, value)?;
    }

    debug!(keys = pairs.len(), kind = root.type_name(), "Unpacked keys");
    Ok(root)
}

/// Walks one key from the root and writes its value.
fn insert(root: &mut Node, key: &str, value: &str) -> std::result::Result<(), UnpackError> {
    trace!(key, "Inserting key");

    let path = KeyPath::parse(key);
    let mut cursor = root;
    for (position, segment) in path.segments().enumerate() {
        let next = path.segment(position + 1);
        cursor = match segment.index() {
            Some(index) if !cursor.is_map() => list_slot(cursor, index, key)?,
            _ => map_slot(cursor, segment, next, key)?,
        };
    }

    assign(cursor, value, key)
}

/// Grows `items` with holes until slot `index` exists.
///
/// The allocation is fallible so an oversized index is an error rather
/// than an abort.
fn ensure_slot(
    items: &mut Vec<Node>,
    index: usize,
    key: &str,
) -> std::result::Result<(), UnpackError> {
    let len = index
        .checked_add(1)
        .ok_or_else(|| UnpackError::index_too_large(index, key))?;
    if items.len() < len {
        items
            .try_reserve_exact(len - items.len())
            .map_err(|_| UnpackError::index_too_large(index, key))?;
        items.resize(len, Node::Empty);
    }
    Ok(())
}

/// Addresses slot `index` of a list, materializing or growing it as needed.
fn list_slot<'a>(
    node: &'a mut Node,
    index: usize,
    key: &str,
) -> std::result::Result<&'a mut Node, UnpackError> {
    if node.is_empty() {
        *node = Node::List(Vec::new());
    }

    let Node::List(items) = node else {
        return Err(UnpackError::type_mismatch(key));
    };

    if items.len() <= index && !items.is_empty() {
        debug!(key, from = items.len(), to = index.saturating_add(1), "Growing list");
    }
    ensure_slot(items, index, key)?;

    Ok(&mut items[index])
}

/// Addresses a map entry, materializing the map as needed.
///
/// A missing entry on the path is created with the kind the next segment
/// requires. For the last segment a missing entry is left `Empty` for the
/// value to fill.
fn map_slot<'a>(
    node: &'a mut Node,
    segment: Segment<'_>,
    next: Option<Segment<'_>>,
    key: &str,
) -> std::result::Result<&'a mut Node, UnpackError> {
    if node.is_empty() {
        *node = Node::Map(BTreeMap::new());
    }

    let map = match node {
        Node::Map(map) => map,
        Node::List(_) => return Err(UnpackError::string_key_in_list(segment.as_str(), key)),
        Node::Scalar(_) | Node::Empty => return Err(UnpackError::type_mismatch(key)),
    };

    match map.entry(segment.as_str().to_owned()) {
        Entry::Occupied(entry) => Ok(entry.into_mut()),
        Entry::Vacant(entry) => {
            let child = match next.map(|next| next.index()) {
                Some(Some(index)) => {
                    let mut items = Vec::new();
                    ensure_slot(&mut items, index, key)?;
                    Node::List(items)
                }
                Some(None) => Node::Map(BTreeMap::new()),
                None => Node::Empty,
            };
            Ok(entry.insert(child))
        }
    }
}

/// Writes the value into the final slot; containers cannot be overwritten.
fn assign(slot: &mut Node, value: &str, key: &str) -> std::result::Result<(), UnpackError> {
    match slot {
        Node::Empty => {}
        Node::Scalar(previous) => trace!(key, previous = %previous, "Overwriting scalar"),
        Node::List(_) | Node::Map(_) => return Err(UnpackError::type_mismatch(key)),
    }

    *slot = Node::Scalar(value.to_owned());
    Ok(())
}
