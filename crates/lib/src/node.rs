//! The tree produced by unpacking.
//!
//! [`Node`] represents every shape a value in an unpacked tree can take.
//! Scalars are the leaves; lists and maps are the branches.
//!
//! # Node Kinds
//!
//! - [`Node::Empty`] - An unset slot: the initial root, and every hole in a list
//! - [`Node::Scalar`] - A string leaf
//! - [`Node::List`] - An index-addressed sequence; unset slots are `Empty`
//! - [`Node::Map`] - A mapping from segment to node
//!
//! # JSON
//!
//! Nodes serialize untagged: `Empty` is `null`, scalars are strings, lists
//! are arrays (holes are `null`) and maps are objects.
//!
//! ```
//! # use keypath::Node;
//! let tree = keypath::unpack([("f.2", "5"), ("f.5", "6")])?;
//! assert_eq!(tree.to_string(), r#"{"f":[null,null,"5",null,null,"6"]}"#);
//! # Ok::<(), keypath::Error>(())
//! ```

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::path::{KeyPath, Segment};

/// A node in an unpacked tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Unset placeholder, or a hole in a list
    #[default]
    Empty,
    /// String leaf
    Scalar(String),
    /// Index-addressed sequence with possible holes
    List(Vec<Node>),
    /// Segment-addressed mapping
    Map(BTreeMap<String, Node>),
}

impl Node {
    /// Returns true if this node is unset (or a list hole)
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Returns true if this node is a string leaf
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Returns true if this node is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// Returns true if this node is a map
    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    /// Returns true if this node can contain other nodes
    pub fn is_container(&self) -> bool {
        matches!(self, Node::List(_) | Node::Map(_))
    }

    /// Returns the kind name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Empty => "empty",
            Node::Scalar(_) => "scalar",
            Node::List(_) => "list",
            Node::Map(_) => "map",
        }
    }

    /// Attempts to view this node as a string leaf
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to view this node as a list
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to view this node as a map
    pub fn as_map(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a direct child.
    ///
    /// Maps are addressed by key; lists by a numeric segment. Holes,
    /// out-of-range indices and non-numeric list segments all yield `None`,
    /// as does any lookup on a scalar or an empty node.
    pub fn get(&self, segment: &str) -> Option<&Node> {
        let child = match self {
            Node::Map(map) => map.get(segment),
            Node::List(items) => Segment::new(segment).index().and_then(|i| items.get(i)),
            Node::Scalar(_) | Node::Empty => None,
        };
        child.filter(|node| !node.is_empty())
    }

    /// Looks up a descendant by path.
    ///
    /// The empty [`KeyPath`] returns this node.
    ///
    /// ```
    /// # use keypath::{KeyPath, Node};
    /// let tree = keypath::unpack([("user.tags.1", "admin")])?;
    /// assert_eq!(tree.get_path("user.tags.1").and_then(Node::as_scalar), Some("admin"));
    /// assert!(tree.get_path("user.tags.0").is_none());
    /// assert_eq!(tree.get_path(&KeyPath::new()), Some(&tree));
    /// # Ok::<(), keypath::Error>(())
    /// ```
    pub fn get_path(&self, path: impl Into<KeyPath>) -> Option<&Node> {
        let path = path.into();
        path.segments()
            .try_fold(self, |node, segment| node.get(segment.as_str()))
    }

    /// Counts the scalar leaves under this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Empty => 0,
            Node::Scalar(_) => 1,
            Node::List(items) => items.iter().map(Node::leaf_count).sum(),
            Node::Map(map) => map.values().map(Node::leaf_count).sum(),
        }
    }

    /// Serializes this node to a JSON value.
    pub fn to_json(&self) -> crate::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Deserializes a node from a JSON value.
    ///
    /// Only `null`, strings, arrays and objects are accepted.
    pub fn from_json(value: serde_json::Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::List(items)
    }
}

impl From<BTreeMap<String, Node>> for Node {
    fn from(map: BTreeMap<String, Node>) -> Self {
        Node::Map(map)
    }
}

impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        self.as_scalar() == Some(other)
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self.as_scalar() == Some(*other)
    }
}

impl PartialEq<Node> for &str {
    fn eq(&self, other: &Node) -> bool {
        other.as_scalar() == Some(*self)
    }
}
