//!
//! keypath: unpack flat, dot-delimited keys into a nested tree.
//!
//! Form bodies and query strings often encode nested data as flat pairs such
//! as `user.name=Alice` and `user.tags.0=admin`. This library rebuilds the
//! nested structure those pairs describe.
//!
//! ## Core Concepts
//!
//! * **Key paths (`path::KeyPath`)**: A flattened key split on `.` into segments. Numeric
//!   segments address list slots; all other segments address map entries.
//! * **Nodes (`node::Node`)**: The resulting tree: scalar strings, lists with possible holes,
//!   and maps.
//! * **Unpacking (`unpack::unpack`)**: Folds every pair into one tree in a deterministic order,
//!   inferring list or map kinds per segment and rejecting structurally inconsistent keys.
//! * **Flattening (`flatten::flatten`)**: The inverse, producing one dotted key per scalar.
//!
//! ```
//! use keypath::{Node, unpack};
//!
//! let tree = unpack([
//!     ("user.name", "Alice"),
//!     ("user.tags.0", "admin"),
//!     ("user.tags.1", "ops"),
//! ])?;
//!
//! assert_eq!(tree.get_path("user.name").and_then(Node::as_scalar), Some("Alice"));
//! assert_eq!(tree.get_path("user.tags").and_then(Node::as_list).map(|l| l.len()), Some(2));
//! # Ok::<(), keypath::Error>(())
//! ```

pub mod constants;
pub mod errors;
pub mod flatten;
pub mod node;
pub mod path;
pub mod unpack;

pub use errors::{ConflictReason, UnpackError};
pub use flatten::flatten;
pub use node::Node;
pub use path::{KeyPath, Segment};
pub use unpack::unpack;

/// Result type used throughout the keypath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the keypath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured unpack errors from the unpack module
    #[error(transparent)]
    Unpack(UnpackError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Unpack(_) => "unpack",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a structural conflict between keys.
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Unpack(unpack_err) => unpack_err.is_type_conflict(),
            _ => false,
        }
    }

    /// Check if a scalar and a container collided at the same path.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Unpack(unpack_err) => unpack_err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if a named segment addressed a list.
    pub fn is_string_key_in_list(&self) -> bool {
        match self {
            Error::Unpack(unpack_err) => unpack_err.is_string_key_in_list(),
            _ => false,
        }
    }

    /// Check if a list index was too large to allocate.
    pub fn is_index_too_large(&self) -> bool {
        match self {
            Error::Unpack(unpack_err) => unpack_err.is_index_too_large(),
            _ => false,
        }
    }

    /// Check if this error is a JSON serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
