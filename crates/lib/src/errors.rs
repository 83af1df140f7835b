//! Error types for unpacking flattened keys.
//!
//! Almost every failure is a structural conflict: a key requires a container
//! kind at some path that contradicts the kind an earlier key already
//! established there. The other failure is a list index too large to
//! allocate. Either aborts the whole unpack call.

use std::fmt;

use thiserror::Error;

/// Why a key conflicted with the tree built so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictReason {
    /// A named segment addressed a node that is already a list.
    StringKeyInList { segment: String },
    /// A scalar was addressed as a container, or a container was assigned a scalar.
    TypeMismatch,
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictReason::StringKeyInList { segment } => {
                write!(f, "string key {segment} in list")
            }
            ConflictReason::TypeMismatch => f.write_str("type mismatch"),
        }
    }
}

/// Structured error types for unpack operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnpackError {
    /// A key used a path inconsistently with a previously processed key
    #[error("{reason}")]
    TypeConflict {
        reason: ConflictReason,
        /// The full flattened key being processed when the conflict was found
        path: String,
    },

    /// A numeric segment asked for a list too large to allocate
    #[error("list index {index} too large")]
    IndexTooLarge {
        index: usize,
        /// The full flattened key being processed
        path: String,
    },
}

impl UnpackError {
    pub(crate) fn string_key_in_list(segment: impl Into<String>, path: impl Into<String>) -> Self {
        UnpackError::TypeConflict {
            reason: ConflictReason::StringKeyInList {
                segment: segment.into(),
            },
            path: path.into(),
        }
    }

    pub(crate) fn type_mismatch(path: impl Into<String>) -> Self {
        UnpackError::TypeConflict {
            reason: ConflictReason::TypeMismatch,
            path: path.into(),
        }
    }

    pub(crate) fn index_too_large(index: usize, path: impl Into<String>) -> Self {
        UnpackError::IndexTooLarge {
            index,
            path: path.into(),
        }
    }

    /// Check if this error is a structural type conflict
    pub fn is_type_conflict(&self) -> bool {
        matches!(self, UnpackError::TypeConflict { .. })
    }

    /// Check if a named segment was used against a list
    pub fn is_string_key_in_list(&self) -> bool {
        matches!(
            self,
            UnpackError::TypeConflict {
                reason: ConflictReason::StringKeyInList { .. },
                ..
            }
        )
    }

    /// Check if a scalar and a container collided at the same path
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            UnpackError::TypeConflict {
                reason: ConflictReason::TypeMismatch,
                ..
            }
        )
    }

    /// Check if a list index could not be allocated
    pub fn is_index_too_large(&self) -> bool {
        matches!(self, UnpackError::IndexTooLarge { .. })
    }

    /// Get the conflict reason, if this is a type conflict
    pub fn reason(&self) -> Option<&ConflictReason> {
        match self {
            UnpackError::TypeConflict { reason, .. } => Some(reason),
            UnpackError::IndexTooLarge { .. } => None,
        }
    }

    /// Get the flattened key that triggered the error
    pub fn path(&self) -> &str {
        match self {
            UnpackError::TypeConflict { path, .. } | UnpackError::IndexTooLarge { path, .. } => {
                path
            }
        }
    }
}

// Conversion from UnpackError to the main Error type
impl From<UnpackError> for crate::Error {
    fn from(err: UnpackError) -> Self {
        crate::Error::Unpack(err)
    }
}
