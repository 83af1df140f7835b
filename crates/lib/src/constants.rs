//! Constants used throughout the keypath library.

/// Separator between the segments of a flattened key.
pub const SEPARATOR: char = '.';
