//! Key paths for flattened input.
//!
//! A flattened key such as `"user.addresses.0.city"` is split on
//! [`SEPARATOR`](crate::constants::SEPARATOR) into an ordered sequence of
//! segments. Each segment is either *numeric* (addresses a list slot) or
//! *named* (addresses a map entry).
//!
//! # Core Types
//!
//! - [`KeyPath`] - An owned, ordered sequence of segments
//! - [`Segment`] - A borrowed view of one segment with its index classification
//!
//! # Usage
//!
//! ```rust
//! use keypath::path::KeyPath;
//!
//! let path = KeyPath::parse("user.addresses.0.city");
//! let indices: Vec<Option<usize>> = path.segments().map(|s| s.index()).collect();
//! assert_eq!(indices, vec![None, None, Some(0), None]);
//!
//! // Build incrementally
//! let path = KeyPath::new().push("user").push("0");
//! assert_eq!(path.to_string(), "user.0");
//! ```
//!
//! Unlike document paths, key paths are not normalized: `"a..b"` has three
//! segments and the middle one is the empty string.

use std::{convert::Infallible, fmt, str::FromStr};

use crate::constants::SEPARATOR;

/// One segment of a [`KeyPath`].
///
/// A segment is numeric when it is an optionally signed run of ASCII digits
/// whose value is non-negative and below `usize::MAX`. Leading zeros and a
/// `+` sign are accepted, so `"007"` and `"+7"` both address index 7, and
/// `"-0"` addresses index 0. Negative values, whitespace, the empty string
/// and overflowing digit strings are named segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    inner: &'a str,
}

impl<'a> Segment<'a> {
    /// Wraps a raw segment string.
    pub fn new(inner: &'a str) -> Self {
        Self { inner }
    }

    /// Returns the segment as a string slice.
    pub fn as_str(&self) -> &'a str {
        self.inner
    }

    /// Returns the list index this segment addresses, if it is numeric.
    ///
    /// ```rust
    /// # use keypath::path::Segment;
    /// assert_eq!(Segment::new("12").index(), Some(12));
    /// assert_eq!(Segment::new("012").index(), Some(12));
    /// assert_eq!(Segment::new("+1").index(), Some(1));
    /// assert_eq!(Segment::new("-0").index(), Some(0));
    /// assert_eq!(Segment::new("-1").index(), None);
    /// assert_eq!(Segment::new("name").index(), None);
    /// ```
    pub fn index(&self) -> Option<usize> {
        let (negative, digits) = match self.inner.as_bytes().first() {
            Some(b'+') => (false, &self.inner[1..]),
            Some(b'-') => (true, &self.inner[1..]),
            _ => (false, self.inner),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let index: usize = digits.parse().ok()?;
        if negative && index != 0 {
            return None;
        }
        // The list holding this slot needs index + 1 entries
        index.checked_add(1)?;
        Some(index)
    }

    /// Returns `true` if the segment addresses a list slot.
    pub fn is_numeric(&self) -> bool {
        self.index().is_some()
    }
}

impl AsRef<str> for Segment<'_> {
    fn as_ref(&self) -> &str {
        self.inner
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inner)
    }
}

/// An owned key path.
///
/// `KeyPath::new()` is the empty path (zero segments) and refers to the root
/// of a tree. Parsing never yields the empty path: `KeyPath::parse("")` has
/// a single, empty, named segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Creates the empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits a flattened key into segments.
    pub fn parse(key: &str) -> Self {
        Self {
            segments: key.split(SEPARATOR).map(str::to_owned).collect(),
        }
    }

    /// Appends a single segment to the end of this path.
    ///
    /// The segment is taken verbatim; a separator inside it is not split.
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Returns an iterator over the segments of this path.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment<'_>> + '_ {
        self.segments.iter().map(|s| Segment::new(s))
    }

    /// Returns the segment at `position`, if any.
    pub fn segment(&self, position: usize) -> Option<Segment<'_>> {
        self.segments.get(position).map(|s| Segment::new(s))
    }

    /// Returns the number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the empty path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the last segment, or `None` for the empty path.
    pub fn last(&self) -> Option<Segment<'_>> {
        self.segments.last().map(|s| Segment::new(s))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for KeyPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<&String> for KeyPath {
    fn from(s: &String) -> Self {
        Self::parse(s)
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}
