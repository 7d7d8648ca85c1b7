//! Slash-delimited pointer addressing into a value tree, RFC 6901 style.
//!
//! A pointer is parsed once into unescaped segments and then resolved against
//! any tree. Resolution distinguishes two outcomes the same way the error
//! model does: walking off the tree (missing key, out-of-range index) is a
//! successful empty result, while a malformed pointer or array index is a
//! [`PointerError`].

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

use crate::{error::PointerError, value::Value};

/// A parsed pointer: a list of unescaped reference segments.
///
/// # Examples
///
/// ```
/// use jsonloom::{JsonPointer, parse_str};
///
/// let root = parse_str(r#"{"a":{"b":[10,20]}}"#).unwrap().unwrap();
/// let pointer = JsonPointer::parse("/a/b/1").unwrap();
/// let hit = pointer.resolve(&root).unwrap().unwrap();
/// assert_eq!(hit.as_number().unwrap().as_i32(), Some(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPointer {
    segments: Vec<String>,
}

impl JsonPointer {
    /// Parses a pointer string.
    ///
    /// The segment before the leading `/` must be empty. Trailing empty
    /// segments are dropped, so `""`, `"/"`, and `"//"` all denote the root.
    /// Escapes decode as `~1` → `/` then `~0` → `~`, in that order, so a `~`
    /// produced by the first substitution is never re-consumed by the second.
    ///
    /// # Errors
    ///
    /// Returns [`PointerError::MissingLeadingSlash`] when a multi-segment
    /// pointer does not start with `/`.
    pub fn parse(pointer: &str) -> Result<Self, PointerError> {
        let mut raw: Vec<&str> = pointer.split('/').collect();
        while raw.last().is_some_and(|segment| segment.is_empty()) {
            raw.pop();
        }
        if raw.len() <= 1 {
            return Ok(Self {
                segments: Vec::new(),
            });
        }
        if !raw[0].is_empty() {
            return Err(PointerError::MissingLeadingSlash);
        }
        let segments = raw[1..].iter().map(|segment| unescape(segment)).collect();
        Ok(Self { segments })
    }

    /// The unescaped segments, root first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns `true` if the pointer denotes the root value.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Walks the pointer down from `root`.
    ///
    /// Each step looks the segment up as an object key or parses it as an
    /// array index. `Ok(None)` reports a path that walked off the tree;
    /// the reserved index `-` (the append position) also reads as absent.
    ///
    /// # Errors
    ///
    /// Returns [`PointerError::InvalidIndex`] when a segment applied to an
    /// array is not a plain non-negative base-10 integer.
    pub fn resolve<'a>(&self, root: &'a Value) -> Result<Option<&'a Value>, PointerError> {
        let mut current = root;
        for segment in &self.segments {
            match current {
                Value::Object(object) => match object.get(segment) {
                    Some(member) => current = member,
                    None => return Ok(None),
                },
                Value::Array(array) => match parse_index(segment)? {
                    Some(index) if index < array.len() => current = &array[index],
                    _ => return Ok(None),
                },
                _ => return Ok(None),
            }
        }
        Ok(Some(current))
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str("/")?;
            for c in segment.chars() {
                match c {
                    '~' => f.write_str("~0")?,
                    '/' => f.write_str("~1")?,
                    _ => fmt::Write::write_char(f, c)?,
                }
            }
        }
        Ok(())
    }
}

/// Decodes `~1` then `~0`; the order keeps `~01` from collapsing to `/`.
fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// Parses an array segment. `Ok(None)` is the reserved `-` append marker,
/// which is not resolvable for reads.
fn parse_index(segment: &str) -> Result<Option<usize>, PointerError> {
    if segment == "-" {
        return Ok(None);
    }
    if segment.starts_with(['+', '-']) {
        return Err(PointerError::InvalidIndex(segment.to_string()));
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return Err(PointerError::InvalidIndex(segment.to_string()));
    }
    segment
        .parse::<usize>()
        .map(Some)
        .map_err(|_| PointerError::InvalidIndex(segment.to_string()))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::JsonPointer;
    use crate::error::PointerError;

    #[test]
    fn empty_and_slash_pointers_are_the_root() {
        assert!(JsonPointer::parse("").unwrap().is_root());
        assert!(JsonPointer::parse("/").unwrap().is_root());
        assert!(JsonPointer::parse("//").unwrap().is_root());
    }

    #[test]
    fn missing_leading_slash_is_rejected() {
        assert_eq!(
            JsonPointer::parse("a/b").unwrap_err(),
            PointerError::MissingLeadingSlash
        );
    }

    #[test]
    fn segments_unescape_in_order() {
        let pointer = JsonPointer::parse("/a~1b/~0/~01").unwrap();
        assert_eq!(pointer.segments(), ["a/b", "~", "~1"]);
    }

    #[test]
    fn trailing_empty_segments_are_dropped() {
        let pointer = JsonPointer::parse("/a/").unwrap();
        assert_eq!(pointer.segments(), ["a"]);
    }

    #[test]
    fn display_re_escapes() {
        let pointer = JsonPointer::parse("/a~1b/~0c").unwrap();
        assert_eq!(pointer.to_string(), "/a~1b/~0c");
    }

    #[test]
    fn interior_empty_segments_survive() {
        let pointer = JsonPointer::parse("/a//b").unwrap();
        assert_eq!(pointer.segments(), ["a", "", "b"]);
    }
}
