//! The parsed value tree and its compact serialization.
//!
//! Object members keep insertion order; writing an existing key again
//! overwrites the value in place without moving the key to the end. The tree
//! is read-only once the parse that built it returns.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::{
    error::PointerError,
    pointer::JsonPointer,
    token::{LazyNumber, LazyString},
};

/// An ordered sequence of values.
pub type Array = Vec<Value>;

/// An insertion-ordered mapping from string keys to values.
///
/// # Examples
///
/// ```
/// use jsonloom::parse_str;
///
/// let root = parse_str(r#"{"a":1,"b":2,"a":3}"#).unwrap().unwrap();
/// let object = root.as_object().unwrap();
/// assert_eq!(object.len(), 2);
/// assert_eq!(object.keys().collect::<Vec<_>>(), ["a", "b"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Object {
    entries: IndexMap<String, Value, FxBuildHasher>,
}

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, returning the displaced value if the key
    /// already existed. A displaced key keeps its original slot.
    pub fn put(&mut self, key: String, value: Value) -> Option<Value> {
        self.entries.insert(key, value)
    }

    /// Looks up a member by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` names a member.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the object has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }
}

impl PartialEq for Object {
    /// Order-sensitive equality: same members in the same slots.
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut object = Self::new();
        for (key, value) in iter {
            object.put(key, value);
        }
        object
    }
}

/// A JSON value as defined by [RFC 8259].
///
/// String and number leaves are lazy: they point into the character buffer of
/// the parse that produced them and materialize a `String` or decimal only
/// when asked.
///
/// # Examples
///
/// ```
/// use jsonloom::parse_str;
///
/// let root = parse_str(r#"{"pi": 3.14}"#).unwrap().unwrap();
/// let pi = root.get("pi").unwrap().as_number().unwrap();
/// assert_eq!(pi.decimal().to_string(), "3.14");
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// A number, retained as its literal text until converted.
    Number(LazyNumber),
    /// A string, decoded into the shared buffer at lex time.
    String(LazyString),
    /// An ordered sequence of values.
    Array(Array),
    /// An insertion-ordered map of members.
    Object(Object),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if this is a boolean.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The decoded text, if this is a string. Materializes on first call.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.text()),
            _ => None,
        }
    }

    /// The lazy number payload, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<&LazyNumber> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The array payload, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The object payload, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Member lookup on an object value; `None` on anything else.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(key))
    }

    /// Element lookup on an array value; `None` on anything else.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|array| array.get(index))
    }

    /// Resolves a slash-delimited pointer against this value.
    ///
    /// `Ok(None)` means the path walked off the tree (missing key,
    /// out-of-range index); that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PointerError`] when the pointer string itself is malformed.
    pub fn pointer(&self, pointer: &str) -> Result<Option<&Value>, PointerError> {
        JsonPointer::parse(pointer)?.resolve(self)
    }
}

/// Escapes `src` for inclusion in a JSON string literal.
///
/// Replaces quotes, backslashes, control characters, and the Unicode line
/// separators (which pre-2019 JavaScript parsers may not accept raw) with
/// their escape sequences.
pub(crate) fn write_escaped_string<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{2028}' | '\u{2029}' => write!(f, "\\u{:04X}", c as u32)?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Value {
    /// Compact serialization: no added whitespace, members in slot order,
    /// numbers printed as their original literal text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s.text(), f)?;
                f.write_str("\"")
            }
            Value::Array(array) => {
                f.write_str("[")?;
                let mut first = true;
                for v in array {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(object) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in object.iter() {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_string(k, f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
