//! A streaming JSON lexer and parser producing a lazily-materialized,
//! pointer-addressable value tree.
//!
//! Raw characters are retained as slices of one growable buffer per parse and
//! only converted to owned strings, machine integers, or arbitrary-precision
//! decimals when a consumer asks for that representation. The value tree is
//! navigated by slash-delimited pointers (RFC 6901 style) without mapping
//! anything onto typed records. A separate single-pass printer re-indents
//! compact JSON directly on the character stream, never touching the tree.
//!
//! # Examples
//!
//! ```rust
//! use jsonloom::parse_str;
//!
//! let root = parse_str(r#"{"a":{"b":[10,20]}}"#).unwrap().unwrap();
//! let hit = root.pointer("/a/b/1").unwrap().unwrap();
//! assert_eq!(hit.as_number().unwrap().as_i32(), Some(20));
//! assert!(root.pointer("/a/c").unwrap().is_none());
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod error;
mod escape;
mod lexer;
mod options;
mod parser;
mod pointer;
mod printer;
mod source;
mod token;
mod value;

#[cfg(test)]
mod tests;

pub use buffer::{CharBuffer, MAX_CAPACITY, SharedBuffer, Span};
pub use error::{ErrorKind, LexError, ParseError, PointerError, StructuralError};
pub use lexer::Lexer;
pub use options::ParseOptions;
pub use parser::{StructuralParser, parse_source, parse_str};
pub use pointer::JsonPointer;
pub use printer::{DEFAULT_INDENT_WIDTH, Reindenter, reindent};
pub use source::CharSource;
pub use token::{LazyNumber, LazyString, Token};
pub use value::{Array, Object, Value};
