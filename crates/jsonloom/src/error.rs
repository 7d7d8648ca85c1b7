//! Error types for lexing, structural parsing, and pointer handling.
//!
//! All three error kinds are fatal to the operation that raised them; there is
//! no partial-result mode. Pointer resolution keeps "not found" (a successful
//! empty result) strictly apart from [`PointerError`] (malformed pointer
//! syntax).

use alloc::string::String;

use thiserror::Error;

/// A character sequence that violates the token grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    /// A character that cannot begin any token.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// A `\` followed by a character that is not a recognized escape.
    #[error("invalid escape character '{0}'")]
    InvalidEscape(char),
    /// A `\uXXXX` escape containing a non-hex digit.
    #[error("invalid unicode escape digit '{0}'")]
    InvalidUnicodeEscapeDigit(char),
    /// A code point outside the Unicode scalar range.
    #[error("invalid unicode code point U+{0:04X}")]
    InvalidCodePoint(u32),
    /// A surrogate escape without its partner.
    #[error("unpaired surrogate U+{0:04X}")]
    UnpairedSurrogate(u32),
    /// A raw control character inside a string literal.
    #[error("control character U+{0:04X} inside string")]
    ControlCharacterInString(u32),
    /// A number violating the JSON number grammar.
    #[error("malformed number: {0}")]
    MalformedNumber(&'static str),
    /// A misspelled `true`, `false`, or `null`.
    #[error("invalid literal: expected '{expected}', found '{found}'")]
    InvalidLiteral {
        /// The character the literal spelling requires next.
        expected: char,
        /// The character actually read.
        found: char,
    },
    /// The source ended in the middle of a token.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

/// A token sequence that violates the structural grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StructuralError {
    /// The document did not start with `{` or `[`.
    #[error("expected an object or array at the top level, found {0}")]
    InvalidDocumentStart(&'static str),
    /// An object member did not start with a string key.
    #[error("expected a property name, found {0}")]
    ExpectedPropertyName(&'static str),
    /// A key was not followed by `:`.
    #[error("expected ':' after property name, found {0}")]
    ExpectedColon(&'static str),
    /// A value position held a non-value token.
    #[error("expected a value, found {0}")]
    ExpectedValue(&'static str),
    /// A completed member/element was not followed by `,` or a closer.
    #[error("expected ',' or a closing bracket, found {0}")]
    ExpectedCommaOrClose(&'static str),
    /// An empty pending key reached a value position.
    #[error("empty property name")]
    EmptyPropertyName,
    /// Container nesting exceeded [`crate::ParseOptions::max_depth`].
    #[error("maximum nesting depth of {0} exceeded")]
    DepthExceeded(usize),
}

/// The failure classes a parse can report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// Character-level grammar violation.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    /// Token-level grammar violation.
    #[error("syntax error: {0}")]
    Structural(#[from] StructuralError),
}

/// A fatal parse failure, positioned at the line and column where the
/// offending character was read.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// 1-based line of the offending character.
    pub line: usize,
    /// 1-based column of the offending character.
    pub column: usize,
}

impl ParseError {
    /// Returns `true` if the failure was raised by the lexer.
    #[must_use]
    pub fn is_lex(&self) -> bool {
        matches!(self.kind, ErrorKind::Lex(_))
    }

    /// Returns `true` if the failure was raised by the structural parser.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self.kind, ErrorKind::Structural(_))
    }
}

/// A malformed pointer string.
///
/// Not to be confused with an unresolved pointer: looking up a missing key or
/// an out-of-range index succeeds with an empty result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PointerError {
    /// The segment before the first `/` was not empty.
    #[error("pointer must be empty or start with '/'")]
    MissingLeadingSlash,
    /// An array segment that is not a plain non-negative base-10 index.
    #[error("invalid array index '{0}'")]
    InvalidIndex(String),
}
