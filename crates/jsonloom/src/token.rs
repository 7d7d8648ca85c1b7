//! Lexical tokens and their lazily-materialized payloads.
//!
//! Structural punctuation, literals, and end-of-input are payload-free
//! variants. String and number tokens carry a [`Span`] of the shared character
//! buffer instead of an owned copy; conversion to a `String`, a machine
//! integer, or an arbitrary-precision decimal happens on first request and is
//! cached.

use alloc::string::String;
use core::{cell::OnceCell, fmt, str::FromStr};

use bigdecimal::{BigDecimal, ToPrimitive};

use crate::buffer::{SharedBuffer, Span};

/// One lexical unit of the JSON grammar.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// `{`
    BeginObject,
    /// `}`
    EndObject,
    /// `[`
    BeginArray,
    /// `]`
    EndArray,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// End of the character source.
    Eof,
    /// A string literal, escapes already expanded into the buffer.
    String(LazyString),
    /// A number literal, retained as its raw character slice.
    Number(LazyNumber),
}

impl Token {
    /// Short description used in error messages.
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Token::BeginObject => "'{'",
            Token::EndObject => "'}'",
            Token::BeginArray => "'['",
            Token::EndArray => "']'",
            Token::Colon => "':'",
            Token::Comma => "','",
            Token::True => "'true'",
            Token::False => "'false'",
            Token::Null => "'null'",
            Token::Eof => "end of input",
            Token::String(_) => "a string",
            Token::Number(_) => "a number",
        }
    }

    /// Returns `true` if the token is [`Eof`].
    ///
    /// [`Eof`]: Token::Eof
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }
}

/// A string payload backed by a slice of the shared buffer.
///
/// Escape decoding happened at lex time, so [`text`](LazyString::text) only
/// copies the already-decoded characters out on first call and caches the
/// owned result.
#[derive(Clone)]
pub struct LazyString {
    buffer: SharedBuffer,
    span: Span,
    text: OnceCell<String>,
}

impl LazyString {
    pub(crate) fn new(buffer: SharedBuffer, span: Span) -> Self {
        Self {
            buffer,
            span,
            text: OnceCell::new(),
        }
    }

    /// The decoded text. Materialized once, cached thereafter.
    pub fn text(&self) -> &str {
        self.text
            .get_or_init(|| self.buffer.borrow().slice(self.span).into())
    }

    /// Length of the decoded text in bytes, without materializing it.
    #[must_use]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Returns `true` for the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl PartialEq for LazyString {
    fn eq(&self, other: &Self) -> bool {
        self.text() == other.text()
    }
}

impl Eq for LazyString {}

impl PartialEq<str> for LazyString {
    fn eq(&self, other: &str) -> bool {
        self.text() == other
    }
}

impl PartialEq<&str> for LazyString {
    fn eq(&self, other: &&str) -> bool {
        self.text() == *other
    }
}

impl fmt::Debug for LazyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.text(), f)
    }
}

impl fmt::Display for LazyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// The longest literal (sign included) whose digits are guaranteed to fit the
/// fast accumulation path for `i32`.
const I32_SAFE_CHARS: usize = 9;
/// Same bound for `i64`.
const I64_SAFE_CHARS: usize = 18;

/// A number payload backed by the raw literal slice.
///
/// The integer accessors use a manual accumulation fast path when the literal
/// is integral and short enough to be provably in range; everything else goes
/// through an arbitrary-precision decimal parsed from the same slice and
/// cached after the first conversion.
#[derive(Clone)]
pub struct LazyNumber {
    buffer: SharedBuffer,
    span: Span,
    has_fraction: bool,
    has_exponent: bool,
    decimal: OnceCell<BigDecimal>,
}

impl LazyNumber {
    pub(crate) fn new(
        buffer: SharedBuffer,
        span: Span,
        has_fraction: bool,
        has_exponent: bool,
    ) -> Self {
        Self {
            buffer,
            span,
            has_fraction,
            has_exponent,
            decimal: OnceCell::new(),
        }
    }

    /// Returns `true` if the literal contains a fractional part.
    #[must_use]
    pub fn has_fraction(&self) -> bool {
        self.has_fraction
    }

    /// Returns `true` if the literal contains an exponent.
    #[must_use]
    pub fn has_exponent(&self) -> bool {
        self.has_exponent
    }

    /// Returns `true` if the literal is a plain integer.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        !self.has_fraction && !self.has_exponent
    }

    /// The raw literal text, copied out of the buffer.
    #[must_use]
    pub fn literal(&self) -> String {
        self.buffer.borrow().slice(self.span).into()
    }

    /// Converts to `i32`, truncating any fractional part.
    ///
    /// Returns `None` if the value is out of range for the type.
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        if let Some(value) = self.accumulate(I32_SAFE_CHARS) {
            return i32::try_from(value).ok();
        }
        self.decimal().to_i32()
    }

    /// Converts to `i64`, truncating any fractional part.
    ///
    /// Returns `None` if the value is out of range for the type.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        if let Some(value) = self.accumulate(I64_SAFE_CHARS) {
            return Some(value);
        }
        self.decimal().to_i64()
    }

    /// Converts to `f64`. Values beyond the double range come back as
    /// infinities.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.decimal().to_f64()
    }

    /// The arbitrary-precision decimal form, parsed from the literal slice on
    /// first call and cached.
    pub fn decimal(&self) -> &BigDecimal {
        self.decimal.get_or_init(|| {
            let buffer = self.buffer.borrow();
            BigDecimal::from_str(buffer.slice(self.span))
                .expect("lexed numbers are valid decimal literals")
        })
    }

    /// Fast path: digit accumulation, valid only for integral literals whose
    /// length (`safe_chars`, one more with a leading minus) guarantees the
    /// result fits in `i64` without overflow checks.
    fn accumulate(&self, safe_chars: usize) -> Option<i64> {
        if !self.is_integral() {
            return None;
        }
        let buffer = self.buffer.borrow();
        let literal = buffer.slice(self.span);
        let (negative, digits) = match literal.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, literal),
        };
        if digits.len() > safe_chars {
            return None;
        }
        let mut value: i64 = 0;
        for digit in digits.bytes() {
            value = value * 10 + i64::from(digit - b'0');
        }
        Some(if negative { -value } else { value })
    }
}

impl PartialEq for LazyNumber {
    fn eq(&self, other: &Self) -> bool {
        self.decimal() == other.decimal()
    }
}

impl fmt::Debug for LazyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.buffer.borrow().slice(self.span))
    }
}

impl fmt::Display for LazyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.buffer.borrow().slice(self.span))
    }
}
