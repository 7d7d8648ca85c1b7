//! Single-pass re-indenting printer.
//!
//! A character-by-character transformer that re-emits compact JSON with one
//! member or element per line and nested indentation. It tracks only the
//! nesting level and quote state (including whether the cursor sits behind an
//! unconsumed backslash, so an escaped `\"` does not toggle the quote state).
//! It never builds or consults a value tree and performs no validation:
//! malformed input produces undefined but safe output.
//!
//! # Examples
//!
//! ```rust
//! use jsonloom::reindent;
//!
//! assert_eq!(reindent(r#"{"a":1}"#), "{\n  \"a\": 1\n}");
//! ```

use alloc::string::String;
use core::fmt::{self, Write};

use crate::source::CharSource;

/// Indent units emitted per nesting level by default.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// The re-indenting transformer. One instance handles one input stream;
/// call [`reset`](Reindenter::reset) before reusing it.
#[derive(Debug, Clone)]
pub struct Reindenter {
    indent_width: usize,
    level: usize,
    in_quote: bool,
    /// Inside a quote: the previous character was an unconsumed backslash.
    escaped: bool,
}

impl Default for Reindenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reindenter {
    /// Creates a transformer with the default two-space indent.
    #[must_use]
    pub fn new() -> Self {
        Self::with_indent_width(DEFAULT_INDENT_WIDTH)
    }

    /// Creates a transformer emitting `indent_width` spaces per level.
    #[must_use]
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self {
            indent_width,
            level: 0,
            in_quote: false,
            escaped: false,
        }
    }

    /// Clears the quote and nesting state for a fresh input stream.
    pub fn reset(&mut self) {
        self.level = 0;
        self.in_quote = false;
        self.escaped = false;
    }

    /// Transforms every character `source` yields into `out`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the output sink; the transformer itself has no
    /// failure states.
    pub fn reindent_to<S, W>(&mut self, mut source: S, out: &mut W) -> fmt::Result
    where
        S: CharSource,
        W: Write,
    {
        while let Some(c) = source.next_char() {
            self.write_char(c, out)?;
        }
        Ok(())
    }

    /// Feeds one input character, emitting zero or more output characters.
    ///
    /// # Errors
    ///
    /// Propagates errors from the output sink.
    pub fn write_char<W: Write>(&mut self, c: char, out: &mut W) -> fmt::Result {
        if self.in_quote {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == '"' {
                self.in_quote = false;
            }
            return out.write_char(c);
        }
        match c {
            '"' => {
                self.in_quote = true;
                out.write_char(c)
            }
            // Inter-token whitespace is dropped and re-synthesized, which is
            // what makes the transform idempotent.
            ' ' | '\t' | '\r' | '\n' => Ok(()),
            '{' | '[' => {
                out.write_char(c)?;
                self.level += 1;
                self.break_line(out)
            }
            '}' | ']' => {
                self.level = self.level.saturating_sub(1);
                self.break_line(out)?;
                out.write_char(c)
            }
            ',' => {
                out.write_char(c)?;
                self.break_line(out)
            }
            ':' => {
                out.write_char(c)?;
                out.write_char(' ')
            }
            _ => out.write_char(c),
        }
    }

    /// Newline plus the indent for the current level.
    fn break_line<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_char('\n')?;
        for _ in 0..self.level * self.indent_width {
            out.write_char(' ')?;
        }
        Ok(())
    }
}

/// Re-indents compact JSON text with the default two-space indent.
#[must_use]
pub fn reindent(input: &str) -> String {
    let mut out = String::new();
    Reindenter::new()
        .reindent_to(input.chars(), &mut out)
        .expect("writing to a String cannot fail");
    out
}
