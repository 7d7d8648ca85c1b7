//! The recursive-descent structural parser.
//!
//! Consumes the token stream and assembles the value tree, enforcing the
//! grammar above the token level: colon placement, comma placement, bracket
//! matching, and the pending-key discipline inside objects. Recursion depth
//! equals nesting depth and is bounded by [`ParseOptions::max_depth`].
//!
//! # Examples
//!
//! ```rust
//! use jsonloom::parse_str;
//!
//! let root = parse_str(r#"{"items": [1, 2, 3]}"#).unwrap().unwrap();
//! assert_eq!(root.get("items").unwrap().as_array().unwrap().len(), 3);
//! ```

use alloc::string::ToString;

use crate::{
    error::{ErrorKind, ParseError, StructuralError},
    lexer::Lexer,
    options::ParseOptions,
    source::CharSource,
    token::Token,
    value::{Array, Object, Value},
};

/// Parses one JSON document from a string slice.
///
/// Returns `Ok(None)` for input holding no document (only whitespace or
/// nothing). Trailing text after the document is left unconsumed; use
/// [`StructuralParser`] directly to keep reading from the same source.
///
/// # Errors
///
/// Returns a positioned [`ParseError`] on any lexical or structural
/// violation.
pub fn parse_str(input: &str) -> Result<Option<Value>, ParseError> {
    StructuralParser::new(input.chars()).parse()
}

/// Parses one JSON document from an abstract character source.
///
/// # Errors
///
/// Returns a positioned [`ParseError`] on any lexical or structural
/// violation.
pub fn parse_source<S: CharSource>(source: S) -> Result<Option<Value>, ParseError> {
    StructuralParser::new(source).parse()
}

/// Recursive-descent consumer of the token stream.
#[derive(Debug)]
pub struct StructuralParser<S> {
    lexer: Lexer<S>,
    options: ParseOptions,
    depth: usize,
}

impl<S: CharSource> StructuralParser<S> {
    /// Creates a parser with default options.
    pub fn new(source: S) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    /// Creates a parser with explicit options.
    pub fn with_options(source: S, options: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(source),
            options,
            depth: 0,
        }
    }

    /// Parses the next document from the source.
    ///
    /// The first token must open an object or array; end-of-input yields
    /// `Ok(None)`. The parser stops at the document's closing bracket, so a
    /// source carrying several concatenated documents can be drained by
    /// calling `parse` repeatedly.
    ///
    /// # Errors
    ///
    /// Returns a positioned [`ParseError`] on any lexical or structural
    /// violation.
    pub fn parse(&mut self) -> Result<Option<Value>, ParseError> {
        match self.lexer.next_token()? {
            Token::Eof => Ok(None),
            Token::BeginObject => Ok(Some(Value::Object(self.parse_object()?))),
            Token::BeginArray => Ok(Some(Value::Array(self.parse_array()?))),
            other => Err(self.structural(StructuralError::InvalidDocumentStart(other.describe()))),
        }
    }

    /// Object body; the opening brace has been consumed.
    fn parse_object(&mut self) -> Result<Object, ParseError> {
        self.enter()?;
        let mut object = Object::new();
        if matches!(self.peek()?, Token::EndObject) {
            self.lexer.next_token()?;
            self.leave();
            return Ok(object);
        }
        loop {
            let pending_key = match self.lexer.next_token()? {
                Token::String(key) => key.text().to_string(),
                other => {
                    return Err(
                        self.structural(StructuralError::ExpectedPropertyName(other.describe()))
                    );
                }
            };
            match self.lexer.next_token()? {
                Token::Colon => {}
                other => {
                    return Err(self.structural(StructuralError::ExpectedColon(other.describe())));
                }
            }
            if pending_key.is_empty() {
                return Err(self.structural(StructuralError::EmptyPropertyName));
            }
            let value = self.parse_value()?;
            object.put(pending_key, value);
            match self.lexer.next_token()? {
                Token::Comma => {}
                Token::EndObject => break,
                other => {
                    return Err(
                        self.structural(StructuralError::ExpectedCommaOrClose(other.describe()))
                    );
                }
            }
        }
        self.leave();
        Ok(object)
    }

    /// Array body; the opening bracket has been consumed.
    fn parse_array(&mut self) -> Result<Array, ParseError> {
        self.enter()?;
        let mut array = Array::new();
        if matches!(self.peek()?, Token::EndArray) {
            self.lexer.next_token()?;
            self.leave();
            return Ok(array);
        }
        loop {
            array.push(self.parse_value()?);
            match self.lexer.next_token()? {
                Token::Comma => {}
                Token::EndArray => break,
                other => {
                    return Err(
                        self.structural(StructuralError::ExpectedCommaOrClose(other.describe()))
                    );
                }
            }
        }
        self.leave();
        Ok(array)
    }

    /// One value at a value position, recursing into containers.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        Ok(match self.lexer.next_token()? {
            Token::String(s) => Value::String(s),
            Token::Number(n) => Value::Number(n),
            Token::True => Value::Boolean(true),
            Token::False => Value::Boolean(false),
            Token::Null => Value::Null,
            Token::BeginObject => Value::Object(self.parse_object()?),
            Token::BeginArray => Value::Array(self.parse_array()?),
            other => return Err(self.structural(StructuralError::ExpectedValue(other.describe()))),
        })
    }

    /// One token of lookahead, via the lexer's pushback slot.
    fn peek(&mut self) -> Result<Token, ParseError> {
        let token = self.lexer.next_token()?;
        self.lexer.push_back(token.clone());
        Ok(token)
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self.structural(StructuralError::DepthExceeded(self.options.max_depth)));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn structural(&self, error: StructuralError) -> ParseError {
        ParseError {
            kind: ErrorKind::Structural(error),
            line: self.lexer.line(),
            column: self.lexer.column(),
        }
    }
}
