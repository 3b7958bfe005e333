// SPDX-License-Identifier: Apache-2.0

use crate::number_parser::parse_number;
use crate::parse_error::{ErrKind, ParseError};
use crate::slice_input_buffer::SliceInputBuffer;
use crate::Value;

/// A parser that decodes exactly one JSON scalar from a slice.
///
/// The whole input, after trimming surrounding whitespace, must be a single
/// `null`, `true`, `false` or number.
// Lifetime 'a is the input buffer lifetime
pub struct SliceParser<'a> {
    buffer: SliceInputBuffer<'a>,
}

impl<'a> SliceParser<'a> {
    /// Creates a new parser for the given JSON input.
    ///
    /// # Example
    /// ```
    /// use femtojson::{SliceParser, Value};
    /// let mut value = Value::default();
    /// let mut parser = SliceParser::new(" true ");
    /// assert!(parser.parse_into(&mut value).is_ok());
    /// assert_eq!(value, Value::True);
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    ///
    /// # Example
    /// ```
    /// # use femtojson::SliceParser;
    /// let parser = SliceParser::new_from_slice(b"-1.5e3");
    /// ```
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        SliceParser {
            buffer: SliceInputBuffer::new(input),
        }
    }

    /// Byte offset of the cursor. After a successful parse this is the input length.
    pub fn position(&self) -> usize {
        self.buffer.current_pos()
    }

    /// Parses the input into `value`.
    ///
    /// Every call starts from the beginning of the input. `value` is set to
    /// [`Value::Null`] before anything else happens and is left as `Null` on
    /// every failure.
    pub fn parse_into(&mut self, value: &mut Value) -> Result<(), ParseError> {
        self.buffer.rewind();
        *value = Value::Null;
        let result = self.parse_root(value);
        if let Err(e) = &result {
            log::debug!("parse failed: {:?}", e);
            *value = Value::Null;
        }
        result
    }

    fn parse_root(&mut self, value: &mut Value) -> Result<(), ParseError> {
        self.buffer.skip_whitespace();
        self.parse_value(value)?;
        self.buffer.skip_whitespace();
        if !self.buffer.is_at_end() {
            return ParseError::new(
                ErrKind::RootNotSingular,
                self.buffer.peek(),
                self.buffer.current_pos(),
            );
        }
        Ok(())
    }

    fn parse_value(&mut self, value: &mut Value) -> Result<(), ParseError> {
        let pos = self.buffer.current_pos();
        if self.buffer.is_at_end() {
            return ParseError::new(ErrKind::ExpectValue, self.buffer.peek(), pos);
        }
        let lookahead = self.buffer.peek();
        log::trace!("dispatching on '{}' at {}", lookahead.escape_ascii(), pos);
        match lookahead {
            b'n' => self.parse_literal(value, b"null", Value::Null),
            b't' => self.parse_literal(value, b"true", Value::True),
            b'f' => self.parse_literal(value, b"false", Value::False),
            _ => parse_number(&mut self.buffer, value),
        }
    }

    /// Matches `literal` in full before touching the cursor or `value`.
    fn parse_literal(
        &mut self,
        value: &mut Value,
        literal: &'static [u8],
        parsed: Value,
    ) -> Result<(), ParseError> {
        if !self.buffer.matches(literal) {
            return ParseError::new(
                ErrKind::InvalidValue,
                self.buffer.peek(),
                self.buffer.current_pos(),
            );
        }
        self.buffer.advance(literal.len());
        *value = parsed;
        Ok(())
    }
}
