// SPDX-License-Identifier: Apache-2.0

use crate::json_number::{parse_float, NumberResult};
use crate::parse_error::{ErrKind, ParseError};
use crate::slice_input_buffer::SliceInputBuffer;
use crate::Value;

/// Position within the number grammar:
///
/// ```text
/// number = ["-"] int [frac] [exp]
/// int    = "0" | digit1-9 *digit
/// frac   = "." 1*digit
/// exp    = ("e" | "E") ["+" | "-"] 1*digit
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
enum Num {
    Start,
    Sign,
    LeadingZero,
    BeforeDecimalPoint,
    Decimal,
    AfterDecimalPoint,
    Exponent,
    ExponentSign,
    AfterExponent,
}

impl Num {
    /// States in which the bytes seen so far form a complete number.
    fn is_accepting(self) -> bool {
        matches!(
            self,
            Num::LeadingZero
                | Num::BeforeDecimalPoint
                | Num::AfterDecimalPoint
                | Num::AfterExponent
        )
    }
}

/// Finds the end of the number token starting at the cursor.
///
/// The cursor itself is not moved. Returns the exclusive end offset of the
/// longest prefix matching the grammar, or `InvalidValue` positioned at the
/// start of the token when no such prefix exists.
pub fn scan_number(buffer: &SliceInputBuffer) -> Result<usize, ParseError> {
    let start = buffer.current_pos();
    let mut pos = start;
    let mut state = Num::Start;

    loop {
        let current_byte = buffer.byte_at(pos);
        let next = match (state, current_byte) {
            (Num::Start, b'-') => Num::Sign,
            (Num::Start | Num::Sign, b'0') => Num::LeadingZero,
            (Num::Start | Num::Sign, b'1'..=b'9') => Num::BeforeDecimalPoint,
            (Num::BeforeDecimalPoint, b'0'..=b'9') => Num::BeforeDecimalPoint,
            (Num::LeadingZero | Num::BeforeDecimalPoint, b'.') => Num::Decimal,
            (Num::Decimal | Num::AfterDecimalPoint, b'0'..=b'9') => Num::AfterDecimalPoint,
            (
                Num::LeadingZero | Num::BeforeDecimalPoint | Num::AfterDecimalPoint,
                b'e' | b'E',
            ) => Num::Exponent,
            (Num::Exponent, b'+' | b'-') => Num::ExponentSign,
            (Num::Exponent | Num::ExponentSign | Num::AfterExponent, b'0'..=b'9') => {
                Num::AfterExponent
            }
            (state, _) if state.is_accepting() => break,
            (state, _) => {
                log::debug!(
                    "number rejected in state {:?} by byte '{}' at {}",
                    state,
                    current_byte.escape_ascii(),
                    pos
                );
                return ParseError::new(ErrKind::InvalidValue, buffer.byte_at(start), start);
            }
        };
        state = next;
        pos += 1;
    }

    Ok(pos)
}

/// Validates, converts and consumes a number token.
///
/// On success the cursor moves past the token and `value` becomes a
/// [`Value::Number`]. On failure neither is touched.
pub fn parse_number(buffer: &mut SliceInputBuffer, value: &mut Value) -> Result<(), ParseError> {
    let start = buffer.current_pos();
    let end = scan_number(buffer)?;
    let first = buffer.byte_at(start);

    let bytes = match buffer.slice(start, end) {
        Some(bytes) => bytes,
        None => return ParseError::new(ErrKind::InvalidValue, first, start),
    };

    match parse_float(bytes) {
        NumberResult::Float(n) => {
            log::trace!("number {} spanning {}..{}", n, start, end);
            *value = Value::Number(n);
            buffer.advance(end - start);
            Ok(())
        }
        NumberResult::Overflow => {
            log::debug!("number at {} overflows f64", start);
            ParseError::new(ErrKind::NumberTooBig, first, start)
        }
        NumberResult::Malformed => ParseError::new(ErrKind::InvalidValue, first, start),
    }
}
