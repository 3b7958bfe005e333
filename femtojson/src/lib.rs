// SPDX-License-Identifier: Apache-2.0

//! A tiny JSON decoder for the scalar subset of JSON: `null`, `true`,
//! `false` and numbers.
//!
//! The input must reduce, after trimming whitespace, to exactly one value.
//! Nothing is allocated; the decoded [`Value`] is written into storage owned
//! by the caller.
//!
//! ```
//! use femtojson::{parse, ErrKind, Value, ValueType};
//!
//! let value = parse(" 1e5 ").unwrap();
//! assert_eq!(value.get_type(), ValueType::Number);
//! assert_eq!(value.get_number(), 100000.0);
//!
//! assert_eq!(parse("false,").unwrap_err().kind(), ErrKind::RootNotSingular);
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

// Compile-time configuration validation
mod config_check;

mod json_number;

mod number_parser;

mod parse_error;
pub use parse_error::{ErrKind, ParseError, ParseResult};

mod slice_input_buffer;

mod slice_parser;
pub use slice_parser::SliceParser;

mod value;
pub use value::{Value, ValueType};

/// Parses `input` into caller-provided storage.
///
/// `value` is [`Value::Null`] whenever this returns an error.
pub fn parse_into(value: &mut Value, input: &[u8]) -> Result<(), ParseError> {
    SliceParser::new_from_slice(input).parse_into(value)
}

/// Parses a string holding exactly one JSON scalar.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_slice(input.as_bytes())
}

/// Parses a byte slice holding exactly one JSON scalar.
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    let mut value = Value::default();
    parse_into(&mut value, input)?;
    Ok(value)
}

/// Parses a null-terminated buffer. Only the bytes before the terminator are read.
pub fn parse_cstr(input: &core::ffi::CStr) -> Result<Value, ParseError> {
    parse_slice(input.to_bytes())
}
