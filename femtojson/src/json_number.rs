// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

/// Outcome of converting a validated JSON number token.
#[derive(Debug, PartialEq)]
pub enum NumberResult {
    /// The nearest `f64` to the decimal token.
    Float(f64),
    /// The magnitude is outside the finite `f64` range.
    Overflow,
    /// The bytes were not a number `f64::from_str` accepts.
    Malformed,
}

/// Converts a byte slice already validated against the JSON number grammar.
/// JSON numbers are pure ASCII, so the UTF-8 check never fails on validated input.
pub fn parse_float(bytes: &[u8]) -> NumberResult {
    let s = match core::str::from_utf8(bytes) {
        Ok(s) => s,
        Err(_) => return NumberResult::Malformed,
    };
    match f64::from_str(s) {
        Ok(val) if val.is_finite() => NumberResult::Float(normalize_zero(val)),
        Ok(_) => NumberResult::Overflow,
        Err(_) => NumberResult::Malformed,
    }
}

#[cfg(feature = "signed-zero")]
fn normalize_zero(val: f64) -> f64 {
    val
}

#[cfg(feature = "unsigned-zero")]
fn normalize_zero(val: f64) -> f64 {
    // -0.0 compares equal to 0.0
    if val == 0.0 {
        0.0
    } else {
        val
    }
}
