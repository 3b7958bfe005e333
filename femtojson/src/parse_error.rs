// SPDX-License-Identifier: Apache-2.0

/// The kind of failure reported by a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrKind {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// The lookahead started neither a literal nor a well-formed number.
    InvalidValue,
    /// A complete value was followed by more non-whitespace content.
    RootNotSingular,
    /// A well-formed number does not fit in an `f64`.
    NumberTooBig,
}

/// Flat outcome code of a parse, including success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseResult {
    Ok,
    ExpectValue,
    InvalidValue,
    RootNotSingular,
    NumberTooBig,
}

/// Errors that can occur during JSON parsing
///
/// Carries the failure kind together with the offending byte and its offset
/// in the input. At end of input the byte is `0`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrKind,
    character: u8,
    position: usize,
}

impl ParseError {
    pub fn new<T>(kind: ErrKind, character: u8, position: usize) -> Result<T, Self> {
        Err(Self {
            kind,
            character,
            position,
        })
    }

    pub fn kind(&self) -> ErrKind {
        self.kind
    }

    pub fn character(&self) -> u8 {
        self.character
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl From<ErrKind> for ParseResult {
    fn from(kind: ErrKind) -> Self {
        match kind {
            ErrKind::ExpectValue => ParseResult::ExpectValue,
            ErrKind::InvalidValue => ParseResult::InvalidValue,
            ErrKind::RootNotSingular => ParseResult::RootNotSingular,
            ErrKind::NumberTooBig => ParseResult::NumberTooBig,
        }
    }
}

impl<T> From<Result<T, ParseError>> for ParseResult {
    fn from(result: Result<T, ParseError>) -> Self {
        match result {
            Ok(_) => ParseResult::Ok,
            Err(e) => e.kind.into(),
        }
    }
}

impl core::fmt::Debug for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:?}({}) at {}",
            self.kind,
            self.character.escape_ascii(),
            self.position
        )
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self.kind {
            ErrKind::ExpectValue => "expected a value",
            ErrKind::InvalidValue => "invalid value",
            ErrKind::RootNotSingular => "unexpected content after root value",
            ErrKind::NumberTooBig => "number too big",
        };
        if self.character == 0 {
            write!(f, "{msg} at offset {}", self.position)
        } else {
            write!(
                f,
                "{msg} at offset {} ('{}')",
                self.position,
                self.character.escape_ascii()
            )
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
