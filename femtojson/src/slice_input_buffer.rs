// SPDX-License-Identifier: Apache-2.0

/// Byte returned by [`SliceInputBuffer::peek`] once the input is exhausted.
pub const TERMINATOR: u8 = b'\0';

/// A read position into the input data.
/// This encapsulates the data slice and position that are always used together.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Returns the byte under the cursor, or [`TERMINATOR`] at end of input.
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte at an absolute offset, or [`TERMINATOR`] past the end.
    pub fn byte_at(&self, pos: usize) -> u8 {
        self.data.get(pos).copied().unwrap_or(TERMINATOR)
    }

    /// Moves the cursor forward by `n` bytes, never past the end of input.
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
    }

    /// Moves the cursor back to the start of the input.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Checks whether `expected` appears in full starting at the cursor.
    pub fn matches(&self, expected: &[u8]) -> bool {
        self.data
            .get(self.pos..)
            .is_some_and(|rest| rest.starts_with(expected))
    }

    /// Gets a slice of the data from start to end positions, with bounds checking.
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a [u8]> {
        self.data.get(start..end)
    }

    /// Skips JSON insignificant whitespace: space, tab, line feed and carriage return.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t' | b'\n' | b'\r') {
            self.pos += 1;
        }
    }
}
