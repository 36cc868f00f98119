//! Text scanning helpers used by the PEM decoder

use super::Stuffer;
use dstuffer_api::error::validation;
use dstuffer_api::{Error, Result};

/// Whitespace as understood by the PEM envelope
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

impl Stuffer {
    /// Consume leading whitespace, returning how many bytes were skipped
    pub fn skip_whitespace(&mut self) -> usize {
        let skipped = self
            .unread()
            .iter()
            .take_while(|&&b| is_whitespace(b))
            .count();
        self.read_cursor += skipped;
        skipped
    }

    /// Offset of the first occurrence of `pattern` in the unread data
    pub fn find(&self, pattern: &[u8]) -> Option<usize> {
        if pattern.is_empty() {
            return Some(0);
        }
        self.unread()
            .windows(pattern.len())
            .position(|window| window == pattern)
    }

    /// Consume everything up to and including the next occurrence of `pattern`
    ///
    /// Fails with `OutOfData` and leaves the cursor alone if it never occurs.
    pub fn skip_past(&mut self, pattern: &[u8]) -> Result<()> {
        match self.find(pattern) {
            Some(offset) => self.skip_read(offset + pattern.len()),
            None => Err(Error::OutOfData {
                context: "stuffer skip_past",
                requested: pattern.len(),
                available: self.data_available(),
            }),
        }
    }

    /// Borrow the next line without its `\n` or `\r\n` terminator
    ///
    /// The final line may lack a terminator. Fails with `OutOfData` when
    /// nothing is left to read.
    pub fn read_line(&mut self) -> Result<&[u8]> {
        validation::data_available("stuffer read_line", 1, self.data_available())?;

        let (len, consumed) = match self.unread().iter().position(|&b| b == b'\n') {
            Some(newline) => (newline, newline + 1),
            None => (self.data_available(), self.data_available()),
        };

        let start = self.read_cursor;
        self.read_cursor += consumed;

        let mut line = &self.blob[start..start + len];
        if let [head @ .., b'\r'] = line {
            line = head;
        }
        Ok(line)
    }
}
