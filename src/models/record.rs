//! Record model
//!
//! One input line split into its size token and payload.

use crate::error::FormatError;

/// Separator between size token and payload
pub const SEPARATOR: char = ':';

/// A `<size>:<payload>` line, borrowed from the input.
///
/// The size token is opaque and passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Everything before the first separator
    pub size: &'a str,
    /// Everything after the first separator
    pub payload: &'a str,
}

impl<'a> Record<'a> {
    /// Splits `line` at the first `:`.
    pub fn parse(line: &'a str) -> Result<Self, FormatError> {
        let (size, payload) = line
            .split_once(SEPARATOR)
            .ok_or(FormatError::MissingSeparator)?;
        Ok(Self { size, payload })
    }

    /// Rebuilds an output line with a transformed payload.
    pub fn with_payload(&self, payload: &str) -> String {
        let mut line = String::with_capacity(self.size.len() + 1 + payload.len());
        line.push_str(self.size);
        line.push(SEPARATOR);
        line.push_str(payload);
        line
    }
}
