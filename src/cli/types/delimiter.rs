//! Output field delimiter.

use crate::error::{EspnError, Result};
use std::fmt;
use std::str::FromStr;

/// Single-byte field delimiter for the history file.
///
/// Accepts any one ASCII character, plus the two-character escape `\t` for tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(u8);

impl Delimiter {
    pub const COMMA: Delimiter = Delimiter(b',');

    pub fn as_byte(&self) -> u8 {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::COMMA
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            b'\t' => f.write_str("\\t"),
            b => write!(f, "{}", b as char),
        }
    }
}

impl FromStr for Delimiter {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| EspnError::InvalidDelimiter {
            delimiter: s.to_string(),
            reason: reason.to_string(),
        };

        match s.as_bytes() {
            [] => Err(invalid("delimiter must not be empty")),
            b"\\t" => Ok(Self(b'\t')),
            [b] if b.is_ascii() && *b != b'\n' && *b != b'\r' && *b != b'"' => Ok(Self(*b)),
            [_] => Err(invalid("delimiter must not be a quote or line break")),
            _ => Err(invalid("delimiter must be a single ASCII character")),
        }
    }
}
