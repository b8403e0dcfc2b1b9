//! Parser for the routing fraction printed next to the check number.
//!
//! The grammar is two digits, `-`, one to four digits, `/`, three or four
//! digits, with optional whitespace around the `-` and `/`:
//!
//! ```text
//! 12-345/6789
//! 12 - 345 / 6789
//! ```

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A parsed routing fraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    raw: String,
    prefix: String,
    institution: String,
    routing_symbol: String,
}

impl Fraction {
    /// Parses a fraction, requiring the whole input to match the grammar.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidFractionFormat(input.to_string());
        let mut cursor = Cursor::new(input);

        let prefix = cursor.digits(2, 2).ok_or_else(invalid)?;
        cursor.skip_whitespace();
        cursor.consume(b'-').ok_or_else(invalid)?;
        cursor.skip_whitespace();
        let institution = cursor.digits(1, 4).ok_or_else(invalid)?;
        cursor.skip_whitespace();
        cursor.consume(b'/').ok_or_else(invalid)?;
        cursor.skip_whitespace();
        let routing_symbol = cursor.digits(3, 4).ok_or_else(invalid)?;

        if !cursor.is_at_end() {
            return Err(invalid());
        }

        Ok(Self {
            raw: input.to_string(),
            prefix: prefix.to_string(),
            institution: institution.to_string(),
            routing_symbol: routing_symbol.to_string(),
        })
    }

    /// The leading two-digit prefix, which carries no routing information.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The numerator after the `-`.
    pub fn institution(&self) -> &str {
        &self.institution
    }

    /// The denominator.
    pub fn routing_symbol(&self) -> &str {
        &self.routing_symbol
    }

    /// The parsed parts after the prefix, joined without whitespace, e.g. `-345/6789`.
    pub fn suffix(&self) -> String {
        format!("-{}/{}", self.institution, self.routing_symbol)
    }

    /// The configured text after the two-digit prefix, whitespace included.
    pub fn after_prefix(&self) -> &str {
        // The parser guarantees two leading ASCII digits.
        &self.raw[2..]
    }

    /// The fraction exactly as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Fraction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Byte cursor over ASCII grammar input.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consumes between `min` and `max` ASCII digits, as many as available.
    fn digits(&mut self, min: usize, max: usize) -> Option<&'a str> {
        let start = self.pos;
        while self.pos - start < max && self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos - start < min {
            return None;
        }
        Some(&self.input[start..self.pos])
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn consume(&mut self, byte: u8) -> Option<()> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Some(())
        } else {
            None
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos == self.input.len()
    }
}
