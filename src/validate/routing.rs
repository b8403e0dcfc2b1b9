//! Routing number parsing and the check-digit cross-validation against
//! the configured fraction.
//!
//! A routing number is nine digits. The first four are the routing
//! symbol, the next four the institution number, and the last is a check
//! digit over the first eight with weights `3 7 1 3 7 1 3 7`. On the MICR
//! line it is wrapped in transit symbols, written `R` in configuration:
//! `R021000021R`.

use std::fmt;

use super::fraction::Fraction;
use super::ValidationError;

/// Transit symbol placeholder wrapping the routing number.
pub const TRANSIT_SENTINEL: char = 'R';

const WEIGHTS: [u32; 8] = [3, 7, 1, 3, 7, 1, 3, 7];

/// Checks the loose MICR shape: `R`, one or more digits, `R`.
pub fn check_routing_format(micr: &str) -> Result<(), ValidationError> {
    let digits = micr
        .strip_prefix(TRANSIT_SENTINEL)
        .and_then(|rest| rest.strip_suffix(TRANSIT_SENTINEL));
    match digits {
        Some(d) if !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()) => Ok(()),
        _ => Err(ValidationError::InvalidRoutingFormat(micr.to_string())),
    }
}

/// A nine-digit routing number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingNumber {
    digits: [u8; 9],
}

impl RoutingNumber {
    /// Extracts the routing number from its `R`-wrapped MICR form.
    pub fn from_micr(micr: &str) -> Result<Self, ValidationError> {
        if micr.chars().count() != 11 {
            return Err(ValidationError::InvalidRoutingLength(micr.to_string()));
        }
        let payload = micr
            .strip_prefix(TRANSIT_SENTINEL)
            .and_then(|rest| rest.strip_suffix(TRANSIT_SENTINEL))
            .ok_or_else(|| ValidationError::InvalidRoutingSentinels(micr.to_string()))?;

        let mut digits = [0u8; 9];
        for (slot, byte) in digits.iter_mut().zip(payload.bytes()) {
            if !byte.is_ascii_digit() {
                return Err(ValidationError::InvalidRoutingFormat(micr.to_string()));
            }
            *slot = byte - b'0';
        }
        Ok(Self { digits })
    }

    /// The check digit implied by the first eight digits.
    pub fn expected_check_digit(&self) -> u8 {
        let sum: u32 = self.digits[..8]
            .iter()
            .zip(WEIGHTS)
            .map(|(&d, w)| u32::from(d) * w)
            .sum();
        ((10 - sum % 10) % 10) as u8
    }

    /// The ninth digit as written.
    pub fn check_digit(&self) -> u8 {
        self.digits[8]
    }

    /// First four digits with at most one leading zero removed.
    pub fn routing_symbol(&self) -> String {
        let symbol = digit_string(&self.digits[0..4]);
        match symbol.strip_prefix('0') {
            Some(rest) => rest.to_string(),
            None => symbol,
        }
    }

    /// Digits five to eight with every leading zero removed.
    pub fn institution(&self) -> String {
        digit_string(&self.digits[4..8])
            .trim_start_matches('0')
            .to_string()
    }

    /// The fraction text expected after the two-digit prefix.
    pub fn fraction_suffix(&self) -> String {
        format!("-{}/{}", self.institution(), self.routing_symbol())
    }

    /// Requires the configured fraction, past its two-digit prefix, to be
    /// exactly `-{institution}/{routing symbol}`.
    pub fn verify_fraction(&self, fraction: &Fraction) -> Result<(), ValidationError> {
        let expected = self.fraction_suffix();
        if fraction.after_prefix() != expected {
            return Err(ValidationError::InvalidRoutingFraction {
                routing: self.to_string(),
                expected,
                actual: fraction.to_string(),
            });
        }
        Ok(())
    }

    pub fn verify_checksum(&self) -> Result<(), ValidationError> {
        let expected = self.expected_check_digit();
        if expected != self.check_digit() {
            return Err(ValidationError::InvalidRoutingChecksum {
                routing: self.to_string(),
                expected,
                actual: self.check_digit(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for RoutingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&digit_string(&self.digits))
    }
}

fn digit_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// Cross-validates a MICR routing number against its fraction and checks
/// its check digit.
pub fn check_routing_number(micr: &str, fraction: &Fraction) -> Result<RoutingNumber, ValidationError> {
    let routing = RoutingNumber::from_micr(micr)?;
    routing.verify_fraction(fraction)?;
    routing.verify_checksum()?;
    Ok(routing)
}
