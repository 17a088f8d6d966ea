//! Digit converters shared by the string and number sub-scanners.
//!
//! Both converters are total: anything that is not a digit of the requested
//! radix yields `None`, and the caller decides whether that is an error.

use crate::CodeUnit;

/// Convert a single ASCII hex digit into its 0..=15 value.
#[inline]
#[must_use]
pub fn hex_digit_value(unit: u32) -> Option<u8> {
    match unit {
        0x30..=0x39 => Some((unit - 0x30) as u8),
        0x61..=0x66 => Some((unit - 0x61 + 10) as u8),
        0x41..=0x46 => Some((unit - 0x41 + 10) as u8),
        _ => None,
    }
}

/// Convert a single ASCII decimal digit into its 0..=9 value.
#[inline]
#[must_use]
pub fn dec_digit_value(unit: u32) -> Option<u8> {
    match unit {
        0x30..=0x39 => Some((unit - 0x30) as u8),
        _ => None,
    }
}

/// [`hex_digit_value`] for any code unit type.
#[inline]
#[must_use]
pub fn hex_digit_value_of<U: CodeUnit>(unit: U) -> Option<u8> {
    hex_digit_value(unit.to_u32())
}

/// [`dec_digit_value`] for any code unit type.
#[inline]
#[must_use]
pub fn dec_digit_value_of<U: CodeUnit>(unit: U) -> Option<u8> {
    dec_digit_value(unit.to_u32())
}
