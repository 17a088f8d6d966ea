//! Fixed-width code units the scanner reads and writes.
//!
//! A [`Scanner`](crate::Scanner) is monomorphized over one unit type; the
//! width of that type is a compile-time constant, so the choice between the
//! narrow and the wide `\uXXXX` flush strategy is made once per
//! instantiation rather than per character.

use alloc::{string::String, vec::Vec};
use core::{char::REPLACEMENT_CHARACTER, fmt::Debug, hash::Hash};

use bstr::ByteSlice;

/// A fixed-width storage unit of some text encoding.
///
/// Implemented for `u8` (UTF-8 or any byte-oriented encoding), `u16`
/// (UTF-16) and `u32` (UTF-32).
pub trait CodeUnit: Copy + Eq + Ord + Hash + Debug + 'static {
    /// Storage width in bytes.
    const WIDTH: usize;

    /// Number of hex digits of a `\uXXXX` escape folded into a single output
    /// unit when escapes are written as raw code units.
    const HEX_DIGITS_PER_FLUSH: usize = if Self::WIDTH == 1 { 2 } else { 4 };

    /// Numeric value of this unit.
    fn to_u32(self) -> u32;

    /// Builds a unit from `value`, discarding bits beyond the unit width.
    fn from_u32_truncating(value: u32) -> Self;

    /// Appends the encoding of `ch` in this unit's natural encoding.
    fn encode_scalar(ch: char, out: &mut Vec<Self>);

    /// Decodes `units`, substituting U+FFFD for anything malformed.
    fn decode_lossy(units: &[Self]) -> String;

    /// Builds a unit from an ASCII byte.
    #[inline]
    fn from_ascii(byte: u8) -> Self {
        debug_assert!(byte.is_ascii());
        Self::from_u32_truncating(u32::from(byte))
    }

    /// The character this single unit stands for, if it is a complete scalar
    /// value on its own.
    #[inline]
    fn to_char(self) -> Option<char> {
        let value = self.to_u32();
        if Self::WIDTH == 1 && value >= 0x80 {
            return None;
        }
        char::from_u32(value)
    }

    /// Like [`CodeUnit::to_char`], but maps partial units to U+FFFD. Used for
    /// diagnostics.
    #[inline]
    fn to_char_lossy(self) -> char {
        self.to_char().unwrap_or(REPLACEMENT_CHARACTER)
    }
}

impl CodeUnit for u8 {
    const WIDTH: usize = 1;

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from_u32_truncating(value: u32) -> Self {
        value as u8
    }

    #[inline]
    fn encode_scalar(ch: char, out: &mut Vec<Self>) {
        let mut tmp = [0u8; 4];
        out.extend_from_slice(ch.encode_utf8(&mut tmp).as_bytes());
    }

    fn decode_lossy(units: &[Self]) -> String {
        units.to_str_lossy().into_owned()
    }
}

impl CodeUnit for u16 {
    const WIDTH: usize = 2;

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from_u32_truncating(value: u32) -> Self {
        value as u16
    }

    #[inline]
    fn encode_scalar(ch: char, out: &mut Vec<Self>) {
        let mut tmp = [0u16; 2];
        out.extend_from_slice(ch.encode_utf16(&mut tmp));
    }

    fn decode_lossy(units: &[Self]) -> String {
        char::decode_utf16(units.iter().copied())
            .map(|r| r.unwrap_or(REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl CodeUnit for u32 {
    const WIDTH: usize = 4;

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }

    #[inline]
    fn from_u32_truncating(value: u32) -> Self {
        value
    }

    #[inline]
    fn encode_scalar(ch: char, out: &mut Vec<Self>) {
        out.push(u32::from(ch));
    }

    fn decode_lossy(units: &[Self]) -> String {
        units
            .iter()
            .map(|&u| char::from_u32(u).unwrap_or(REPLACEMENT_CHARACTER))
            .collect()
    }
}
