//! Accumulator for the four hex digits of a `\uXXXX` escape.
//!
//! In [`UnicodeEscapeMode::CodeUnits`] the accumulator is flushed into an
//! output unit every [`CodeUnit::HEX_DIGITS_PER_FLUSH`] digits: twice per
//! escape for narrow units, once for wide ones.
//!
//! In [`UnicodeEscapeMode::Transcode`] the four digits form one UTF-16 code
//! unit. High surrogates are held until the next escape supplies the low
//! half; the merged scalar is then encoded with [`CodeUnit::encode_scalar`].

use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::{CodeUnit, ErrorKind, UnicodeEscapeMode};

const DIGITS_PER_ESCAPE: u8 = 4;

#[derive(Debug)]
pub(crate) struct UnicodeEscapeBuffer<U> {
    mode: UnicodeEscapeMode,
    acc: u32,
    // Digits of the current escape, 0..=4.
    digits: u8,
    // Digits folded into `acc` since the last flush.
    since_flush: u8,
    pending_high: Option<u32>,
    _unit: PhantomData<U>,
}

impl<U: CodeUnit> UnicodeEscapeBuffer<U> {
    pub fn new(mode: UnicodeEscapeMode) -> Self {
        Self {
            mode,
            acc: 0,
            digits: 0,
            since_flush: 0,
            pending_high: None,
            _unit: PhantomData,
        }
    }

    /// Prepares for the digits of a new escape. A pending high surrogate is
    /// kept.
    pub fn begin(&mut self) {
        self.acc = 0;
        self.digits = 0;
        self.since_flush = 0;
    }

    /// The high surrogate waiting for its low half, if any.
    pub fn pending_surrogate(&self) -> Option<u32> {
        self.pending_high
    }

    pub fn take_pending_surrogate(&mut self) -> Option<u32> {
        self.pending_high.take()
    }

    /// Folds one hex digit (0..=15) into the escape, writing any completed
    /// units to `out`.
    ///
    /// Returns `Ok(true)` once the fourth digit has been consumed.
    pub fn feed(&mut self, digit: u8, out: &mut Vec<U>) -> Result<bool, ErrorKind> {
        debug_assert!(digit < 16);
        debug_assert!(self.digits < DIGITS_PER_ESCAPE, "escape already complete");

        self.acc = (self.acc << 4) | u32::from(digit);
        self.digits += 1;
        self.since_flush += 1;

        match self.mode {
            UnicodeEscapeMode::CodeUnits => {
                if usize::from(self.since_flush) == U::HEX_DIGITS_PER_FLUSH {
                    out.push(U::from_u32_truncating(self.acc));
                    self.acc = 0;
                    self.since_flush = 0;
                }
            }
            UnicodeEscapeMode::Transcode => {
                if self.digits == DIGITS_PER_ESCAPE {
                    let code = self.acc;
                    self.acc = 0;
                    self.since_flush = 0;
                    self.push_utf16(code, out)?;
                }
            }
        }

        Ok(self.digits == DIGITS_PER_ESCAPE)
    }

    fn push_utf16(&mut self, code: u32, out: &mut Vec<U>) -> Result<(), ErrorKind> {
        let scalar = match (self.pending_high.take(), code) {
            (None, 0xD800..=0xDBFF) => {
                self.pending_high = Some(code);
                return Ok(());
            }
            (None, 0xDC00..=0xDFFF) => return Err(ErrorKind::UnpairedSurrogate(code)),
            (None, _) => code,
            (Some(high), 0xDC00..=0xDFFF) => 0x1_0000 + ((high - 0xD800) << 10) + (code - 0xDC00),
            (Some(high), _) => return Err(ErrorKind::UnpairedSurrogate(high)),
        };
        let ch = char::from_u32(scalar).ok_or(ErrorKind::UnpairedSurrogate(code))?;
        U::encode_scalar(ch, out);
        Ok(())
    }
}
