//! String sub-scanner.
//!
//! Entered after the opening `"` has been consumed; runs until the closing
//! `"` (consumed) or the end of input. Decoded content goes straight into the
//! token's text buffer.
//!
//! States
//! - `Literal`: plain units are copied verbatim; `\` enters `Escape`, `"`
//!   completes the token.
//! - `Escape`: one of `b f n r t / \ "` appends its decoded unit and returns
//!   to `Literal`; `u` enters `Hex`.
//! - `Hex`: exactly four hex digits, folded by [`UnicodeEscapeBuffer`], then
//!   back to `Literal`.

use super::{Scanner, escape_buffer::UnicodeEscapeBuffer};
use crate::{CodeUnit, ErrorKind, ScanError, TokenKind, convert::hex_digit_value_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringState {
    Literal,
    Escape,
    Hex,
}

const QUOTE: u32 = b'"' as u32;
const BACKSLASH: u32 = b'\\' as u32;

impl<U: CodeUnit> Scanner<'_, U> {
    pub(super) fn scan_string(&mut self) -> Result<(), ScanError> {
        self.token.reset(TokenKind::String);
        let mut state = StringState::Literal;
        let mut escape = UnicodeEscapeBuffer::<U>::new(self.options.unicode_escapes);

        loop {
            let Some(unit) = self.peek() else {
                return Err(self.error_here(ErrorKind::UnterminatedString));
            };

            match state {
                StringState::Literal => match unit.to_u32() {
                    BACKSLASH => {
                        self.advance();
                        state = StringState::Escape;
                    }
                    _ if escape.pending_surrogate().is_some() => {
                        // A high surrogate must be followed by another escape.
                        return Err(self.unpaired(&mut escape));
                    }
                    QUOTE => {
                        self.advance();
                        return Ok(());
                    }
                    0..0x20 => {
                        if self.options.reject_control_characters {
                            let c = unit.to_char_lossy();
                            return Err(self.invalid(ErrorKind::ControlCharacterInString(c)));
                        }
                        self.consume();
                    }
                    _ => self.copy_plain_run(),
                },

                StringState::Escape => {
                    let decoded = match unit.to_char() {
                        Some('b') => Some(0x08),
                        Some('f') => Some(0x0C),
                        Some('n') => Some(b'\n'),
                        Some('r') => Some(b'\r'),
                        Some('t') => Some(b'\t'),
                        Some('/') => Some(b'/'),
                        Some('\\') => Some(b'\\'),
                        Some('"') => Some(b'"'),
                        Some('u') => None,
                        _ => {
                            let c = unit.to_char_lossy();
                            return Err(self.invalid(ErrorKind::InvalidEscapeCharacter(c)));
                        }
                    };
                    if let Some(byte) = decoded {
                        if escape.pending_surrogate().is_some() {
                            return Err(self.unpaired(&mut escape));
                        }
                        self.advance();
                        self.token.append(U::from_ascii(byte));
                        state = StringState::Literal;
                    } else {
                        self.advance();
                        escape.begin();
                        state = StringState::Hex;
                    }
                }

                StringState::Hex => {
                    let Some(digit) = hex_digit_value_of(unit) else {
                        let c = unit.to_char_lossy();
                        return Err(self.invalid(ErrorKind::InvalidHexDigit(c)));
                    };
                    let at = self.error_here(ErrorKind::UnterminatedString);
                    self.advance();
                    match escape.feed(digit, &mut self.token.text) {
                        Ok(true) => state = StringState::Literal,
                        Ok(false) => {}
                        Err(kind) => return Err(ScanError { kind, ..at }),
                    }
                }
            }
        }
    }

    /// Copies consecutive units that need no decoding. The run cannot contain
    /// a line feed, so only the column moves.
    fn copy_plain_run(&mut self) {
        let rest = &self.input[self.pos..];
        let len = rest
            .iter()
            .position(|&u| matches!(u.to_u32(), QUOTE | BACKSLASH | 0..0x20))
            .unwrap_or(rest.len());
        self.token.text.extend_from_slice(&rest[..len]);
        self.pos += len;
        self.column += len;
    }

    fn unpaired(&mut self, escape: &mut UnicodeEscapeBuffer<U>) -> ScanError {
        let high = escape.take_pending_surrogate().unwrap_or_default();
        self.invalid(ErrorKind::UnpairedSurrogate(high))
    }
}
