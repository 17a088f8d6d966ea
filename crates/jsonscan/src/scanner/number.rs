//! Number sub-scanner.
//!
//! Recognizes `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?` and
//! keeps the lexeme verbatim as the token text; converting it to a numeric
//! value is left to the caller. The number ends at the first unit that
//! cannot continue it, which is left unconsumed.

use super::Scanner;
use crate::{CodeUnit, ErrorKind, ScanError, TokenKind, convert::dec_digit_value_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Start,
    Sign,
    Zero,
    Integer,
    Point,
    Fraction,
    Exponent,
    ExponentSign,
    ExponentInteger,
}

impl NumberState {
    /// States in which the lexeme read so far is a complete number.
    fn is_accepting(self) -> bool {
        matches!(
            self,
            Self::Zero | Self::Integer | Self::Fraction | Self::ExponentInteger
        )
    }
}

impl<U: CodeUnit> Scanner<'_, U> {
    pub(super) fn scan_number(&mut self) -> Result<(), ScanError> {
        use NumberState::*;

        self.token.reset(TokenKind::Number);
        let mut state = Start;

        loop {
            let Some(unit) = self.peek() else {
                if state.is_accepting() {
                    return Ok(());
                }
                return Err(self.error_here(ErrorKind::UnterminatedNumber));
            };
            let digit = dec_digit_value_of(unit);
            let c = unit.to_char();

            state = match (state, c, digit) {
                (Start, Some('-' | '+'), _) => Sign,
                (Start | Sign, _, Some(0)) => Zero,
                (Start | Sign, _, Some(_)) => Integer,

                (Zero, _, Some(d)) => {
                    if !self.options.allow_leading_zeros {
                        return Err(self.invalid(ErrorKind::InvalidNumber(char::from(b'0' + d))));
                    }
                    Integer
                }
                (Zero | Integer, Some('.'), _) => Point,
                (Zero | Integer | Fraction, Some('e' | 'E'), _) => Exponent,
                (Integer, _, Some(_)) => {
                    self.consume_digits();
                    continue;
                }

                (Point, _, Some(_)) => Fraction,
                (Fraction, _, Some(_)) => {
                    self.consume_digits();
                    continue;
                }

                (Exponent, Some('+' | '-'), _) => ExponentSign,
                (Exponent | ExponentSign, _, Some(_)) => ExponentInteger,
                (ExponentInteger, _, Some(_)) => {
                    self.consume_digits();
                    continue;
                }

                (s, _, _) if s.is_accepting() => return Ok(()),
                _ => return Err(self.invalid(ErrorKind::InvalidNumber(unit.to_char_lossy()))),
            };
            self.consume();
        }
    }

    /// Digit runs never contain a line feed, so only the column moves.
    fn consume_digits(&mut self) {
        let rest = &self.input[self.pos..];
        let len = rest
            .iter()
            .position(|&u| dec_digit_value_of(u).is_none())
            .unwrap_or(rest.len());
        self.token.text.extend_from_slice(&rest[..len]);
        self.pos += len;
        self.column += len;
    }
}
