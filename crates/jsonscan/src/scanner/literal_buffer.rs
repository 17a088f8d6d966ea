use super::Scanner;
use crate::{CodeUnit, ErrorKind, ScanError, TokenKind};

/// What happened after feeding one more unit into the literal matcher?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Unit matched, but the literal is not finished yet.
    NeedMore,
    /// Unit matched *and* it was the last byte of the literal.
    Done,
    /// Unit did **not** match the expected byte.
    Reject,
}

/// The bytes of `true`, `false` or `null` still expected after the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ExpectedLiteral {
    rest: &'static [u8],
    kind: TokenKind,
}

impl ExpectedLiteral {
    /// Starts matching after the *first* character (`n`, `t`, or `f`).
    pub fn new(first: char) -> Option<Self> {
        let (rest, kind): (&'static [u8], _) = match first {
            'n' => (&b"ull"[..], TokenKind::Null),
            't' => (&b"rue"[..], TokenKind::True),
            'f' => (&b"alse"[..], TokenKind::False),
            _ => return None,
        };
        Some(Self { rest, kind })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gives the matcher the next input unit.
    pub fn step(&mut self, unit: u32) -> Step {
        match self.rest.split_first() {
            Some((&expected, rest)) if u32::from(expected) == unit => {
                self.rest = rest;
                if rest.is_empty() {
                    Step::Done
                } else {
                    Step::NeedMore
                }
            }
            _ => Step::Reject,
        }
    }
}

impl<U: CodeUnit> Scanner<'_, U> {
    pub(super) fn scan_literal(&mut self, first: char) -> Result<(), ScanError> {
        let Some(mut expected) = ExpectedLiteral::new(first) else {
            return Err(self.invalid(ErrorKind::UnexpectedCharacter(first)));
        };
        self.token.reset(expected.kind());
        self.consume();

        loop {
            let Some(unit) = self.peek() else {
                return Err(self.error_here(ErrorKind::UnterminatedLiteral));
            };
            match expected.step(unit.to_u32()) {
                Step::NeedMore => self.consume(),
                Step::Done => {
                    self.consume();
                    return Ok(());
                }
                Step::Reject => {
                    return Err(self.invalid(ErrorKind::InvalidLiteral(unit.to_char_lossy())));
                }
            }
        }
    }
}
