//! Scanner: a pull-based cursor over borrowed code units.
//!
//! What it does
//! - Holds a cursor into caller-owned input and the most recently extracted
//!   [`Token`]. Each [`Scanner::extract`] call skips insignificant
//!   whitespace, recognizes exactly one token and overwrites the current
//!   token in place.
//! - Dispatches on the first significant unit: structural characters map to
//!   punctuation tokens directly; `"`, digits/`-` and `t`/`f`/`n` hand control
//!   to the string, number and literal sub-scanners, which run to completion
//!   before returning.
//!
//! Invariants
//! - The cursor never moves backwards and is never read once it reaches the
//!   end of input.
//! - On failure the cursor rests just past the offending unit (or at the
//!   end), and the current token is reset to [`TokenKind::EndOfInput`].
//! - Sub-scanner state (string mode, hex counters, number state) is local to
//!   a single `extract` call; only the token's text buffer is reused.
//!
//! Example
//! ```rust
//! use jsonscan::{Scanner, Token, TokenKind};
//!
//! let mut s = Scanner::from_str("[\"a\\tb\", -1.5e3]");
//! assert_eq!(s.extract().unwrap(), &Token::new(TokenKind::BeginArray));
//! assert_eq!(s.extract().unwrap(), &Token::string(*b"a\tb"));
//! assert_eq!(s.extract().unwrap(), &Token::new(TokenKind::ValueSeparator));
//! assert_eq!(s.extract().unwrap(), &Token::number(*b"-1.5e3"));
//! assert_eq!(s.extract().unwrap(), &Token::new(TokenKind::EndArray));
//! assert!(!s.has_more());
//! ```

mod escape_buffer;
mod literal_buffer;
mod number;
mod string;

use core::{iter::FusedIterator, mem};

use crate::{CodeUnit, ErrorKind, ScanError, ScannerOptions, Token, TokenKind};

/// A location in the input. `line` and `column` are 1-based and count code
/// units; `offset` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Code unit offset from the start of input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

/// Pull-based JSON tokenizer over a borrowed slice of code units.
///
/// Typical loop:
/// ```rust
/// use jsonscan::Scanner;
///
/// let mut scanner = Scanner::from_str("{ \"a\": null }");
/// while scanner.has_more() {
///     let token = scanner.extract().expect("valid JSON");
///     println!("{token}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'src, U: CodeUnit> {
    input: &'src [U],
    pos: usize,
    line: usize,
    column: usize,

    options: ScannerOptions,
    token: Token<U>,
    // Set once the iterator has yielded its last item.
    exhausted: bool,
}

impl<'src, U: CodeUnit> Scanner<'src, U> {
    /// Creates a scanner over `input` with default options.
    #[must_use]
    pub fn new(input: &'src [U]) -> Self {
        Self::with_options(input, ScannerOptions::default())
    }

    /// Creates a scanner over `input` with the given options.
    #[must_use]
    pub fn with_options(input: &'src [U], options: ScannerOptions) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
            options,
            token: Token::default(),
            exhausted: false,
        }
    }

    /// Returns `true` while the cursor has not reached the end of input.
    ///
    /// Trailing whitespace counts as remaining input; extracting from it
    /// yields [`TokenKind::EndOfInput`].
    #[inline]
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.pos < self.input.len()
    }

    /// The most recently extracted token.
    ///
    /// Before the first call to [`Scanner::extract`], and after a failed one,
    /// this is an empty [`TokenKind::EndOfInput`] token.
    #[inline]
    #[must_use]
    pub fn token(&self) -> &Token<U> {
        &self.token
    }

    /// The options this scanner was created with.
    #[must_use]
    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Current cursor position.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// The input not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'src [U] {
        &self.input[self.pos..]
    }

    /// Scans the next token and returns a reference to it.
    ///
    /// The returned token is overwritten by the next call; clone it or use
    /// [`Scanner::next_token`] to keep it.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] when the input at the cursor is not a valid
    /// token. The scanner may be resumed after an error; scanning continues
    /// after the offending unit.
    pub fn extract(&mut self) -> Result<&Token<U>, ScanError> {
        match self.scan() {
            Ok(()) => {
                tracing::trace!(kind = %self.token.kind, offset = self.pos, "token");
                Ok(&self.token)
            }
            Err(err) => {
                self.token.reset(TokenKind::EndOfInput);
                tracing::debug!(error = %err, offset = err.offset, "scan failed");
                Err(err)
            }
        }
    }

    /// Scans the next token and moves it out of the scanner.
    ///
    /// # Errors
    ///
    /// See [`Scanner::extract`].
    pub fn next_token(&mut self) -> Result<Token<U>, ScanError> {
        self.extract()?;
        Ok(mem::take(&mut self.token))
    }

    fn scan(&mut self) -> Result<(), ScanError> {
        loop {
            let Some(unit) = self.peek() else {
                self.token.reset(TokenKind::EndOfInput);
                return Ok(());
            };

            match unit.to_char() {
                Some(c) if self.is_whitespace(c) => {
                    self.advance();
                }
                Some(c @ ('{' | '}' | '[' | ']' | ',' | ':')) => {
                    self.advance();
                    if let Some(kind) = TokenKind::from_punctuator(c) {
                        self.token.reset(kind);
                    }
                    return Ok(());
                }
                Some('"') => {
                    self.advance();
                    return self.scan_string();
                }
                Some('-' | '0'..='9') => return self.scan_number(),
                Some('+') if self.options.allow_plus_sign => return self.scan_number(),
                Some(c @ ('t' | 'f' | 'n')) => return self.scan_literal(c),
                _ => {
                    return Err(self.invalid(ErrorKind::UnexpectedCharacter(unit.to_char_lossy())));
                }
            }
        }
    }

    #[inline]
    fn is_whitespace(&self, c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\r')
            || (self.options.allow_unicode_whitespace && c.is_whitespace())
    }

    #[inline]
    fn peek(&self) -> Option<U> {
        self.input.get(self.pos).copied()
    }

    #[inline]
    fn advance(&mut self) -> Option<U> {
        let unit = self.peek()?;
        self.pos += 1;
        if unit.to_u32() == u32::from(b'\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(unit)
    }

    /// Consumes the unit at the cursor and pushes it onto the token text.
    #[inline]
    fn consume(&mut self) {
        if let Some(unit) = self.advance() {
            self.token.append(unit);
        }
    }

    /// Builds an error at the cursor without moving it.
    fn error_here(&self, kind: ErrorKind) -> ScanError {
        ScanError {
            kind,
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Builds an error at the cursor, then steps past the offending unit.
    fn invalid(&mut self, kind: ErrorKind) -> ScanError {
        let err = self.error_here(kind);
        self.advance();
        err
    }
}

impl<'src> Scanner<'src, u8> {
    /// Creates a narrow scanner over the UTF-8 bytes of `input`.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(input: &'src str) -> Self {
        Self::new(input.as_bytes())
    }
}

/// Yields tokens until [`TokenKind::EndOfInput`], which is not yielded.
/// After an error is yielded the iterator is finished.
impl<U: CodeUnit> Iterator for Scanner<'_, U> {
    type Item = Result<Token<U>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_end() => {
                self.exhausted = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }
}

impl<U: CodeUnit> FusedIterator for Scanner<'_, U> {}
