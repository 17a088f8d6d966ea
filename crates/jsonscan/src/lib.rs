//! A pull-based JSON lexical scanner.
//!
//! The [`Scanner`] walks a borrowed slice of code units and hands out one
//! [`Token`] per [`Scanner::extract`] call: structural punctuation, decoded
//! string content, raw number lexemes and the `true`/`false`/`null` literals.
//! Assembling those tokens into a document is left to the caller.
//!
//! Code units may be narrow (`u8`) or wide (`u16`, `u32`); the width decides
//! how `\uXXXX` escapes are written into string tokens (see
//! [`UnicodeEscapeMode`]).
//!
//! ```rust
//! use jsonscan::{Scanner, Token, TokenKind};
//!
//! let mut scanner = Scanner::from_str(r#"{"key": [1, true]}"#);
//! let mut kinds = Vec::new();
//! while scanner.has_more() {
//!     let token = scanner.extract().unwrap();
//!     kinds.push(token.kind);
//! }
//! assert_eq!(kinds[0], TokenKind::BeginObject);
//! assert_eq!(kinds[1], TokenKind::String);
//! assert_eq!(kinds.last(), Some(&TokenKind::EndObject));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod code_unit;
mod convert;
mod error;
mod options;
mod scanner;
mod token;

#[cfg(test)]
mod tests;

pub use code_unit::CodeUnit;
pub use convert::{dec_digit_value, dec_digit_value_of, hex_digit_value, hex_digit_value_of};
pub use error::{ErrorKind, ScanError};
pub use options::{ScannerOptions, UnicodeEscapeMode};
pub use scanner::{Position, Scanner};
pub use token::{Token, TokenKind};
