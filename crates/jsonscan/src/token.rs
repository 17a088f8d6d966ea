use alloc::{string::String, vec::Vec};
use core::fmt;

use bstr::BStr;

use crate::CodeUnit;

/// The closed set of token kinds the scanner produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// `{`
    BeginObject,
    /// `}`
    EndObject,
    /// `[`
    BeginArray,
    /// `]`
    EndArray,
    /// `,`
    ValueSeparator,
    /// `:`
    KeyValueSeparator,
    /// A quoted string; the text is the decoded content without quotes.
    String,
    /// A number; the text is the lexeme exactly as written.
    Number,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// Input is exhausted and no further token was found.
    #[default]
    EndOfInput,
}

impl TokenKind {
    /// Maps a structural character to its punctuation kind.
    #[must_use]
    pub fn from_punctuator(c: char) -> Option<Self> {
        match c {
            '{' => Some(Self::BeginObject),
            '}' => Some(Self::EndObject),
            '[' => Some(Self::BeginArray),
            ']' => Some(Self::EndArray),
            ',' => Some(Self::ValueSeparator),
            ':' => Some(Self::KeyValueSeparator),
            _ => None,
        }
    }

    /// Returns `true` for the six single-character structural kinds.
    #[must_use]
    pub fn is_punctuator(self) -> bool {
        matches!(
            self,
            Self::BeginObject
                | Self::EndObject
                | Self::BeginArray
                | Self::EndArray
                | Self::ValueSeparator
                | Self::KeyValueSeparator
        )
    }

    /// Returns `true` for kinds that start or are a complete JSON value.
    #[must_use]
    pub fn is_value_start(self) -> bool {
        matches!(
            self,
            Self::BeginObject
                | Self::BeginArray
                | Self::String
                | Self::Number
                | Self::True
                | Self::False
                | Self::Null
        )
    }

    fn name(self) -> &'static str {
        match self {
            Self::BeginObject => "beginObject",
            Self::EndObject => "endObject",
            Self::BeginArray => "beginArray",
            Self::EndArray => "endArray",
            Self::ValueSeparator => "valueSeparator",
            Self::KeyValueSeparator => "keyValueSeparator",
            Self::String => "string",
            Self::Number => "number",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::EndOfInput => "endOfInput",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexical unit: a kind and its payload text.
///
/// The text is empty for punctuation and [`TokenKind::EndOfInput`]. Two
/// tokens are equal when both the kind and the text match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token<U: CodeUnit> {
    /// What was scanned.
    pub kind: TokenKind,
    /// Decoded payload, in the scanner's code units.
    pub text: Vec<U>,
}

/// An empty [`TokenKind::EndOfInput`] token.
impl<U: CodeUnit> Default for Token<U> {
    fn default() -> Self {
        Self::new(TokenKind::EndOfInput)
    }
}

impl<U: CodeUnit> Token<U> {
    /// A token of `kind` with empty text.
    #[must_use]
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            text: Vec::new(),
        }
    }

    /// A token of `kind` carrying `text`.
    pub fn with_text(kind: TokenKind, text: impl Into<Vec<U>>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// A [`TokenKind::String`] token.
    pub fn string(text: impl Into<Vec<U>>) -> Self {
        Self::with_text(TokenKind::String, text)
    }

    /// A [`TokenKind::Number`] token.
    pub fn number(text: impl Into<Vec<U>>) -> Self {
        Self::with_text(TokenKind::Number, text)
    }

    /// Appends a single unit to the payload.
    pub fn append(&mut self, unit: U) {
        self.text.push(unit);
    }

    /// Returns `true` for [`TokenKind::EndOfInput`].
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// The payload decoded for display, with U+FFFD for malformed units.
    #[must_use]
    pub fn text_lossy(&self) -> String {
        U::decode_lossy(&self.text)
    }

    pub(crate) fn reset(&mut self, kind: TokenKind) {
        self.kind = kind;
        self.text.clear();
    }
}

impl Token<u8> {
    /// Views a narrow payload as a byte string. Narrow `\uXXXX` escapes may
    /// produce bytes that are not UTF-8.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(&self.text)
    }
}

impl<U: CodeUnit> fmt::Display for Token<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String | TokenKind::Number => {
                write!(f, "{}={}", self.kind, self.text_lossy())
            }
            kind => fmt::Display::fmt(&kind, f),
        }
    }
}
