use thiserror::Error;

/// A scan failure and where it happened.
///
/// `offset` is the index of the offending code unit; `line` and `column`
/// are 1-based and count code units.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ScanError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Code unit offset into the input.
    pub offset: usize,
    /// 1-based line.
    pub line: usize,
    /// 1-based column.
    pub column: usize,
}

/// The kinds of failure [`Scanner::extract`](crate::Scanner::extract) reports.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character after `\` that is neither a known escape nor `u`.
    #[error("invalid escape character '{0}'")]
    InvalidEscapeCharacter(char),
    /// A non-hex character inside a `\uXXXX` escape.
    #[error("invalid hex digit '{0}' in unicode escape sequence")]
    InvalidHexDigit(char),
    /// Input ended inside a string.
    #[error("unterminated string")]
    UnterminatedString,
    /// A character that cannot start a token.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// A character that cannot continue the number being scanned.
    #[error("invalid character '{0}' in number")]
    InvalidNumber(char),
    /// Input ended where the number grammar requires another digit.
    #[error("unexpected end of input in number")]
    UnterminatedNumber,
    /// A character that does not continue `true`, `false` or `null`.
    #[error("invalid character '{0}' in literal")]
    InvalidLiteral(char),
    /// Input ended inside `true`, `false` or `null`.
    #[error("unexpected end of input in literal")]
    UnterminatedLiteral,
    /// A raw control character inside a string, when rejected by options.
    #[error("control character {0:?} in string")]
    ControlCharacterInString(char),
    /// A surrogate escape without its partner, when transcoding escapes.
    #[error("unpaired surrogate \\u{0:04X}")]
    UnpairedSurrogate(u32),
}

impl ErrorKind {
    /// Returns `true` when the error was caused by running out of input, as
    /// opposed to an offending character.
    #[must_use]
    pub fn is_eof(self) -> bool {
        matches!(
            self,
            Self::UnterminatedString | Self::UnterminatedNumber | Self::UnterminatedLiteral
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_includes_position() {
        let err = ScanError {
            kind: ErrorKind::UnexpectedCharacter('x'),
            offset: 4,
            line: 2,
            column: 3,
        };
        assert_eq!(err.to_string(), "unexpected character 'x' at 2:3");
    }

    #[test]
    fn display_kinds() {
        assert_eq!(
            ErrorKind::ControlCharacterInString('\u{1}').to_string(),
            "control character '\\u{1}' in string"
        );
        assert_eq!(
            ErrorKind::UnpairedSurrogate(0xD800).to_string(),
            "unpaired surrogate \\uD800"
        );
        assert_eq!(
            ErrorKind::InvalidEscapeCharacter('q').to_string(),
            "invalid escape character 'q'"
        );
    }

    #[test]
    fn eof_kinds() {
        assert!(ErrorKind::UnterminatedString.is_eof());
        assert!(ErrorKind::UnterminatedNumber.is_eof());
        assert!(!ErrorKind::InvalidHexDigit('z').is_eof());
    }
}
