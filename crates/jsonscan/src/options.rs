/// How `\uXXXX` escapes are written into string tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnicodeEscapeMode {
    /// Fold the hex digits directly into output code units.
    ///
    /// Narrow (`u8`) scanners flush one unit per two hex digits, so
    /// `\u4179` becomes the two bytes `A` `y`. Wide scanners flush one unit
    /// per escape, equal to the escaped value; for `u16` this preserves
    /// surrogate pairs as written. No validation of the escaped value is
    /// performed.
    #[default]
    CodeUnits,
    /// Decode each escape to a Unicode scalar value and encode it in the
    /// scanner's unit type (UTF-8, UTF-16 or UTF-32).
    ///
    /// A high surrogate escape must be immediately followed by a low
    /// surrogate escape; the pair is merged into one scalar. Unpaired
    /// surrogates are reported as [`ErrorKind::UnpairedSurrogate`].
    ///
    /// [`ErrorKind::UnpairedSurrogate`]: crate::ErrorKind::UnpairedSurrogate
    Transcode,
}

/// Configuration options for the scanner.
///
/// Options are fixed for the lifetime of a [`Scanner`](crate::Scanner).
///
/// # Examples
///
/// ```rust
/// use jsonscan::{Scanner, ScannerOptions, Token, UnicodeEscapeMode};
///
/// let options = ScannerOptions {
///     unicode_escapes: UnicodeEscapeMode::Transcode,
///     ..Default::default()
/// };
/// let mut scanner = Scanner::with_options(r#""\u00e9""#.as_bytes(), options);
/// assert_eq!(scanner.extract().unwrap(), &Token::string("é".as_bytes()));
/// ```
///
/// # Default
///
/// All flags default to `false` and escapes default to
/// [`UnicodeEscapeMode::CodeUnits`].
#[derive(Debug, Clone, Copy, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScannerOptions {
    /// How `\uXXXX` escapes are decoded.
    pub unicode_escapes: UnicodeEscapeMode,

    /// Whether to skip any Unicode whitespace between tokens.
    ///
    /// By default, only the four whitespace characters defined by JSON are
    /// skipped: space (U+0020), line feed (U+000A), carriage return (U+000D)
    /// and horizontal tab (U+0009). Narrow scanners only see single bytes,
    /// so for them this adds just the ASCII vertical tab and form feed.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    /// Whether raw control characters (U+0000 through U+001F) inside a
    /// string are an error.
    ///
    /// # Default
    ///
    /// `false`: control characters are copied into the token verbatim.
    pub reject_control_characters: bool,

    /// Whether numbers may carry redundant leading zeros, e.g. `007`.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_leading_zeros: bool,

    /// Whether numbers may start with `+`.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_plus_sign: bool,
}
