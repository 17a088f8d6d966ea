#![allow(missing_docs, dead_code)]
#![allow(clippy::needless_raw_string_hashes)]

use jsonscan::{CodeUnit, Scanner, ScannerOptions, Token, UnicodeEscapeMode};

pub const DOCUMENT: &str = r#"
{
    "name": "jsonscan",
    "tags": ["lexer", "json"],
    "version": -1.25e+2,
    "stable": false,
    "parent": null,
    "escaped": "quote\" slash\/ \u00e9",
    "nested": [{}, [], {"k": 0}]
}
"#;

/// Same content as `DOCUMENT` with no insignificant whitespace.
pub const COMPACT: &str = r#"{"name":"jsonscan","tags":["lexer","json"],"version":-1.25e+2,"stable":false,"parent":null,"escaped":"quote\" slash\/ \u00e9","nested":[{},[],{"k":0}]}"#;

pub fn transcode() -> ScannerOptions {
    ScannerOptions {
        unicode_escapes: UnicodeEscapeMode::Transcode,
        ..Default::default()
    }
}

/// Scans `input` to the end, panicking on the first error.
pub fn scan_all<U: CodeUnit>(input: &[U], options: ScannerOptions) -> Vec<Token<U>> {
    Scanner::with_options(input, options)
        .collect::<Result<_, _>>()
        .expect("scan error")
}

pub fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

pub fn utf32(s: &str) -> Vec<u32> {
    s.chars().map(u32::from).collect()
}
