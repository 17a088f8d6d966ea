use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::{
    arbitrary::{Gap, Lexeme, render},
    quickcheck_tests, scan_units,
};
use crate::{ScannerOptions, Token, UnicodeEscapeMode};

fn transcode() -> ScannerOptions {
    ScannerOptions {
        unicode_escapes: UnicodeEscapeMode::Transcode,
        ..Default::default()
    }
}

/// Property: the token stream depends only on the lexemes, never on the
/// whitespace between them.
#[test]
fn whitespace_does_not_change_tokens() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(lexemes: Vec<Lexeme>, gaps: Vec<Gap>) -> bool {
        let expected: Vec<Token<u8>> = lexemes.iter().map(Lexeme::expected).collect();

        let spaced = render(&lexemes, &gaps);
        let compact = render(&lexemes, &[]);

        scan_units(spaced.as_bytes(), transcode()) == Ok(expected.clone())
            && scan_units(compact.as_bytes(), transcode()) == Ok(expected)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<Lexeme>, Vec<Gap>) -> bool);
}

/// Property: a UTF-16 scanner sees the same lexemes as a UTF-8 one.
#[test]
fn wide_input_matches_lexemes() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(lexemes: Vec<Lexeme>, gaps: Vec<Gap>) -> bool {
        let expected: Vec<Token<u16>> = lexemes.iter().map(Lexeme::expected).collect();
        let input: Vec<u16> = render(&lexemes, &gaps).encode_utf16().collect();
        scan_units(&input, transcode()) == Ok(expected)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<Lexeme>, Vec<Gap>) -> bool);
}
