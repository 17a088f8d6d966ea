use quickcheck::QuickCheck;

use super::{arbitrary::JsonishBytes, quickcheck_tests};
use crate::{Scanner, ScannerOptions, UnicodeEscapeMode};

/// Property: on arbitrary bytes the scanner never panics, `has_more` has no
/// side effects, the cursor only moves forward and every extraction either
/// reaches the end or consumes at least one unit. The line number always
/// equals one plus the line feeds consumed.
#[test]
fn cursor_always_makes_progress() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: JsonishBytes, transcode: bool, strict: bool) -> bool {
        let input = input.0;
        let options = ScannerOptions {
            unicode_escapes: if transcode {
                UnicodeEscapeMode::Transcode
            } else {
                UnicodeEscapeMode::CodeUnits
            },
            reject_control_characters: strict,
            ..Default::default()
        };
        let mut scanner = Scanner::with_options(&input, options);

        for _ in 0..=input.len() {
            let before = scanner.position();
            let more = scanner.has_more();
            if scanner.has_more() != more || scanner.position() != before {
                return false;
            }

            let result = scanner.extract().map(|t| t.is_end());
            let after = scanner.position();
            let newlines = input[..after.offset].iter().filter(|&&b| b == b'\n').count();
            if after.offset < before.offset || after.line != newlines + 1 {
                return false;
            }

            match result {
                Ok(true) => return !scanner.has_more(),
                _ if after.offset == before.offset => return false,
                _ => {}
            }
        }

        false
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(JsonishBytes, bool, bool) -> bool);
}
