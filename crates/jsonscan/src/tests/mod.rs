mod property_cursor;
mod property_whitespace;

use alloc::vec::Vec;

use crate::{CodeUnit, ScanError, Scanner, ScannerOptions, Token};

/// Scans all of `input`, stopping at the first error.
pub(crate) fn scan_units<U: CodeUnit>(
    input: &[U],
    options: ScannerOptions,
) -> Result<Vec<Token<U>>, ScanError> {
    Scanner::with_options(input, options).collect()
}

pub(crate) fn scan(input: &str) -> Result<Vec<Token<u8>>, ScanError> {
    scan_units(input.as_bytes(), ScannerOptions::default())
}

pub(crate) fn quickcheck_tests() -> u64 {
    if cfg!(any(feature = "test-fast", miri)) {
        50
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}
