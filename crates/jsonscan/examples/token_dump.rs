//! Prints the token stream of a JSON file, one token per line, with the
//! cursor position after each token.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonscan --example token_dump -- path/to/file.json
//! echo '{"a": [1, true]}' | cargo run -p jsonscan --example token_dump
//! ```
//!
//! Flags: `--wide` scans UTF-16 code units instead of bytes, `--transcode`
//! decodes `\uXXXX` escapes to real characters. Set `RUST_LOG=jsonscan=trace`
//! to see the scanner's own trace output.

use std::{
    env, fs,
    io::{self, Read},
    process::ExitCode,
};

use jsonscan::{CodeUnit, Scanner, ScannerOptions, UnicodeEscapeMode};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn dump<U: CodeUnit>(input: &[U], options: ScannerOptions) -> usize {
    let mut scanner = Scanner::with_options(input, options);
    let mut errors = 0;
    while scanner.has_more() {
        match scanner.extract() {
            Ok(token) if token.is_end() => break,
            Ok(token) => {
                let token = token.to_string();
                let at = scanner.position();
                println!("{:>4}:{:<4} {token}", at.line, at.column);
            }
            Err(err) => {
                eprintln!("error: {err}");
                errors += 1;
            }
        }
    }
    errors
}

fn main() -> ExitCode {
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }

    let mut wide = false;
    let mut options = ScannerOptions::default();
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--wide" => wide = true,
            "--transcode" => options.unicode_escapes = UnicodeEscapeMode::Transcode,
            _ => path = Some(arg),
        }
    }

    let text = match path {
        Some(path) => fs::read_to_string(&path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map(|_| buf)
        }
    };
    let text = match text {
        Ok(text) => text,
        Err(err) => {
            eprintln!("failed to read input: {err}");
            return ExitCode::FAILURE;
        }
    };

    let errors = if wide {
        let units: Vec<u16> = text.encode_utf16().collect();
        dump(&units, options)
    } else {
        dump(text.as_bytes(), options)
    };

    if errors == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
