//! Benchmark: `jsonscan::Scanner` over narrow and wide input.
#![allow(missing_docs)]

use std::{fmt::Write, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use jsonscan::{CodeUnit, Scanner, ScannerOptions, UnicodeEscapeMode};

/// Builds a deterministic array of small records at least `target_len`
/// bytes long. Every record mixes plain strings, escapes, numbers and
/// literals so each sub-scanner gets exercised.
fn make_json_payload(target_len: usize) -> String {
    let mut s = String::with_capacity(target_len + 128);
    s.push('[');
    let mut id = 0usize;
    while s.len() < target_len {
        if id > 0 {
            s.push(',');
        }
        write!(
            s,
            r#"{{"id":{id},"name":"item {id}","tags":["a\tb","\u00e9"],"ok":true,"v":-1.5e3,"next":null}}"#
        )
        .unwrap();
        id += 1;
    }
    s.push(']');
    s
}

/// Scans `input` to the end and returns the number of tokens.
fn count_tokens<U: CodeUnit>(input: &[U], options: ScannerOptions) -> usize {
    let mut scanner = Scanner::with_options(input, options);
    let mut count = 0usize;
    while scanner.has_more() {
        let token = scanner.extract().unwrap();
        if !token.is_end() {
            count += 1;
        }
    }
    count
}

fn bench_scanner(c: &mut Criterion) {
    let payload = make_json_payload(100_000);
    let wide: Vec<u16> = payload.encode_utf16().collect();
    let widest: Vec<u32> = payload.chars().map(u32::from).collect();

    let mut group = c.benchmark_group("scanner");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    for mode in [UnicodeEscapeMode::CodeUnits, UnicodeEscapeMode::Transcode] {
        let options = ScannerOptions {
            unicode_escapes: mode,
            ..Default::default()
        };
        let name = format!("{mode:?}").to_lowercase();

        group.bench_with_input(BenchmarkId::new("u8", &name), &options, |b, &o| {
            b.iter(|| black_box(count_tokens(black_box(payload.as_bytes()), o)));
        });
        group.bench_with_input(BenchmarkId::new("u16", &name), &options, |b, &o| {
            b.iter(|| black_box(count_tokens(black_box(&wide), o)));
        });
        group.bench_with_input(BenchmarkId::new("u32", &name), &options, |b, &o| {
            b.iter(|| black_box(count_tokens(black_box(&widest), o)));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_scanner }
criterion_main!(benches);
