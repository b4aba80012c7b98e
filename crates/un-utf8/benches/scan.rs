//! Benchmark – `un_utf8::Scanner`
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use un_utf8::{CodePointEntry, CodePointTable, Scanner};

/// A table naming every code point in `0..count`.
fn make_table(count: u32) -> CodePointTable {
    (0..count)
        .map(|code| CodePointEntry::new(code, format!("CODE POINT {code:X}")).expect("short name"))
        .collect()
}

/// Deterministic input of exactly `target_len` bytes cycling through all four
/// tiers, with a malformed byte every 64 bytes.
fn make_payload(target_len: usize) -> Vec<u8> {
    const SAMPLE: &str = "a\u{e9}\u{20ac}\u{1f600}";
    let mut out = Vec::with_capacity(target_len + 4);
    while out.len() < target_len {
        if out.len() % 64 == 63 {
            out.push(0xFF);
        } else {
            out.extend_from_slice(SAMPLE.as_bytes());
        }
    }
    out.truncate(target_len);
    out
}

fn bench_scan(c: &mut Criterion) {
    let table = make_table(0x2_0000);
    let mut group = c.benchmark_group("scan");

    for &len in &[1_000usize, 100_000, 1_000_000] {
        let payload = make_payload(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &payload, |b, input| {
            b.iter(|| {
                let count = Scanner::new(&table, black_box(input)).count();
                black_box(count);
            });
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let table = make_table(0x2_0000);
    c.bench_function("lookup_hit_and_miss", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for code in (0..0x4_0000u32).step_by(97) {
                hits += usize::from(table.lookup(black_box(code)).is_some());
            }
            black_box(hits);
        });
    });
}

criterion_group!(benches, bench_scan, bench_lookup);
criterion_main!(benches);
