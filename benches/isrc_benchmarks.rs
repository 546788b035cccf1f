#![allow(missing_docs)]
//! Benchmarks for ISRC parsing and allocation lookup.
//!
//! Uses Criterion.rs for statistical analysis.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iso3901::{Allocation, Isrc};

const CODES: &[&str] = &[
    "NLA508700208",
    "HU-A25-12-32713",
    "ISRC FROV65736517",
    "gbbbb9905305",
    "US-DO1-98-00058",
    "JPA840501147",
];

/// Benchmark parsing a mix of compact, hyphenated and labelled codes.
fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse_mixed_forms", |b| {
        b.iter(|| {
            for code in CODES {
                let _ = black_box(Isrc::parse(black_box(code)));
            }
        });
    });
}

/// Benchmark rejecting malformed input.
fn benchmark_validate_invalid(c: &mut Criterion) {
    c.bench_function("validate_invalid", |b| {
        b.iter(|| {
            black_box(Isrc::validate(black_box("QX1234567890")))
                | black_box(Isrc::validate(black_box("ZZ-ZZZ-12?34567")))
        });
    });
}

/// Benchmark formatting in both styles.
fn benchmark_stringify(c: &mut Criterion) {
    let isrc = Isrc::new("USDO1", 98, 58);
    c.bench_function("stringify", |b| {
        b.iter(|| (black_box(&isrc).stringify(true), black_box(&isrc).to_string()));
    });
}

/// Benchmark prefix lookups over the whole table.
fn benchmark_lookup_all(c: &mut Criterion) {
    let prefixes: Vec<&str> = Allocation::all().map(|entry| entry.prefix).collect();
    c.bench_function("lookup_all_prefixes", |b| {
        b.iter(|| {
            prefixes
                .iter()
                .filter(|prefix| Allocation::lookup(black_box(prefix)).is_some())
                .count()
        });
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_validate_invalid,
    benchmark_stringify,
    benchmark_lookup_all
);
criterion_main!(benches);
