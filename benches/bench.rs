//! Criterion benchmarks for the Jibiki library.
//!
//! This module benchmarks the hot paths of the crate:
//! - Deinflection of single words and batches
//! - Term-bank row parsing
//! - Revision comparison

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use jibiki::dictionary::{Revision, TermEntry};
use jibiki::inflection::Deinflector;

/// Inflected forms covering every rule category and chain length.
fn sample_words() -> Vec<&'static str> {
    vec![
        "来ます",
        "している",
        "住んでいます",
        "食べています",
        "書きます",
        "読んで",
        "泳いで",
        "勉強します",
        "見てる",
        "走って",
        "本",
        "学校",
    ]
}

/// Benchmark deinflection.
fn bench_deinflection(c: &mut Criterion) {
    let mut group = c.benchmark_group("deinflection");

    let deinflector = Deinflector::new();
    let words = sample_words();

    // Single word, longest rule chain in the sample set
    group.bench_function("deinflect_chained_form", |b| {
        b.iter(|| {
            let result = deinflector.deinflect(black_box("住んでいます"));
            black_box(result)
        })
    });

    // Word with no matching rule: the identity-only fast path
    group.bench_function("deinflect_plain_noun", |b| {
        b.iter(|| {
            let result = deinflector.deinflect(black_box("学校"));
            black_box(result)
        })
    });

    // Batch over the whole sample set
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("deinflect_batch", |b| {
        b.iter(|| {
            for word in &words {
                let result = deinflector.deinflect(black_box(word));
                let _ = black_box(result);
            }
        })
    });

    group.finish();
}

/// Benchmark term-bank row parsing.
fn bench_term_bank_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("term_bank");

    let row = r#"["食べる", "たべる", "pop", "v1", 500, ["to eat"], 100, "news"]"#;
    let rows: Vec<String> = (0..1000)
        .map(|i| {
            format!(r#"["語{i}", "ご", null, "v5", {i}, ["definition"], {i}, ""]"#)
        })
        .collect();
    let bank = format!("[{}]", rows.join(","));

    group.bench_function("parse_single_row", |b| {
        b.iter(|| {
            let entry: TermEntry = serde_json::from_str(black_box(row)).unwrap();
            black_box(entry)
        })
    });

    group.throughput(Throughput::Elements(1000));
    group.bench_function("parse_bank_1k_rows", |b| {
        b.iter(|| {
            let entries: Vec<TermEntry> = serde_json::from_str(black_box(&bank)).unwrap();
            black_box(entries)
        })
    });

    group.finish();
}

/// Benchmark revision parsing and comparison.
fn bench_revision(c: &mut Criterion) {
    let mut group = c.benchmark_group("revision");

    let local: Revision = "2025.2.1".parse().unwrap();
    let remote: Revision = "2025.10.1".parse().unwrap();

    group.bench_function("parse_and_compare", |b| {
        b.iter(|| {
            let parsed: Revision = black_box("2025.10.1").parse().unwrap();
            black_box(parsed.newer_than(&local).unwrap())
        })
    });

    group.bench_function("compare_parsed", |b| {
        b.iter(|| black_box(remote.newer_than(black_box(&local)).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_deinflection,
    bench_term_bank_parsing,
    bench_revision
);

criterion_main!(benches);
