//! Criterion benchmarks for the Gatumatch correction engine.
//!
//! Covers the main cost centers:
//! - String similarity metrics
//! - Single-address lookup against a populated catalog
//! - Parallel batch correction

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use gatumatch::batch::{AddressRecord, BatchConfig, BatchCorrector};
use gatumatch::catalog::{CatalogRecord, ReferenceCatalog};
use gatumatch::engine::CorrectionEngine;
use gatumatch::matching::similarity::{partial_ratio, ratio, token_set_ratio};

const STEMS: &[&str] = &[
    "stor", "lill", "kungs", "drottning", "industri", "skol", "kyrk", "björk", "strand", "ängs",
];
const SUFFIXES: &[&str] = &["gatan", "vägen", "gränden", "torget", "stigen"];

/// Build a catalog with `postal_codes` codes and 50 streets per code.
fn build_catalog(postal_codes: usize) -> Arc<ReferenceCatalog> {
    let mut records = Vec::new();
    for p in 0..postal_codes {
        let postal = format!("{:05}", 10000 + p);
        for stem in STEMS {
            for suffix in SUFFIXES {
                records.push(CatalogRecord::new(
                    postal.clone(),
                    format!("{stem}{suffix}"),
                    "Uppsala".to_string(),
                ));
            }
        }
    }
    Arc::new(ReferenceCatalog::from_records(records).unwrap())
}

fn bench_similarity(c: &mut Criterion) {
    let pairs = [
        ("storgatan", "storgatan"),
        ("stor gatan", "storgatan"),
        ("kungsgatan", "drottninggatan"),
        ("industrigränden", "industrigranden"),
    ];

    let mut group = c.benchmark_group("similarity");
    group.bench_function("ratio", |b| {
        b.iter(|| {
            for (a, s) in pairs {
                black_box(ratio(black_box(a), black_box(s)));
            }
        })
    });
    group.bench_function("partial_ratio", |b| {
        b.iter(|| {
            for (a, s) in pairs {
                black_box(partial_ratio(black_box(a), black_box(s)));
            }
        })
    });
    group.bench_function("token_set_ratio", |b| {
        b.iter(|| {
            for (a, s) in pairs {
                black_box(token_set_ratio(black_box(a), black_box(s)));
            }
        })
    });
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let engine = CorrectionEngine::new(build_catalog(100));

    let mut group = c.benchmark_group("lookup");
    group.bench_function("exact_name", |b| {
        b.iter(|| black_box(engine.find_best_matches(black_box("storgatan"), black_box("10050"))))
    });
    group.bench_function("misspelled_name", |b| {
        b.iter(|| {
            black_box(engine.find_best_matches(black_box("stor gatan 7"), black_box("10050")))
        })
    });
    group.bench_function("multi_fragment", |b| {
        b.iter(|| {
            black_box(
                engine.find_best_matches(black_box("storgatan/kungsvägen 12"), black_box("10050")),
            )
        })
    });
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let engine = Arc::new(CorrectionEngine::new(build_catalog(50)));
    let corrector = BatchCorrector::with_config(
        engine,
        BatchConfig {
            thread_pool_size: Some(4),
        },
    )
    .unwrap();
    let records: Vec<AddressRecord> = (0..256)
        .map(|i| {
            let postal = format!("{:05}", 10000 + (i % 50));
            AddressRecord::new(format!("stor gatan {}", i % 90 + 1), postal)
        })
        .collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("correct_256_rows", |b| {
        b.iter(|| black_box(corrector.correct_all(black_box(&records))))
    });
    group.finish();
}

criterion_group!(benches, bench_similarity, bench_lookup, bench_batch);
criterion_main!(benches);
