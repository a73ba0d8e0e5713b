//! Benchmarks for scoring, version extraction and VCS locator parsing.
//!
//! Run with: cargo bench --bench canon_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sbom_canon::inference::{infer_versions, score, CalibrationProfile};
use sbom_canon::{GenericVersionInferencer, VcsUrl};
use std::hint::black_box;

const NAMES: &[&str] = &[
    "pkg:generic/my-product-1.2.3.zip",
    "pkg:generic/another-product-5.6.7-CR2.tar.gz",
    "pkg:generic/lib-name-8.9-final-dist",
    "pkg:generic/archive_10_11_final",
    "pkg:generic/product-without-version",
];

const LOCATORS: &[&str] = &[
    "git+ssh://git@github.com/user/repo.git#ref",
    "git@github.com:org/repo.git#main",
    "https://gitlab.com/group/sub/project.git@v1.0#docs",
];

/// Generate `count` distinct versionless identifiers.
fn generate_purls(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("pkg:generic/component-{i}-{}.{}.{}.zip", i % 10, i % 7, i % 100))
        .collect()
}

fn bench_scoring(c: &mut Criterion) {
    // Build the global profile outside the measured loop
    black_box(CalibrationProfile::global());

    c.bench_function("score", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(score(black_box(name)));
            }
        });
    });
}

fn bench_extraction(c: &mut Criterion) {
    let inferencers: Vec<_> = NAMES
        .iter()
        .filter_map(|name| GenericVersionInferencer::parse(name).ok())
        .collect();

    c.bench_function("extract_version", |b| {
        b.iter(|| {
            for inferencer in &inferencers {
                black_box(inferencer.extract_version());
            }
        });
    });

    c.bench_function("as_identity_evidence", |b| {
        b.iter(|| {
            for inferencer in &inferencers {
                let _ = black_box(inferencer.as_identity_evidence());
            }
        });
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer_versions");
    for size in [100, 1_000, 10_000] {
        let purls = generate_purls(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &purls, |b, purls| {
            b.iter(|| black_box(infer_versions(purls)));
        });
    }
    group.finish();
}

fn bench_vcs_parsing(c: &mut Criterion) {
    c.bench_function("vcs_url_parse", |b| {
        b.iter(|| {
            for locator in LOCATORS {
                let _ = black_box(VcsUrl::parse(black_box(locator)));
            }
        });
    });

    let urls: Vec<VcsUrl> = LOCATORS.iter().filter_map(|l| VcsUrl::parse(l).ok()).collect();
    c.bench_function("vcs_url_to_package_identifier", |b| {
        b.iter(|| {
            for url in &urls {
                let _ = black_box(url.to_package_identifier());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_scoring,
    bench_extraction,
    bench_batch,
    bench_vcs_parsing
);
criterion_main!(benches);
