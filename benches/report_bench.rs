// ABOUTME: Criterion benchmarks for report assembly and export
// ABOUTME: Measures single-subject windows, parallel batches, and each export format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for report assembly and export.
//!
//! Measures synthesis plus rule evaluation across window lengths, the
//! parallel batch path, and rendering cost for each export format.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use carewatch_reports::exporters::{export_report, ExportFormat};
use carewatch_reports::models::{HealthStatus, Subject};
use carewatch_reports::{GenerationContext, ReportAssembler};
use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const BENCH_SEED: u64 = 42;

fn bench_subject(index: usize) -> Subject {
    let status = HealthStatus::ALL[index % HealthStatus::ALL.len()];
    Subject::new(
        format!("bench-subject-{index}"),
        format!("Bench Subject {index}"),
        70 + (index % 25) as u32,
        "Parent".to_owned(),
        status,
    )
}

fn bench_context() -> GenerationContext {
    let now = Utc
        .with_ymd_and_hms(2025, 6, 1, 9, 30, 0)
        .single()
        .unwrap_or_else(Utc::now);
    GenerationContext::new(BENCH_SEED, now)
}

/// Single-subject assembly across window lengths
fn bench_assemble_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_report");
    let assembler = ReportAssembler::new();
    let subject = bench_subject(3);

    for days in [7_i64, 30, 90, 365] {
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::new("window_days", days), &days, |b, &days| {
            b.iter(|| {
                let mut ctx = bench_context();
                black_box(assembler.assemble_report(black_box(&subject), days, &mut ctx))
            });
        });
    }

    group.finish();
}

/// Parallel batch assembly for growing member counts
fn bench_assemble_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_batch");
    group.sample_size(30);
    let assembler = ReportAssembler::new();
    let now = bench_context().now();

    for count in [4_usize, 32, 128] {
        let subjects: Vec<Subject> = (0..count).map(bench_subject).collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("subjects", count), &subjects, |b, subjects| {
            b.iter(|| black_box(assembler.assemble_reports(subjects, 30, BENCH_SEED, now)));
        });
    }

    group.finish();
}

/// Export cost of one 30-day report in each format
fn bench_export_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");
    let Ok(report) =
        ReportAssembler::new().assemble_report(&bench_subject(2), 30, &mut bench_context())
    else {
        return;
    };

    for format in [ExportFormat::Document, ExportFormat::Json, ExportFormat::Csv] {
        group.bench_function(format.as_str(), |b| {
            b.iter(|| black_box(export_report(black_box(&report).into(), format)));
        });
    }

    group.finish();
}

/// Family assembly followed by an HTML render
fn bench_family_pipeline(c: &mut Criterion) {
    let subjects: Vec<Subject> = (0..6).map(bench_subject).collect();
    let assembler = ReportAssembler::new();

    c.bench_function("family_report_to_document", |b| {
        b.iter(|| {
            let mut ctx = bench_context();
            assembler
                .assemble_family_report(black_box(&subjects), &mut ctx)
                .and_then(|family| export_report((&family).into(), ExportFormat::Document))
        });
    });
}

criterion_group!(
    benches,
    bench_assemble_report,
    bench_assemble_batch,
    bench_export_formats,
    bench_family_pipeline
);
criterion_main!(benches);
