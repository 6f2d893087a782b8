use clap::Parser;
use covsum::cli::Args;
use covsum_domain::{Aggregator, CoverageReport, FileCoverage, UncoveredLines};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn synthetic_report(files: u64, statements: u64) -> CoverageReport {
    CoverageReport::from_files((0..files).map(|n| {
        (0..statements).fold(FileCoverage::new(format!("/repo/src/file_{n}.ts")), |file, id| {
            file.with_statement(id, u64::from(id % 7 != 0)).with_function(id, id % 3).with_branch(id, [id % 2, 1])
        })
    }))
}

fn benchmark_aggregate(c: &mut Criterion) {
    let report = synthetic_report(200, 500);
    c.bench_function("aggregate_200_files", |b| {
        b.iter(|| {
            let summary = Aggregator::aggregate(black_box(&report));
            black_box(summary);
        })
    });
}

fn benchmark_uncovered_ranges(c: &mut Criterion) {
    let report = synthetic_report(1, 10_000);
    let (_, file) = report.files().next().unwrap();
    c.bench_function("uncovered_ranges_10k_statements", |b| {
        b.iter(|| {
            let lines = UncoveredLines::for_file(black_box(file));
            black_box(lines.to_string());
        })
    });
}

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_simple", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["covsum", "report.json", "-t", "90"])).unwrap();
            black_box(args);
        })
    });
}

criterion_group!(benches, benchmark_aggregate, benchmark_uncovered_ranges, benchmark_cli_parsing);
criterion_main!(benches);
