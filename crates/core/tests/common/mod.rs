#![allow(dead_code)]

use std::path::{Path, PathBuf};

use covsum_domain::{CoverageReport, FileCoverage};

/// Report with A `{0:3, 1:0}` and B `{0:1}`.
pub fn two_file_report() -> CoverageReport {
    let mut report = CoverageReport::from_files([
        FileCoverage::new("/repo/src/a.ts").with_statement(0, 3).with_statement(1, 0),
        FileCoverage::new("/repo/src/b.ts").with_statement(0, 1),
    ]);
    report.num_passed_tests = 2;
    report.num_total_tests = 2;
    report.num_passed_test_suites = 1;
    report.num_total_test_suites = 1;
    report.success = true;
    report
}

pub fn write_report(dir: &Path, report: &CoverageReport) -> PathBuf {
    write_raw(dir, &serde_json::to_string_pretty(report).unwrap())
}

pub fn write_raw(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("report.json");
    std::fs::write(&path, text).unwrap();
    path
}
