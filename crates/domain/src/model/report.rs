use std::fmt;

use covsum_shared_kernel::SourcePath;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FileCoverage, SnapshotSummary, TestSuiteResult};

/// Root of a Jest `--json --coverage` report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    pub num_failed_test_suites: u64,
    pub num_failed_tests: u64,
    pub num_passed_test_suites: u64,
    pub num_passed_tests: u64,
    pub num_pending_test_suites: u64,
    pub num_pending_tests: u64,
    pub num_runtime_error_test_suites: u64,
    pub num_todo_tests: u64,
    pub num_total_test_suites: u64,
    pub num_total_tests: u64,
    pub open_handles: Vec<Value>,
    pub snapshot: SnapshotSummary,
    pub start_time: u64,
    pub success: bool,
    pub test_results: Vec<TestSuiteResult>,
    pub was_interrupted: bool,
    /// Per-file coverage, in document order.
    pub coverage_map: IndexMap<SourcePath, FileCoverage>,
}

impl CoverageReport {
    /// Report holding only coverage data; test-run sections are left empty.
    pub fn from_files<I>(files: I) -> Self
    where
        I: IntoIterator<Item = FileCoverage>,
    {
        let coverage_map = files.into_iter().map(|file| (file.path.clone(), file)).collect();
        Self { coverage_map, ..Self::default() }
    }

    pub fn files(&self) -> impl Iterator<Item = (&SourcePath, &FileCoverage)> {
        self.coverage_map.iter()
    }

    pub fn file_count(&self) -> usize {
        self.coverage_map.len()
    }

    /// Map keys whose entry carries a different `path`.
    pub fn mismatched_paths(&self) -> impl Iterator<Item = (&SourcePath, &SourcePath)> {
        self.coverage_map
            .iter()
            .filter(|(key, file)| **key != file.path)
            .map(|(key, file)| (key, &file.path))
    }

    pub fn test_run(&self) -> TestRunSummary {
        TestRunSummary {
            suites_failed: self.num_failed_test_suites,
            suites_passed: self.num_passed_test_suites,
            suites_pending: self.num_pending_test_suites,
            suites_total: self.num_total_test_suites,
            tests_failed: self.num_failed_tests,
            tests_passed: self.num_passed_tests,
            tests_pending: self.num_pending_tests,
            tests_todo: self.num_todo_tests,
            tests_total: self.num_total_tests,
            snapshots_total: self.snapshot.total,
            success: self.success,
        }
    }
}

/// Test-run counters, printed in the same shape Jest uses for its footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRunSummary {
    pub suites_failed: u64,
    pub suites_passed: u64,
    pub suites_pending: u64,
    pub suites_total: u64,
    pub tests_failed: u64,
    pub tests_passed: u64,
    pub tests_pending: u64,
    pub tests_todo: u64,
    pub tests_total: u64,
    pub snapshots_total: u64,
    pub success: bool,
}

impl TestRunSummary {
    /// `Test Suites:`, `Tests:` and `Snapshots:` lines.
    pub fn lines(&self) -> [String; 3] {
        [
            format!(
                "Test Suites: {}",
                counts(&[
                    (self.suites_failed, "failed"),
                    (self.suites_pending, "skipped"),
                    (self.suites_passed, "passed"),
                ], self.suites_total)
            ),
            format!(
                "Tests:       {}",
                counts(&[
                    (self.tests_failed, "failed"),
                    (self.tests_pending, "skipped"),
                    (self.tests_todo, "todo"),
                    (self.tests_passed, "passed"),
                ], self.tests_total)
            ),
            format!("Snapshots:   {} total", self.snapshots_total),
        ]
    }
}

fn counts(parts: &[(u64, &str)], total: u64) -> String {
    parts
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, label)| format!("{n} {label}"))
        .chain(std::iter::once(format!("{total} total")))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for TestRunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
