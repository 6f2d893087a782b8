//! Typed model of a Jest `--json --coverage` report.

pub mod entity_id;
pub mod file_coverage;
pub mod location;
pub mod report;
pub mod test_results;

pub use entity_id::EntityId;
pub use file_coverage::{BranchMapping, FileCoverage, FunctionMapping};
pub use location::{Position, SourceRange};
pub use report::{CoverageReport, TestRunSummary};
pub use test_results::{AssertionResult, SnapshotSummary, TestSuiteResult};
