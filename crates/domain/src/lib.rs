#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod options;
pub mod status;

pub use analytics::{AggregateCoverage, Aggregator, CoverageSummary, UncoveredLines, UncoveredRange};
pub use model::{CoverageReport, EntityId, FileCoverage, TestRunSummary};
pub use options::OutputFormat;
pub use status::Status;
