//! Per-file and overall coverage figures derived from a decoded report.

mod aggregate;
mod uncovered;

pub use aggregate::{AggregateCoverage, Aggregator, CoverageSummary};
pub use uncovered::{UncoveredLines, UncoveredRange};
