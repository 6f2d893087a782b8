use covsum_shared_kernel::{Coverage, SourcePath};
use indexmap::IndexMap;
use serde::Serialize;

use super::UncoveredLines;
use crate::model::{CoverageReport, FileCoverage};

/// Covered/total figures for the four metric categories.
///
/// `lines` mirrors `statements`; line coverage is not tracked separately.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AggregateCoverage {
    pub statements: Coverage,
    pub branches: Coverage,
    pub functions: Coverage,
    pub lines: Coverage,
    /// Always empty on the overall aggregate.
    pub uncovered: UncoveredLines,
}

impl AggregateCoverage {
    pub fn for_file(file: &FileCoverage) -> Self {
        let statements = Coverage::from_hits(file.statement_hits.values().map(|hits| *hits != 0));
        let branches =
            Coverage::from_hits(file.branch_hits.values().map(|outcomes| FileCoverage::branch_site_covered(outcomes)));
        let functions = Coverage::from_hits(file.function_hits.values().map(|hits| *hits != 0));
        Self { statements, branches, functions, lines: statements, uncovered: UncoveredLines::for_file(file) }
    }

    /// Add another aggregate's counts; uncovered ranges are not carried over.
    pub fn absorb(&mut self, other: &Self) {
        self.statements += other.statements;
        self.branches += other.branches;
        self.functions += other.functions;
        self.lines += other.lines;
    }

    /// The four metrics in display order: statements, branches, functions, lines.
    pub fn metrics(&self) -> [Coverage; 4] {
        [self.statements, self.branches, self.functions, self.lines]
    }
}

/// Aggregation result: per-file figures in report order plus the overall sums.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CoverageSummary {
    pub files: IndexMap<SourcePath, AggregateCoverage>,
    pub overall: AggregateCoverage,
}

impl CoverageSummary {
    pub fn into_parts(self) -> (IndexMap<SourcePath, AggregateCoverage>, AggregateCoverage) {
        (self.files, self.overall)
    }
}

/// Folds a report's coverage map into a [`CoverageSummary`].
pub struct Aggregator;

impl Aggregator {
    pub fn aggregate(report: &CoverageReport) -> CoverageSummary {
        let mut overall = AggregateCoverage::default();
        let files = report
            .files()
            .map(|(path, file)| {
                let figures = AggregateCoverage::for_file(file);
                log::trace!(
                    "{path}: statements {} branches {} functions {} uncovered [{}]",
                    figures.statements,
                    figures.branches,
                    figures.functions,
                    figures.uncovered
                );
                overall.absorb(&figures);
                (path.clone(), figures)
            })
            .collect();
        log::debug!("aggregated {} file(s): statements {}", report.file_count(), overall.statements);
        CoverageSummary { files, overall }
    }
}
