use covsum_domain::{AggregateCoverage, Status, TestRunSummary, UncoveredLines, UncoveredRange};
use covsum_ports::RenderRequest;
use covsum_shared_kernel::{Coverage, Percentage, Threshold};
use serde::Serialize;

/// Serialisable form of a rendered summary, used by the structured formats.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDocument<'a> {
    pub threshold: Threshold,
    pub overall: MetricsView,
    pub files: Vec<FileView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_run: Option<&'a TestRunSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileView<'a> {
    pub path: &'a str,
    pub label: &'a str,
    #[serde(flatten)]
    pub metrics: MetricsView,
    pub uncovered: &'a UncoveredLines,
    pub uncovered_ranges: &'a [UncoveredRange],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricsView {
    pub statements: MetricView,
    pub branches: MetricView,
    pub functions: MetricView,
    pub lines: MetricView,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricView {
    pub covered: usize,
    pub total: usize,
    /// `null` when nothing is tracked.
    pub percent: Percentage,
    pub status: Status,
}

impl MetricView {
    pub fn new(coverage: Coverage, threshold: Threshold) -> Self {
        let percent = coverage.percent();
        Self { covered: coverage.covered(), total: coverage.total(), percent, status: Status::classify(percent, threshold) }
    }
}

impl MetricsView {
    pub fn new(aggregate: &AggregateCoverage, threshold: Threshold) -> Self {
        let [statements, branches, functions, lines] = aggregate.metrics().map(|m| MetricView::new(m, threshold));
        Self { statements, branches, functions, lines }
    }

    /// Cells in column order: statements, branches, functions, lines.
    pub fn columns(&self) -> [MetricView; 4] {
        [self.statements, self.branches, self.functions, self.lines]
    }
}

impl<'a> SummaryDocument<'a> {
    pub fn from_request(request: &RenderRequest<'a>) -> Self {
        let threshold = request.threshold;
        let files = request
            .summary
            .files
            .iter()
            .map(|(path, aggregate)| FileView {
                path: path.as_str(),
                label: path.label(),
                metrics: MetricsView::new(aggregate, threshold),
                uncovered: &aggregate.uncovered,
                uncovered_ranges: aggregate.uncovered.ranges(),
            })
            .collect();
        Self {
            threshold,
            overall: MetricsView::new(&request.summary.overall, threshold),
            files,
            test_run: request.test_run,
        }
    }
}
