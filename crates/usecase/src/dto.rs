use covsum_domain::{CoverageSummary, Status, TestRunSummary};
use covsum_shared_kernel::Threshold;

/// Per-invocation settings for [`crate::GenerateCoverageSummary`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryRequest {
    pub threshold: Threshold,
    pub include_test_summary: bool,
}

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct SummaryOutput {
    /// Rendered summary text.
    pub text: String,
    pub summary: CoverageSummary,
    pub test_run: TestRunSummary,
    /// Verdicts for the overall statements, branches, functions and lines.
    pub overall_status: [Status; 4],
}

impl SummaryOutput {
    /// Whether any overall metric is below the threshold.
    pub fn any_failed(&self) -> bool {
        self.overall_status.iter().any(|status| status.is_failure())
    }
}
