// crates/ports/src/rendering.rs
use covsum_domain::{CoverageSummary, TestRunSummary};
use covsum_shared_kernel::{Result, Threshold};

/// Everything a renderer needs for one summary.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub summary: &'a CoverageSummary,
    pub threshold: Threshold,
    /// Appended as a footer when present.
    pub test_run: Option<&'a TestRunSummary>,
}

/// Port for turning aggregated figures into text.
pub trait SummaryRenderer: Send + Sync {
    /// # Errors
    ///
    /// Fails with an output error when serialisation fails.
    fn render(&self, request: &RenderRequest<'_>) -> Result<String>;
}
