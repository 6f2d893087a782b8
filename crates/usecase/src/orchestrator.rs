use covsum_domain::{Aggregator, Status};
use covsum_ports::{RenderRequest, ReportDecoder, ReportSource, SummaryRenderer};
use covsum_shared_kernel::Result;

use crate::dto::{SummaryOutput, SummaryRequest};

/// Loads a report, aggregates its coverage and renders the summary.
pub struct GenerateCoverageSummary<'a> {
    source: &'a dyn ReportSource,
    decoder: &'a dyn ReportDecoder,
    renderer: &'a dyn SummaryRenderer,
}

impl<'a> GenerateCoverageSummary<'a> {
    pub fn new(
        source: &'a dyn ReportSource,
        decoder: &'a dyn ReportDecoder,
        renderer: &'a dyn SummaryRenderer,
    ) -> Self {
        Self { source, decoder, renderer }
    }

    /// Run the pipeline once. Any failure aborts the whole run.
    pub fn run(&self, request: &SummaryRequest) -> Result<SummaryOutput> {
        log::debug!("loading report from {}", self.source.location());
        let raw = self.source.load()?;
        log::debug!("read {} bytes", raw.len());

        let report = self.decoder.decode(&raw)?;
        let summary = Aggregator::aggregate(&report);
        let test_run = report.test_run();

        let overall_status =
            summary.overall.metrics().map(|metric| Status::classify(metric.percent(), request.threshold));

        let text = self.renderer.render(&RenderRequest {
            summary: &summary,
            threshold: request.threshold,
            test_run: request.include_test_summary.then_some(&test_run),
        })?;

        Ok(SummaryOutput { text, summary, test_run, overall_status })
    }
}
