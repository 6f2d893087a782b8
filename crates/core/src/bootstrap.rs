use covsum_infra::{FileReportSource, FileSink, FormatRenderer, JsonReportDecoder, StdoutSink};
use covsum_ports::SummarySink;
use covsum_shared_kernel::{Result, Threshold};
use covsum_usecase::{GenerateCoverageSummary, SummaryOutput, SummaryRequest};

use crate::config::SummaryConfig;

/// What a CLI run produced.
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    pub text: String,
    pub files: usize,
    /// Some overall metric is below the threshold.
    pub any_failed: bool,
    pub strict: bool,
}

impl SummaryOutcome {
    /// Strict mode was requested and an overall metric failed.
    pub fn fails_strict_check(&self) -> bool {
        self.strict && self.any_failed
    }
}

/// Load, decode, aggregate and render the configured report.
pub fn summarize(config: &SummaryConfig) -> Result<SummaryOutput> {
    let source = FileReportSource::new(&config.report);
    let decoder = JsonReportDecoder::new();
    let renderer = FormatRenderer::new(config.format);
    let usecase = GenerateCoverageSummary::new(&source, &decoder, &renderer);
    usecase.run(&SummaryRequest { threshold: config.threshold, include_test_summary: config.test_summary })
}

/// Summarise and publish to stdout or the configured output file.
pub fn run(config: &SummaryConfig) -> Result<SummaryOutcome> {
    let output = summarize(config)?;

    let sink: Box<dyn SummarySink> = match &config.output {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(StdoutSink),
    };
    sink.publish(&output.text)?;

    let outcome = SummaryOutcome {
        files: output.summary.files.len(),
        any_failed: output.any_failed(),
        strict: config.strict,
        text: output.text,
    };
    if outcome.any_failed {
        log::info!("overall coverage is below the {}% threshold", config.threshold);
    }
    Ok(outcome)
}

/// Markdown summary of the report at `report_location`.
///
/// The threshold is validated before the report is touched.
///
/// # Errors
///
/// Configuration errors for a bad threshold, resource errors when the report
/// cannot be read and decode errors when it is not a valid report.
pub fn generate_coverage_summary(report_location: &str, threshold: &str) -> Result<String> {
    let threshold: Threshold = threshold.parse()?;
    let config = SummaryConfig { report: report_location.into(), threshold, ..SummaryConfig::default() };
    Ok(summarize(&config)?.text)
}
