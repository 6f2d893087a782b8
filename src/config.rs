use std::path::PathBuf;

use covsum_core::{ConfigurationError, SummaryConfig, Threshold, config::DEFAULT_REPORT};

use crate::cli::Args;

impl TryFrom<Args> for SummaryConfig {
    type Error = ConfigurationError;

    /// Positional report beats `--report`/`COVSUM_REPORT`, which beats the default.
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let threshold: Threshold = args.threshold.parse()?;
        let report = args.report.or(args.report_path).unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT));
        SummaryConfig::builder()
            .report(report)
            .threshold(threshold)
            .format(args.format)
            .output(args.output)
            .test_summary(args.test_summary)
            .strict(args.strict)
            .finish()
    }
}
