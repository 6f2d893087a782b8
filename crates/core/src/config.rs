use std::path::PathBuf;

use covsum_domain::OutputFormat;
use covsum_shared_kernel::{ConfigurationError, Threshold};
use derive_builder::Builder;

/// Report location used when none is given.
pub const DEFAULT_REPORT: &str = "report.json";

/// Settings for one summary run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct SummaryConfig {
    #[builder(default = "PathBuf::from(DEFAULT_REPORT)")]
    pub report: PathBuf,
    #[builder(default)]
    pub threshold: Threshold,
    #[builder(default)]
    pub format: OutputFormat,
    /// Write here instead of stdout.
    #[builder(default)]
    pub output: Option<PathBuf>,
    /// Append the test-run footer.
    #[builder(default)]
    pub test_summary: bool,
    /// Treat an overall metric in the fail band as a failed run.
    #[builder(default)]
    pub strict: bool,
}

impl SummaryConfig {
    pub fn builder() -> SummaryConfigBuilder {
        SummaryConfigBuilder::default()
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            report: PathBuf::from(DEFAULT_REPORT),
            threshold: Threshold::DEFAULT,
            format: OutputFormat::default(),
            output: None,
            test_summary: false,
            strict: false,
        }
    }
}

impl SummaryConfigBuilder {
    /// Build, reporting failures as configuration errors.
    pub fn finish(&self) -> Result<SummaryConfig, ConfigurationError> {
        self.build().map_err(|err| ConfigurationError::Builder(err.to_string()))
    }
}
