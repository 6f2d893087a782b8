//! Summary renderers and sinks.

pub mod formatters;
mod sinks;
mod view;

use covsum_domain::OutputFormat;
use covsum_ports::{RenderRequest, SummaryRenderer};
use covsum_shared_kernel::Result;
pub use sinks::{FileSink, StdoutSink};
pub use view::{FileView, MetricView, MetricsView, SummaryDocument};

use formatters::{output_json, output_markdown, output_table, output_yaml};

/// [`SummaryRenderer`] dispatching on an [`OutputFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatRenderer {
    format: OutputFormat,
}

impl FormatRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl SummaryRenderer for FormatRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> Result<String> {
        log::debug!("rendering {} file(s) as {}", request.summary.files.len(), self.format.as_str());
        match self.format {
            OutputFormat::Markdown => output_markdown(request),
            OutputFormat::Table => Ok(output_table(request)),
            OutputFormat::Json => output_json(request),
            OutputFormat::Yaml => output_yaml(request),
        }
    }
}
