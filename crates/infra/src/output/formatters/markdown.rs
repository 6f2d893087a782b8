use std::fmt::Write;

use covsum_ports::RenderRequest;
use covsum_shared_kernel::{OutputError, Result};

use crate::output::view::{MetricsView, SummaryDocument};

const HEADER: &str = "| File | % Stmts | % Branch | % Funcs | % Lines | Uncovered Line #s |\n\
                      |------|--------:|---------:|--------:|--------:|-------------------|";

/// Pull-request style table with 🔴 / 🟡 / 🟢 indicators.
pub fn output_markdown(request: &RenderRequest<'_>) -> Result<String> {
    let document = SummaryDocument::from_request(request);
    let mut out = String::new();
    write_markdown(&document, &mut out).map_err(OutputError::from)?;
    Ok(out)
}

fn write_markdown(document: &SummaryDocument<'_>, out: &mut String) -> std::fmt::Result {
    writeln!(out, "{HEADER}")?;
    write_row(out, "All files", &document.overall, "")?;
    for file in &document.files {
        let label = format!("- {}", escape(file.label));
        write_row(out, &label, &file.metrics, &escape(&file.uncovered.to_string()))?;
    }
    if let Some(test_run) = document.test_run {
        writeln!(out, "\n```text")?;
        for line in test_run.lines() {
            writeln!(out, "{line}")?;
        }
        write!(out, "```")?;
    }
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(())
}

fn write_row(out: &mut String, label: &str, metrics: &MetricsView, uncovered: &str) -> std::fmt::Result {
    write!(out, "| {label} |")?;
    for metric in metrics.columns() {
        write!(out, " {} {} |", metric.percent, metric.status.emoji())?;
    }
    writeln!(out, " {uncovered} |")
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}
