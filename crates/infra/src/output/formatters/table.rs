use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use covsum_ports::RenderRequest;

use crate::output::view::{MetricsView, SummaryDocument};

const HEADER: [&str; 6] = ["File", "% Stmts", "% Branch", "% Funcs", "% Lines", "Uncovered Line #s"];

/// Aligned terminal table with `FAIL` / `WARN` / `PASS` labels.
pub fn output_table(request: &RenderRequest<'_>) -> String {
    let document = SummaryDocument::from_request(request);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED).set_header(HEADER);
    table.add_row(row("All files", &document.overall, String::new()));
    for file in &document.files {
        table.add_row(row(file.label, &file.metrics, file.uncovered.to_string()));
    }

    let mut out = table.to_string();
    if let Some(test_run) = document.test_run {
        out.push_str("\n\n");
        out.push_str(&test_run.to_string());
    }
    out
}

fn row(label: &str, metrics: &MetricsView, uncovered: String) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(HEADER.len());
    cells.push(Cell::new(label));
    cells.extend(metrics.columns().into_iter().map(|metric| {
        Cell::new(format!("{} {}", metric.percent, metric.status.label())).set_alignment(CellAlignment::Right)
    }));
    cells.push(Cell::new(uncovered));
    cells
}
