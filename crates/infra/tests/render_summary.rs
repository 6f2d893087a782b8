use covsum_domain::{Aggregator, CoverageSummary, OutputFormat, TestRunSummary};
use covsum_infra::{FormatRenderer, JsonReportDecoder};
use covsum_ports::{RenderRequest, SummaryRenderer};
use covsum_shared_kernel::Threshold;
use serde_json::{Value, json};

fn two_file_report() -> (CoverageSummary, TestRunSummary) {
    let mut value: Value = serde_json::from_str(include_str!("fixtures/report.json")).unwrap();
    value["coverageMap"] = json!({
        "/repo/src/a.ts": file("/repo/src/a.ts", json!({"0": 3, "1": 0})),
        "/repo/src/b.ts": file("/repo/src/b.ts", json!({"0": 1})),
    });
    let report = JsonReportDecoder::new().decode_str(&value.to_string()).expect("report decodes");
    (Aggregator::aggregate(&report), report.test_run())
}

fn file(path: &str, hits: Value) -> Value {
    let statement_map: serde_json::Map<String, Value> = hits
        .as_object()
        .unwrap()
        .keys()
        .map(|id| {
            let line = id.parse::<u64>().unwrap() + 1;
            (id.clone(), json!({"start": {"line": line, "column": 0}, "end": {"line": line, "column": 1}}))
        })
        .collect();
    json!({
        "path": path,
        "all": false,
        "statementMap": statement_map,
        "s": hits,
        "branchMap": {},
        "b": {},
        "fnMap": {},
        "f": {},
    })
}

fn render(format: OutputFormat, summary: &CoverageSummary, test_run: Option<&TestRunSummary>) -> String {
    FormatRenderer::new(format)
        .render(&RenderRequest { summary, threshold: Threshold::new(50).unwrap(), test_run })
        .expect("renders")
}

#[test]
fn markdown_two_file_report() {
    let (summary, _) = two_file_report();
    insta::assert_snapshot!(render(OutputFormat::Markdown, &summary, None), @r"
    | File | % Stmts | % Branch | % Funcs | % Lines | Uncovered Line #s |
    |------|--------:|---------:|--------:|--------:|-------------------|
    | All files | 66.67 🟢 | — 🟢 | — 🟢 | 66.67 🟢 |  |
    | - a.ts | 50.00 🟡 | — 🟢 | — 🟢 | 50.00 🟡 | 2 |
    | - b.ts | 100.00 🟢 | — 🟢 | — 🟢 | 100.00 🟢 |  |
    ");
}

#[test]
fn markdown_with_test_summary_footer() {
    let (summary, test_run) = two_file_report();
    insta::assert_snapshot!(render(OutputFormat::Markdown, &summary, Some(&test_run)), @r"
    | File | % Stmts | % Branch | % Funcs | % Lines | Uncovered Line #s |
    |------|--------:|---------:|--------:|--------:|-------------------|
    | All files | 66.67 🟢 | — 🟢 | — 🟢 | 66.67 🟢 |  |
    | - a.ts | 50.00 🟡 | — 🟢 | — 🟢 | 50.00 🟡 | 2 |
    | - b.ts | 100.00 🟢 | — 🟢 | — 🟢 | 100.00 🟢 |  |

    ```text
    Test Suites: 2 passed, 2 total
    Tests:       5 passed, 5 total
    Snapshots:   0 total
    ```
    ");
}

#[test]
fn json_summary_carries_overall_figures() {
    let (summary, _) = two_file_report();
    let json: Value = serde_json::from_str(&render(OutputFormat::Json, &summary, None)).unwrap();
    let statements = &json["overall"]["statements"];
    assert_eq!(statements["covered"], 2);
    assert_eq!(statements["total"], 3);
    assert_eq!(statements["status"], "pass");
    let percent = statements["percent"].as_f64().unwrap();
    assert!((percent - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(json["files"][0]["uncovered"], "2");
}

#[test]
fn table_rows_follow_report_order() {
    let (summary, test_run) = two_file_report();
    let text = render(OutputFormat::Table, &summary, Some(&test_run));
    let a = text.find("a.ts").unwrap();
    let b = text.find("b.ts").unwrap();
    assert!(a < b);
    assert!(text.contains("66.67 PASS"));
    assert!(text.ends_with("Snapshots:   0 total"));
}
