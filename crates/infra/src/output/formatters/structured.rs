// crates/infra/src/output/formatters/structured.rs
use covsum_ports::RenderRequest;
use covsum_shared_kernel::Result;

use crate::output::view::SummaryDocument;

pub fn output_json(request: &RenderRequest<'_>) -> Result<String> {
    let document = SummaryDocument::from_request(request);
    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(feature = "yaml")]
pub fn output_yaml(request: &RenderRequest<'_>) -> Result<String> {
    let document = SummaryDocument::from_request(request);
    let yaml = serde_yaml::to_string(&document)?;
    Ok(yaml.trim_end().to_string())
}

#[cfg(not(feature = "yaml"))]
pub fn output_yaml(_request: &RenderRequest<'_>) -> Result<String> {
    Err(covsum_shared_kernel::OutputError::Serialization {
        format: "YAML".to_string(),
        details: "built without the `yaml` feature".to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use covsum_domain::{Aggregator, CoverageReport, FileCoverage, TestRunSummary};
    use covsum_shared_kernel::Threshold;
    use serde_json::Value;

    use super::*;

    fn summary() -> covsum_domain::CoverageSummary {
        Aggregator::aggregate(&CoverageReport::from_files([FileCoverage::new("/r/src/a.ts")
            .with_statement(0, 1)
            .with_statement(1, 0)
            .with_statement(2, 0)]))
    }

    #[test]
    fn json_carries_ratios_statuses_and_ranges() {
        let summary = summary();
        let text = output_json(&RenderRequest { summary: &summary, threshold: Threshold::DEFAULT, test_run: None })
            .expect("json renders");
        let json: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["threshold"], 80);
        assert_eq!(json["overall"]["statements"]["covered"], 1);
        assert_eq!(json["overall"]["statements"]["total"], 3);
        assert_eq!(json["overall"]["statements"]["status"], "fail");
        assert!(json["overall"]["branches"]["percent"].is_null());
        assert_eq!(json["files"][0]["label"], "a.ts");
        assert_eq!(json["files"][0]["uncovered"], "2-3");
        assert_eq!(json["files"][0]["uncoveredRanges"][0]["start"], 2);
        assert_eq!(json["files"][0]["uncoveredRanges"][0]["end"], 3);
        assert!(json.get("testRun").is_none());
    }

    #[test]
    fn json_includes_test_run_when_requested() {
        let summary = summary();
        let run = TestRunSummary { tests_passed: 3, tests_total: 3, ..TestRunSummary::default() };
        let text = output_json(&RenderRequest { summary: &summary, threshold: Threshold::DEFAULT, test_run: Some(&run) })
            .unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["testRun"]["testsPassed"], 3);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yaml_renders_same_document() {
        let summary = summary();
        let text = output_yaml(&RenderRequest { summary: &summary, threshold: Threshold::DEFAULT, test_run: None })
            .unwrap();
        assert!(text.starts_with("threshold: 80"));
        assert!(text.contains("uncovered:"));
        assert!(text.contains("2-3"));
    }
}
