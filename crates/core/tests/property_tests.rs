mod common;

use covsum_core::{Threshold, generate_coverage_summary};
use covsum_domain::{CoverageReport, FileCoverage};
use proptest::prelude::*;

fn report_strategy() -> impl Strategy<Value = CoverageReport> {
    proptest::collection::vec(proptest::collection::btree_map(0u64..200, 0u64..3, 0..30), 0..5).prop_map(
        |files| {
            CoverageReport::from_files(files.into_iter().enumerate().map(|(i, hits)| {
                hits.into_iter()
                    .rev()
                    .fold(FileCoverage::new(format!("/repo/src/f{i}.ts")), |file, (id, count)| {
                        file.with_statement(id, count)
                    })
            }))
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn markdown_has_one_row_per_file(report in report_strategy(), threshold in 0i64..=100) {
        let dir = tempfile::tempdir().unwrap();
        let path = common::write_report(dir.path(), &report);
        let text = generate_coverage_summary(path.to_str().unwrap(), &threshold.to_string()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), report.file_count() + 3);
        for (line, (key, _)) in lines[3..].iter().zip(report.files()) {
            let expected = format!("| - {} |", key.label());
            prop_assert!(line.starts_with(&expected));
        }
    }

    #[test]
    fn threshold_parsing_accepts_only_percentages(value in -1000i64..1000) {
        let parsed = value.to_string().parse::<Threshold>();
        prop_assert_eq!(parsed.is_ok(), (0..=100).contains(&value));
    }
}
