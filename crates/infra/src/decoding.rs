//! JSON adapter for [`ReportDecoder`].

mod shape;

use covsum_domain::CoverageReport;
use covsum_ports::ReportDecoder;
use covsum_shared_kernel::{DecodeError, Result};
use serde_json::Value;

/// Strict-shape, permissive-extras decoder for Jest JSON reports.
///
/// Every declared field must be present with the declared kind; unknown
/// fields are ignored. A failure anywhere rejects the whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportDecoder;

impl JsonReportDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode `raw` into a report.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MalformedInput`] when `raw` is not JSON,
    /// [`DecodeError::InvalidShape`] when it does not match the schema.
    pub fn decode_str(&self, raw: &str) -> std::result::Result<CoverageReport, DecodeError> {
        self.decode_bytes(raw.as_bytes())
    }

    fn decode_bytes(&self, raw: &[u8]) -> std::result::Result<CoverageReport, DecodeError> {
        let document: Value = serde_json::from_slice(raw).map_err(|err| DecodeError::malformed(err.to_string()))?;
        if !document.is_object() {
            return Err(DecodeError::invalid_shape(shape::ROOT, "object", shape::preview(&document)));
        }

        let report: CoverageReport =
            serde_path_to_error::deserialize(&document).map_err(|err| shape::translate(&document, &err))?;
        let decoded = serde_json::to_value(&report).map_err(|err| DecodeError::malformed(err.to_string()))?;
        if let Some(err) = shape::array_in_place_of_object(&document, &decoded) {
            return Err(err);
        }

        for (key, path) in report.mismatched_paths() {
            log::warn!("coverageMap key '{key}' holds coverage for '{path}'");
        }
        log::debug!(
            "decoded report: {} file(s), {} test suite(s)",
            report.file_count(),
            report.test_results.len()
        );
        Ok(report)
    }
}

impl ReportDecoder for JsonReportDecoder {
    fn decode(&self, raw: &[u8]) -> Result<CoverageReport> {
        Ok(self.decode_bytes(raw)?)
    }
}
