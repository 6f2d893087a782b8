// crates/ports/src/decoding.rs
use covsum_domain::CoverageReport;
use covsum_shared_kernel::Result;

/// Port for validating and parsing a raw report.
pub trait ReportDecoder: Send + Sync {
    /// Decode the whole document or fail; no partial reports.
    ///
    /// # Errors
    ///
    /// Fails with a decode error for malformed text or a schema violation.
    fn decode(&self, raw: &[u8]) -> Result<CoverageReport>;
}
