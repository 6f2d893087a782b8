// crates/ports/src/source.rs
use covsum_shared_kernel::Result;

/// Port for fetching the raw report document.
pub trait ReportSource: Send + Sync {
    /// Human-readable location, used in log lines and error messages.
    fn location(&self) -> &str;

    /// Read the whole document.
    ///
    /// # Errors
    ///
    /// Fails with a resource error when the document cannot be read.
    fn load(&self) -> Result<Vec<u8>>;
}
