// crates/ports/src/sink.rs
use covsum_shared_kernel::Result;

/// Port for publishing the rendered summary.
pub trait SummarySink: Send + Sync {
    /// # Errors
    ///
    /// Fails with an output error when the text cannot be written.
    fn publish(&self, text: &str) -> Result<()>;
}
