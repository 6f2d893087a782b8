// crates/shared-kernel/src/value_objects/mod.rs
pub mod coverage;
pub mod source_path;
pub mod threshold;

pub use coverage::{Coverage, Percentage};
pub use source_path::SourcePath;
pub use threshold::Threshold;
