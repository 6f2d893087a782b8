// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod decoding;
pub mod output;
pub mod persistence;

pub use decoding::JsonReportDecoder;
pub use output::{FileSink, FormatRenderer, StdoutSink};
pub use persistence::FileReportSource;
