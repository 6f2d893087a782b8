//! # Ports
//!
//! Interface definitions for the collaborators around the summary pipeline.
//!
//! - [`source`]: loading the raw report document
//! - [`decoding`]: turning raw bytes into the typed report model
//! - [`rendering`]: formatting aggregated figures as text
//! - [`sink`]: publishing the rendered text
//!
//! The use-case layer depends only on these traits, so the pipeline can be
//! driven from files, in-memory buffers or test doubles alike.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod decoding;
pub mod rendering;
pub mod sink;
pub mod source;

pub use decoding::ReportDecoder;
pub use rendering::{RenderRequest, SummaryRenderer};
pub use sink::SummarySink;
pub use source::ReportSource;
