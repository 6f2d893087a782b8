//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: the load → decode → aggregate → render pipeline
//! - [`dto`]: request and output types at the use-case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{SummaryOutput, SummaryRequest};
pub use orchestrator::GenerateCoverageSummary;
