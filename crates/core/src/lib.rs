#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod config;

pub use bootstrap::{SummaryOutcome, generate_coverage_summary, run, summarize};
pub use config::{SummaryConfig, SummaryConfigBuilder};
pub use covsum_domain::OutputFormat;
pub use covsum_shared_kernel::{ConfigurationError, CovsumError, ErrorKind, Result, Threshold};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
