// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ConfigurationError, CovsumError, DecodeError, ErrorContext, ErrorKind, OutputError, ResourceError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Coverage, Percentage, SourcePath, Threshold};
