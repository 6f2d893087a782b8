// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CovsumError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CovsumError>,
    },

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Resource unavailable: {0}")]
    Resource(#[from] ResourceError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, CovsumError>;

/// Tag identifying which failure class an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedInput,
    InvalidShape,
    Configuration,
    ResourceUnavailable,
    Output,
}

impl CovsumError {
    /// Failure class of the innermost error, looking through context layers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Context { source, .. } => source.kind(),
            Self::Decode(DecodeError::MalformedInput { .. }) => ErrorKind::MalformedInput,
            Self::Decode(DecodeError::InvalidShape { .. }) => ErrorKind::InvalidShape,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Resource(_) => ErrorKind::ResourceUnavailable,
            Self::Output(_) => ErrorKind::Output,
        }
    }
}

/// Errors raised while turning raw report text into the typed model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    #[error("invalid shape at {field_path}: expected {expected_kind}, found {actual_value_preview}")]
    InvalidShape {
        field_path: String,
        expected_kind: String,
        actual_value_preview: String,
    },
}

impl DecodeError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput { message: message.into() }
    }

    pub fn invalid_shape(
        field_path: impl Into<String>,
        expected_kind: impl Into<String>,
        actual_value_preview: impl Into<String>,
    ) -> Self {
        Self::InvalidShape {
            field_path: field_path.into(),
            expected_kind: expected_kind.into(),
            actual_value_preview: actual_value_preview.into(),
        }
    }
}

/// Errors in externally supplied settings; raised before any report is read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("threshold '{value}' is not an integer")]
    NotAnInteger { value: String },

    #[error("threshold {value} must be between 0 and 100")]
    OutOfRange { value: i64 },

    #[error("configuration building failed: {0}")]
    Builder(String),
}

/// The report document could not be located or read.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("cannot read report '{location}': {source}")]
    Unavailable {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while serialising or writing the rendered summary.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialise {format} output: {details}")]
    Serialization { format: String, details: String },
}

impl From<std::io::Error> for OutputError {
    fn from(err: std::io::Error) -> Self {
        Self::Write { path: PathBuf::from("<stdout>"), source: err }
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<std::fmt::Error> for OutputError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Serialization {
            format: "text".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CovsumError {
    fn from(err: serde_json::Error) -> Self {
        OutputError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for OutputError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for CovsumError {
    fn from(err: serde_yaml::Error) -> Self {
        OutputError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CovsumError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CovsumError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CovsumError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
