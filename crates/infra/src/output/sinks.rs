use std::{
    io::Write,
    path::{Path, PathBuf},
};

use covsum_ports::SummarySink;
use covsum_shared_kernel::{OutputError, Result};

use crate::persistence::FileWriter;

/// Prints the summary on stdout, newline-terminated.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl SummarySink for StdoutSink {
    fn publish(&self, text: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{text}").map_err(OutputError::from)?;
        out.flush().map_err(OutputError::from)?;
        Ok(())
    }
}

/// Writes the summary to a file, replacing it atomically.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SummarySink for FileSink {
    fn publish(&self, text: &str) -> Result<()> {
        let mut data = String::with_capacity(text.len() + 1);
        data.push_str(text);
        data.push('\n');
        FileWriter::atomic_write(&self.path, data.as_bytes())
            .map_err(|source| OutputError::Write { path: self.path.clone(), source })?;
        log::info!("summary written to {}", self.path.display());
        Ok(())
    }
}
