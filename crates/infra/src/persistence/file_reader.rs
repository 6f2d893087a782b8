use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use covsum_ports::ReportSource;
use covsum_shared_kernel::{ResourceError, Result};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// [`ReportSource`] reading a report document from disk.
#[derive(Debug, Clone)]
pub struct FileReportSource {
    path: PathBuf,
    location: String,
}

impl FileReportSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSource for FileReportSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn load(&self) -> Result<Vec<u8>> {
        FileReader::read_to_end(&self.path).map_err(|source| {
            ResourceError::Unavailable { location: self.location.clone(), source }.into()
        })
    }
}
