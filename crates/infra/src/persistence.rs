//! File-backed adapters for reading reports and writing summaries.

mod file_reader;
mod file_writer;

pub use file_reader::{FileReader, FileReportSource};
pub use file_writer::FileWriter;
