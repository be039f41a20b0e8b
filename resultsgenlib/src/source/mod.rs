//! Source access: read named ranges and write generated files.
//!
//! This module handles the edges of the pipeline - the spreadsheet-backed
//! data source the tables come from and the storage area the generated
//! documents go to. It provides:
//!
//! - **Tabular sources**: `TabularSource` with CSV-directory and in-memory backends
//! - **File sinks**: `FileSink` with a directory backend
//!
//! ## Example
//!
//! ```rust,ignore
//! use resultsgenlib::source::{CsvDirectorySource, TabularSource};
//!
//! let source = CsvDirectorySource::new("exports/2024");
//! let grid = source.read_named_range("TableEvent")?;
//! ```

pub mod sink;
pub mod tabular;

pub use sink::{DirectorySink, FileSink, MemorySink, Mime};
pub use tabular::{CsvDirectorySource, Grid, MemorySource, TabularSource};
