//! Tabular data sources addressed by range name.
//!
//! A named range is a rectangular grid of display values. Every cell is a
//! string exactly as a user would see it in the spreadsheet.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ResultsgenError;
use crate::Result;

/// A rectangular region of display-formatted cells, row-major.
pub type Grid = Vec<Vec<String>>;

/// A source of named ranges.
pub trait TabularSource {
    /// Read the grid of display values for the named range.
    ///
    /// Fails with [`ResultsgenError::RangeNotFound`] if the range is undefined.
    fn read_named_range(&self, range: &str) -> Result<Grid>;
}

/// Named ranges exported as one CSV file per range: `<dir>/<RangeName>.csv`.
#[derive(Debug, Clone)]
pub struct CsvDirectorySource {
    root: PathBuf,
}

impl CsvDirectorySource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory the ranges are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn range_path(&self, range: &str) -> PathBuf {
        self.root.join(format!("{}.csv", range))
    }
}

impl TabularSource for CsvDirectorySource {
    fn read_named_range(&self, range: &str) -> Result<Grid> {
        let path = self.range_path(range);
        if !path.is_file() {
            return Err(ResultsgenError::RangeNotFound {
                range: range.to_string(),
            });
        }

        let file = std::fs::File::open(&path).map_err(|source| ResultsgenError::SourceRead {
            path: path.clone(),
            source,
        })?;

        // Header handling belongs to the table loader, so every line is data here.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut grid = Grid::new();
        for row in reader.records() {
            let row = row.map_err(|e| ResultsgenError::Csv {
                path: path.clone(),
                message: e.to_string(),
            })?;
            grid.push(row.iter().map(str::to_string).collect());
        }

        debug!(range, rows = grid.len(), path = %path.display(), "read named range");
        Ok(grid)
    }
}

/// Named ranges held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    ranges: HashMap<String, Grid>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a range from string slices.
    pub fn with_range(mut self, range: &str, rows: &[&[&str]]) -> Self {
        self.insert(
            range,
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        );
        self
    }

    /// Add or replace a range.
    pub fn insert(&mut self, range: &str, grid: Grid) {
        self.ranges.insert(range.to_string(), grid);
    }
}

impl TabularSource for MemorySource {
    fn read_named_range(&self, range: &str) -> Result<Grid> {
        self.ranges
            .get(range)
            .cloned()
            .ok_or_else(|| ResultsgenError::RangeNotFound {
                range: range.to_string(),
            })
    }
}
