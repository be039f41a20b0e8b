//! Table loading: turn a named range into records.
//!
//! Loading follows the spreadsheet conventions the season workbooks use:
//!
//! 1. Rows whose first cell is empty are padding and are dropped
//! 2. The first surviving row holds the field names
//! 3. Every remaining row becomes one `Record`, in sheet order
//!
//! No type coercion happens: values stay display strings.

use tracing::debug;

use crate::error::ResultsgenError;
use crate::source::tabular::{Grid, TabularSource};
use crate::Result;

use super::record::Record;

/// Declares how a named range is loaded.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    /// Named range holding the table
    pub range: &'static str,
    /// Fields that must appear in the header row
    pub required: &'static [&'static str],
    /// Internal fields dropped from every record
    pub hidden: &'static [&'static str],
}

impl TableSpec {
    /// Spec for an ad hoc range with no schema expectations.
    pub const fn untyped(range: &'static str) -> Self {
        Self {
            range,
            required: &[],
            hidden: &[],
        }
    }
}

pub const EVENTS: TableSpec = TableSpec {
    range: "TableEvent",
    required: &["id"],
    hidden: &[],
};

pub const PROGRAMS: TableSpec = TableSpec {
    range: "TableProgram",
    required: &["id", "eventID"],
    hidden: &["races"],
};

pub const RACES: TableSpec = TableSpec {
    range: "TableRace",
    required: &["id", "programID"],
    hidden: &[
        "resultsRangeName",
        "championships",
        "technicalDelegate",
        "headReferee",
        "competitionJury",
        "results",
    ],
};

pub const ORGANIZERS: TableSpec = TableSpec {
    range: "TableOrganizer",
    required: &["id"],
    hidden: &[],
};

/// Junction table, read positionally: column 1 is the event id, column 2 the organizer id.
pub const EVENT_ORGANIZERS: TableSpec = TableSpec::untyped("TableEventOrganizer");

pub const RESULTS_FILES: TableSpec = TableSpec {
    range: "TableResultsFile",
    required: &["raceID"],
    hidden: &[],
};

pub const EVENT_FILES: TableSpec = TableSpec {
    range: "TableEventFile",
    required: &["eventID"],
    hidden: &[],
};

pub const EVENT_ON: TableSpec = TableSpec::untyped("TableEventOn");

pub const LIVE_RESULTS: TableSpec = TableSpec {
    range: "TableLiveResults",
    required: &["label"],
    hidden: &[],
};

/// A loaded table: header field names plus data records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Range the table was loaded from
    pub name: String,
    /// Header row, in column order
    pub fields: Vec<String>,
    /// Data rows, in sheet order
    pub records: Vec<Record>,
}

impl Table {
    /// Build a table from a raw grid.
    ///
    /// Padding rows are removed before the header is taken, so a header row
    /// with a blank first cell is dropped like any other padding row.
    pub fn from_grid(name: &str, grid: Grid) -> Self {
        let mut rows = grid.into_iter().filter(|row| has_first_cell(row));

        let fields: Vec<String> = match rows.next() {
            Some(header) => header,
            None => {
                return Table {
                    name: name.to_string(),
                    ..Default::default()
                }
            }
        };

        let records = rows
            .map(|row| {
                Record::from_pairs(
                    fields
                        .iter()
                        .enumerate()
                        .map(|(i, field)| (field.clone(), row.get(i).cloned().unwrap_or_default())),
                )
            })
            .collect();

        Table {
            name: name.to_string(),
            fields,
            records,
        }
    }

    /// Read and build the table from a data source, without schema checks.
    pub fn read(source: &dyn TabularSource, range: &str) -> Result<Self> {
        let grid = source.read_named_range(range)?;
        let table = Self::from_grid(range, grid);
        debug!(
            range,
            fields = table.fields.len(),
            records = table.records.len(),
            "loaded table"
        );
        Ok(table)
    }

    /// Load a table as declared by `spec`: read, validate, strip hidden fields.
    pub fn load(source: &dyn TabularSource, spec: &TableSpec) -> Result<Self> {
        let mut table = Self::read(source, spec.range)?;
        table.require_fields(spec.required)?;
        if !spec.hidden.is_empty() {
            table.fields.retain(|f| !spec.hidden.contains(&f.as_str()));
            table.records = table
                .records
                .iter()
                .map(|r| r.without(spec.hidden))
                .collect();
        }
        Ok(table)
    }

    /// Check that the header row contains every listed field.
    pub fn require_fields(&self, required: &[&str]) -> Result<()> {
        for field in required {
            if !self.fields.iter().any(|f| f == field) {
                return Err(ResultsgenError::MissingField {
                    table: self.name.clone(),
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn has_first_cell(row: &[String]) -> bool {
    row.first().is_some_and(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::tabular::MemorySource;

    fn grid(rows: &[&[&str]]) -> Grid {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_header_consumed_and_blank_rows_dropped() {
        let table = Table::from_grid(
            "TableEvent",
            grid(&[
                &["id", "title"],
                &["1", "Lisboa"],
                &["", "ghost"],
                &[],
                &["2", "Porto"],
                &["", ""],
            ]),
        );

        assert_eq!(table.fields, vec!["id", "title"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].value("title"), "Lisboa");
        assert_eq!(table.records[1].value("id"), "2");
        assert!(table.records.iter().all(|r| r.value("id") != "id"));
    }

    #[test]
    fn test_leading_padding_rows_skipped_before_header() {
        let table = Table::from_grid("T", grid(&[&["", "x"], &["id", "name"], &["3", "Ana"]]));
        assert_eq!(table.fields, vec!["id", "name"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_short_rows_padded_with_empty_values() {
        let table = Table::from_grid("T", grid(&[&["id", "name", "team"], &["1", "Ana"]]));
        assert_eq!(table.records[0].value("team"), "");
        assert!(table.records[0].contains("team"));
    }

    #[test]
    fn test_empty_grid() {
        let table = Table::from_grid("T", Grid::new());
        assert!(table.fields.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_hides_internal_fields() {
        let source = MemorySource::new().with_range(
            "TableRace",
            &[
                &["id", "programID", "resultsRangeName", "headReferee", "title"],
                &["5", "1", "R5", "Rui", "Elite"],
            ],
        );
        let table = Table::load(&source, &RACES).unwrap();

        assert_eq!(table.fields, vec!["id", "programID", "title"]);
        let fields: Vec<&str> = table.records[0].fields().collect();
        assert_eq!(fields, vec!["id", "programID", "title"]);
    }

    #[test]
    fn test_load_missing_required_field() {
        let source = MemorySource::new().with_range("TableProgram", &[&["id", "sport"], &["1", "TRI"]]);
        let err = Table::load(&source, &PROGRAMS).unwrap_err();
        assert_eq!(err.to_string(), "table 'TableProgram' has no 'eventID' column");
    }

    #[test]
    fn test_load_missing_range_propagates() {
        let source = MemorySource::new();
        let err = Table::load(&source, &EVENTS).unwrap_err();
        assert!(matches!(err, ResultsgenError::RangeNotFound { .. }));
    }
}
