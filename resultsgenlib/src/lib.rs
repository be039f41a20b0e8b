//! # resultsgenlib
//!
//! A library for publishing competition results pages from season spreadsheets.
//!
//! ## Overview
//!
//! Race organizers keep the season in a workbook: events, programs, races,
//! organizers, results files and per-race results, each in its own named
//! range. This library reads those ranges, joins them, and renders the
//! documents the results site consumes:
//!
//! - **events.json**: summary of every event in the season
//! - **Event JSON**: one event with its organizers and flattened races
//! - **Results files list**: downloadable results PDFs of an event
//! - **Results table**: one race's results as an HTML table
//! - **Live results**: tabbed frames pointing at live timing pages
//! - **EventON resources**: guide, rules, maps, forms and start lists of an event
//!
//! ## Features
//!
//! - **Header-driven loading**: rows are keyed by the header row, padding rows dropped
//! - **Pluggable edges**: `TabularSource` and `FileSink` traits, with CSV-directory,
//!   directory and in-memory backends
//! - **Versioned presentation**: column labels and icons come from a TOML table
//! - **Templated markup**: HTML fragments are handlebars templates embedded in the crate
//! - **Pure renderers**: joins and renderers return values, no I/O side effects
//!
//! ## Example
//!
//! ```rust
//! use resultsgenlib::output::html;
//! use resultsgenlib::{Presentation, Record};
//!
//! let results = vec![
//!     Record::from_pairs([("athleteID", "77"), ("rank", "1"), ("name", "Ana"), ("time", "01:02:03")]),
//!     Record::from_pairs([("athleteID", "78"), ("rank", "2"), ("name", "Rita"), ("time", "01:04:10")]),
//! ];
//!
//! let table = html::results_table(&results, &Presentation::default()).unwrap();
//! assert!(table.contains("<th>#</th>"));
//! assert!(table.contains("<th>Nome</th>"));
//! assert!(table.contains("<th>Hora</th>"));
//! assert!(table.contains("<td>Ana</td>"));
//! assert!(!table.contains("77"));
//! ```
//!
//! Generating a document end to end:
//!
//! ```rust
//! use resultsgenlib::{generate, Artifact, GenerationParams, MemorySink, MemorySource, Presentation, Sources};
//!
//! let source = MemorySource::new().with_range(
//!     "TableEvent",
//!     &[&["id", "eventReference", "title"], &["10", "2024-lisboa", "Triatlo de Lisboa"]],
//! );
//! let sink = MemorySink::new();
//!
//! let file = generate(
//!     Artifact::EventsJson,
//!     Sources::single(&source),
//!     &sink,
//!     &GenerationParams::new(),
//!     &Presentation::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(file, "events.json");
//! assert_eq!(
//!     sink.content("events.json").unwrap(),
//!     r#"[{"id":"10","eventReference":"2024-lisboa","title":"Triatlo de Lisboa"}]"#
//! );
//! ```

pub mod data;
pub mod error;
pub mod generate;
pub mod options;
pub mod output;
pub mod query;
pub mod source;

pub use data::{same_id, Record, Table, TableSpec};
pub use error::ResultsgenError;
pub use generate::{generate, render, Artifact, Document, Sources};
pub use options::{GenerationParams, DEFAULT_FILES_BASE_URL};
pub use output::Presentation;
pub use query::{EventDocument, LiveRace, ProgramRaces, Resource};
pub use source::{
    CsvDirectorySource, DirectorySink, FileSink, Grid, MemorySink, MemorySource, Mime,
    TabularSource,
};

/// Result type for resultsgenlib operations
pub type Result<T> = std::result::Result<T, ResultsgenError>;
