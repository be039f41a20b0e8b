//! Error types for resultsgenlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading tables or generating documents
#[derive(Error, Debug)]
pub enum ResultsgenError {
    /// The data source has no range with this name
    #[error("named range not found: {range}")]
    RangeNotFound { range: String },

    /// Failed to read a backing file of the data source
    #[error("failed to read '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed CSV in a backing file
    #[error("invalid CSV in '{path}': {message}")]
    Csv { path: PathBuf, message: String },

    /// A table's header row lacks a field the join layer depends on
    #[error("table '{table}' has no '{field}' column")]
    MissingField { table: String, field: String },

    /// A generation parameter the operation needs was not set
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// No event with the requested id
    #[error("event not found: {0}")]
    EventNotFound(String),

    /// A results range contains a header but no result rows
    #[error("results range '{range}' has no rows")]
    EmptyResults { range: String },

    /// Presentation configuration could not be parsed
    #[error("invalid presentation config '{path}': {message}")]
    Config { path: PathBuf, message: String },

    /// An HTML template failed to render
    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
