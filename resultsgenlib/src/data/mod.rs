//! Data loading: named ranges to typed records.
//!
//! This module handles the second stage of the pipeline - normalizing the
//! raw grids a tabular source returns into records. It provides:
//!
//! - **Record**: ordered field → display value mapping for one row
//! - **Table**: header-driven loader with presence checks on required fields
//! - **Table specs**: range name, required fields and hidden fields per table
//!
//! ## Example
//!
//! ```rust,ignore
//! use resultsgenlib::data::{table, Table};
//!
//! let races = Table::load(&source, &table::RACES)?;
//! println!("{} races", races.len());
//! ```

pub mod record;
pub mod table;

pub use record::{same_id, Record};
pub use table::{Table, TableSpec};
