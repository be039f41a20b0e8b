//! Output rendering: present joined records as HTML fragments or JSON.
//!
//! This module handles the final stage of the pipeline - turning record
//! sets into publishable strings. It provides:
//!
//! - **HTML**: handlebars templates for results file lists, results tables,
//!   resource lists and live tabs
//! - **JSON**: events list and single-event documents
//! - **Presentation**: versioned label and icon tables
//!
//! Renderers are pure: strings out, no I/O. Writing the result is the
//! file sink's job.
//!
//! ## Example
//!
//! ```rust,ignore
//! use resultsgenlib::output::{html, Presentation};
//!
//! let fragment = html::results_table(&results, &Presentation::default())?;
//! ```

pub mod html;
pub mod json;
pub mod presentation;

pub use presentation::Presentation;
