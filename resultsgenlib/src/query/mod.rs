//! Query processing: filter, join, and sort records.
//!
//! This module handles the third stage of the pipeline - combining the
//! loaded tables into the record sets each document needs. It provides:
//!
//! - **Joins**: events, programs, races, results files, organizers
//! - **Resources**: EventON link lists and live results tabs
//! - **Ordering**: numeric sort over display-string fields
//!
//! ## Example
//!
//! ```rust,ignore
//! use resultsgenlib::query::{programs_by_event, assemble_event};
//!
//! let programs = programs_by_event(&programs.records, &races.records, "10");
//! let doc = assemble_event(event, &programs, organizers);
//! ```

pub mod joins;
pub mod ordering;
pub mod resources;

pub use joins::{
    assemble_event, events_summary, find_event, is_active, organizers_by_event,
    programs_by_event, published_results_files, race_ids, races_by_program,
    results_files_by_event, results_files_by_race_ids, EventDocument, ProgramRaces,
    EVENT_SUMMARY_FIELDS, PROGRAM_FIELDS_ON_RACE,
};
pub use ordering::{compare_keys, numeric_key, sort_by_numeric_field};
pub use resources::{event_resources, live_races, LiveRace, Resource, START_LIST};
