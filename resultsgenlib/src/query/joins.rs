//! Relational joins over loaded tables.
//!
//! Every function here is pure: record slices in, new records out. The join
//! graph is Event → Program → Race → ResultsFile, plus Event ↔ Organizer
//! through the junction table.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::data::{same_id, Record};

use super::ordering::sort_by_numeric_field;

/// Event fields published in summaries. Everything else is internal.
pub const EVENT_SUMMARY_FIELDS: [&str; 8] = [
    "id",
    "eventReference",
    "title",
    "startDate",
    "endDate",
    "city",
    "county",
    "district",
];

/// Program fields copied onto each race when an event is assembled.
pub const PROGRAM_FIELDS_ON_RACE: [&str; 13] = [
    "eventID",
    "sport",
    "distanceType",
    "swimDistance",
    "swimLaps",
    "firstRunDistance",
    "firstRunLaps",
    "cyclingDistance",
    "cyclingLaps",
    "runDistance",
    "runLaps",
    "secondRunDistance",
    "secondRunLaps",
];

/// A program together with its races.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramRaces {
    pub program: Record,
    pub races: Vec<Record>,
}

/// A single event ready for publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDocument {
    #[serde(flatten)]
    pub event: Record,
    /// Organizers sorted by numeric id
    pub organizers: Vec<Record>,
    /// Races across all programs, deduplicated and sorted by numeric id
    pub races: Vec<Record>,
}

/// Project every event onto the published summary fields.
pub fn events_summary(events: &[Record]) -> Vec<Record> {
    events
        .iter()
        .map(|e| e.project(&EVENT_SUMMARY_FIELDS))
        .collect()
}

/// Find an event by id.
pub fn find_event<'a>(events: &'a [Record], event_id: &str) -> Option<&'a Record> {
    events.iter().find(|e| same_id(e.value("id"), event_id))
}

/// Races belonging to a program.
pub fn races_by_program(races: &[Record], program_id: &str) -> Vec<Record> {
    races
        .iter()
        .filter(|r| same_id(r.value("programID"), program_id))
        .cloned()
        .collect()
}

/// Programs of an event, each with its races attached.
pub fn programs_by_event(programs: &[Record], races: &[Record], event_id: &str) -> Vec<ProgramRaces> {
    let result: Vec<ProgramRaces> = programs
        .iter()
        .filter(|p| same_id(p.value("eventID"), event_id))
        .map(|p| ProgramRaces {
            program: p.clone(),
            races: races_by_program(races, p.value("id")),
        })
        .collect();
    debug!(event_id, programs = result.len(), "joined programs");
    result
}

/// Union of race ids across programs, in first-seen order.
pub fn race_ids(programs: &[ProgramRaces]) -> Vec<String> {
    let mut seen = HashSet::new();
    programs
        .iter()
        .flat_map(|p| p.races.iter())
        .map(|r| r.value("id").trim().to_string())
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Results files whose `raceID` is one of `race_ids`.
pub fn results_files_by_race_ids(files: &[Record], race_ids: &[String]) -> Vec<Record> {
    files
        .iter()
        .filter(|f| race_ids.iter().any(|id| same_id(f.value("raceID"), id)))
        .cloned()
        .collect()
}

/// Results files of an event, found through the event's programs and races.
pub fn results_files_by_event(
    programs: &[Record],
    races: &[Record],
    files: &[Record],
    event_id: &str,
) -> Vec<Record> {
    let event_programs = programs_by_event(programs, races, event_id);
    let ids = race_ids(&event_programs);
    let result = results_files_by_race_ids(files, &ids);
    debug!(event_id, races = ids.len(), files = result.len(), "joined results files");
    result
}

/// Visibility flag shared by results files and event files.
pub fn is_active(record: &Record) -> bool {
    record.value("active") == "TRUE"
}

/// Active results files in display order.
pub fn published_results_files(files: Vec<Record>) -> Vec<Record> {
    let mut active: Vec<Record> = files.into_iter().filter(is_active).collect();
    sort_by_numeric_field(&mut active, "displayOrder");
    active
}

/// Organizers linked to an event through the junction table, by numeric id.
///
/// Junction rows are read positionally: column 1 holds the event id and
/// column 2 the organizer id.
pub fn organizers_by_event(
    organizers: &[Record],
    event_organizers: &[Record],
    event_id: &str,
) -> Vec<Record> {
    let organizer_ids: Vec<&str> = event_organizers
        .iter()
        .filter(|link| link.value_at(1).is_some_and(|id| same_id(id, event_id)))
        .filter_map(|link| link.value_at(2))
        .collect();

    let mut result: Vec<Record> = organizers
        .iter()
        .filter(|o| organizer_ids.iter().any(|id| same_id(o.value("id"), id)))
        .cloned()
        .collect();
    sort_by_numeric_field(&mut result, "id");
    result
}

/// Assemble the single-event document.
///
/// Races from every program are flattened, given whichever sport and
/// distance attributes their program carries, stripped of `programID`, deduplicated by id (first
/// occurrence wins) and sorted by numeric id.
pub fn assemble_event(
    event: &Record,
    programs: &[ProgramRaces],
    organizers: Vec<Record>,
) -> EventDocument {
    let mut seen = HashSet::new();
    let mut races = Vec::new();

    for program in programs {
        for race in &program.races {
            if !seen.insert(race.value("id").trim().to_string()) {
                continue;
            }
            let mut race = race.clone();
            for field in PROGRAM_FIELDS_ON_RACE {
                if let Some(value) = program.program.get(field) {
                    race.set(field, value);
                }
            }
            race.remove("programID");
            races.push(race);
        }
    }
    sort_by_numeric_field(&mut races, "id");

    EventDocument {
        event: event.project(&EVENT_SUMMARY_FIELDS),
        organizers,
        races,
    }
}
