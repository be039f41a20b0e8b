//! Link lists for event pages: EventON resources and live results tabs.

use std::collections::HashSet;

use serde::Serialize;
use tracing::warn;

use crate::data::{same_id, Record};

use super::joins::is_active;

/// Event file link types that are never listed as resources.
pub const EXCLUDED_LINK_TYPES: [&str; 2] = ["POSTER", "COVER_IMAGE"];

/// Link type always listed after every other resource.
pub const START_LIST: &str = "START_LIST";

/// One link on an event's EventON page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub link_type: String,
    pub link_label: String,
    pub link_url: String,
}

impl Resource {
    /// Resource for a published event file.
    pub fn from_event_file(file: &Record, file_base_url: &str) -> Self {
        Resource {
            link_type: file.value("linkType").to_string(),
            link_label: file.value("title").to_string(),
            link_url: format!("{}{}", file_base_url, file.value("fileName")),
        }
    }

    /// Resource for an externally maintained EventON row, taken by field name.
    pub fn from_event_on(row: &Record) -> Self {
        Resource {
            link_type: row.value("linkType").to_string(),
            link_label: row.value("linkLabel").to_string(),
            link_url: row.value("linkUrl").to_string(),
        }
    }

    pub fn is_start_list(&self) -> bool {
        self.link_type == START_LIST
    }
}

/// Resources listed on an event's EventON page.
///
/// Active event files of the event come first (posters and cover images
/// excluded), then the extra EventON rows, then every start list.
pub fn event_resources(
    event_files: &[Record],
    event_on: &[Record],
    event_id: &str,
    file_base_url: &str,
) -> Vec<Resource> {
    let (start_lists, mut resources): (Vec<Resource>, Vec<Resource>) = event_files
        .iter()
        .filter(|f| same_id(f.value("eventID"), event_id) && is_active(f))
        .filter(|f| !EXCLUDED_LINK_TYPES.contains(&f.value("linkType")))
        .map(|f| Resource::from_event_file(f, file_base_url))
        .partition(Resource::is_start_list);

    resources.extend(event_on.iter().map(Resource::from_event_on));
    resources.extend(start_lists);
    resources
}

/// One tab of the live results widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveRace {
    /// Element id shared by the tab and its panel
    pub id: String,
    /// Tab caption
    pub label: String,
    /// Panel heading
    pub title: String,
    /// Embedded frame address
    pub url: String,
}

/// Live races from the live results table, one tab per row.
///
/// Rows without an `id` get `live001`, `live002`, ... by position. A
/// generated id already taken by another row moves on to the next free
/// number, and a repeated explicit id is replaced by a generated one, so
/// every tab addresses exactly one panel.
pub fn live_races(rows: &[Record]) -> Vec<LiveRace> {
    let mut explicit: HashSet<&str> = HashSet::new();
    let keep: Vec<bool> = rows
        .iter()
        .map(|row| {
            let id = row.value("id").trim();
            if id.is_empty() {
                return false;
            }
            if !explicit.insert(id) {
                warn!(id, "duplicate live results id, generating a new one");
                return false;
            }
            true
        })
        .collect();

    let mut used: HashSet<String> = explicit.iter().map(|id| id.to_string()).collect();
    rows.iter()
        .zip(keep)
        .enumerate()
        .map(|(index, (row, keep))| {
            let id = if keep {
                row.value("id").trim().to_string()
            } else {
                let mut number = index + 1;
                while used.contains(&format!("live{:03}", number)) {
                    number += 1;
                }
                let id = format!("live{:03}", number);
                used.insert(id.clone());
                id
            };
            LiveRace {
                id,
                label: row.value("label").to_string(),
                title: row.value("title").to_string(),
                url: row.value("url").to_string(),
            }
        })
        .collect()
}
