//! JSON document rendering.
//!
//! Documents are compact (no pretty printing) and carry no schema version.

use crate::data::Record;
use crate::query::EventDocument;
use crate::Result;

/// Events list: an array of event summaries.
pub fn events_json(events: &[Record]) -> Result<String> {
    Ok(serde_json::to_string(events)?)
}

/// A single assembled event.
pub fn event_json(event: &EventDocument) -> Result<String> {
    Ok(serde_json::to_string(event)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{assemble_event, programs_by_event};

    #[test]
    fn test_events_json_array() {
        let events = vec![
            Record::from_pairs([("id", "1"), ("title", "Lisboa")]),
            Record::from_pairs([("id", "2"), ("title", "Porto")]),
        ];
        assert_eq!(
            events_json(&events).unwrap(),
            r#"[{"id":"1","title":"Lisboa"},{"id":"2","title":"Porto"}]"#
        );
        assert_eq!(events_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_event_json_single_race_per_id() {
        let event = Record::from_pairs([("id", "10"), ("eventReference", "2024-lisboa")]);
        let programs = vec![
            Record::from_pairs([("id", "1"), ("eventID", "10"), ("sport", "TRIATHLON")]),
            Record::from_pairs([("id", "2"), ("eventID", "10"), ("sport", "DUATHLON")]),
        ];
        let races = vec![
            Record::from_pairs([("id", "5"), ("programID", "1")]),
            Record::from_pairs([("id", "5"), ("programID", "2")]),
        ];
        let joined = programs_by_event(&programs, &races, "10");
        let json = event_json(&assemble_event(&event, &joined, Vec::new())).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let races = value["races"].as_array().unwrap();
        assert_eq!(races.len(), 1);
        assert_eq!(races[0]["id"], "5");
        assert_eq!(races[0]["sport"], "TRIATHLON");
        assert_eq!(races[0]["eventID"], "10");
        assert!(races[0].get("programID").is_none());
        assert_eq!(value["eventReference"], "2024-lisboa");
    }
}
